//! 国际化模块
//! 支持中英文切换

use serde::{Deserialize, Serialize};

/// 语言枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// 获取语言显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// 切换语言
    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// 国际化文本
pub struct I18n {
    lang: Language,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    // === 标题 ===
    pub fn app_title(&self) -> &'static str {
        match self.lang {
            Language::English => " Refresh Indicator ",
            Language::Chinese => " 刷新指示器 ",
        }
    }

    pub fn preview(&self) -> &'static str {
        match self.lang {
            Language::English => " Preview ",
            Language::Chinese => " 预览 ",
        }
    }

    pub fn details(&self) -> &'static str {
        match self.lang {
            Language::English => " Details ",
            Language::Chinese => " 详情 ",
        }
    }

    pub fn help(&self) -> &'static str {
        match self.lang {
            Language::English => " Help ",
            Language::Chinese => " 帮助 ",
        }
    }

    // === 详情字段 ===
    pub fn status(&self) -> &'static str {
        match self.lang {
            Language::English => "Status",
            Language::Chinese => "状态",
        }
    }

    pub fn percentage(&self) -> &'static str {
        match self.lang {
            Language::English => "Percentage",
            Language::Chinese => "进度",
        }
    }

    pub fn factor(&self) -> &'static str {
        match self.lang {
            Language::English => "Factor",
            Language::Chinese => "淡入系数",
        }
    }

    pub fn arc(&self) -> &'static str {
        match self.lang {
            Language::English => "Arc",
            Language::Chinese => "弧度",
        }
    }

    pub fn phase(&self) -> &'static str {
        match self.lang {
            Language::English => "Phase",
            Language::Chinese => "阶段",
        }
    }

    pub fn rotation(&self) -> &'static str {
        match self.lang {
            Language::English => "Rotation",
            Language::Chinese => "旋转",
        }
    }

    pub fn pending(&self) -> &'static str {
        match self.lang {
            Language::English => "Pending steps",
            Language::Chinese => "待触发步骤",
        }
    }

    pub fn theme(&self) -> &'static str {
        match self.lang {
            Language::English => "Theme",
            Language::Chinese => "主题",
        }
    }

    // === 提示消息 ===
    pub fn status_changed(&self) -> &'static str {
        match self.lang {
            Language::English => "Status changed to",
            Language::Chinese => "状态已切换为",
        }
    }

    pub fn theme_changed(&self) -> &'static str {
        match self.lang {
            Language::English => "Theme switched to",
            Language::Chinese => "主题已切换为",
        }
    }

    pub fn language_changed(&self) -> &'static str {
        match self.lang {
            Language::English => "Language: English",
            Language::Chinese => "语言：中文",
        }
    }

    pub fn close_hint(&self) -> &'static str {
        match self.lang {
            Language::English => "Press Esc or ? to close",
            Language::Chinese => "按 Esc 或 ? 关闭",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self.lang {
            Language::English => "Loading...",
            Language::Chinese => "加载中...",
        }
    }
}
