//! 应用状态管理模块
//! 持有指示器实例与界面状态

use crate::ui::Spinner;
use refresh_indicator::config::AppConfig;
use refresh_indicator::i18n::{I18n, Language};
use refresh_indicator::indicator::{RefreshIndicator, Status};
use refresh_indicator::theme::Theme;
use std::time::{Duration, Instant};

/// 每次按键调整的百分比步长
pub const PERCENTAGE_STEP: f64 = 5.0;

/// 应用模式枚举
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
}

/// 状态消息（带时间戳，用于自动淡出）
pub struct StatusMessage {
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    pub fn new(text: String) -> Self {
        Self {
            text,
            created_at: Instant::now(),
        }
    }

    /// 获取消息年龄（秒）
    pub fn age_secs(&self) -> f64 {
        self.created_at.elapsed().as_secs_f64()
    }

    /// 消息是否过期（超过 3 秒）
    pub fn is_expired(&self) -> bool {
        self.age_secs() > 3.0
    }

    /// 获取淡出透明度 (1.0 = 完全可见, 0.0 = 完全透明)
    pub fn opacity(&self) -> f64 {
        let age = self.age_secs();
        if age < 2.0 {
            1.0
        } else {
            (1.0 - (age - 2.0)).max(0.0)
        }
    }
}

/// 全局应用状态
pub struct AppState {
    /// 启动时加载的配置（退出时写回）
    pub config: AppConfig,
    pub indicator: RefreshIndicator,
    pub theme: Theme,
    pub mode: AppMode,
    pub status_message: Option<StatusMessage>,
    /// 未知状态下的文字 spinner
    pub spinner: Spinner,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let props = config.indicator.to_props()?;
        let theme = Theme::by_name(&config.settings.theme);
        let indicator = RefreshIndicator::new(props, theme.palette());
        Ok(Self {
            config,
            indicator,
            theme,
            mode: AppMode::default(),
            status_message: None,
            spinner: Spinner::default(),
            should_quit: false,
        })
    }

    pub fn language(&self) -> Language {
        self.config.settings.language
    }

    pub fn i18n(&self) -> I18n {
        I18n::new(self.language())
    }

    /// 设置状态栏消息
    pub fn set_status_message(&mut self, text: &str) {
        self.status_message = Some(StatusMessage::new(text.to_string()));
    }

    /// 状态消息透明度
    pub fn status_opacity(&self) -> f64 {
        self.status_message
            .as_ref()
            .map(|m| m.opacity())
            .unwrap_or(0.0)
    }

    /// 切换指示器状态
    pub fn switch_status(&mut self, status: Status) {
        let text = format!("{} {}", self.i18n().status_changed(), status);
        self.indicator.set_status(status);
        self.set_status_message(&text);
    }

    pub fn set_percentage(&mut self, value: f64) {
        self.indicator.set_percentage(value);
    }

    pub fn adjust_percentage(&mut self, delta: f64) {
        let current = self.indicator.percentage().value();
        self.indicator.set_percentage(current + delta);
    }

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        let next = self.theme.next_name();
        self.theme = Theme::by_name(next);
        self.indicator.set_palette(self.theme.palette());
        self.config.settings.theme = next.to_string();
        let text = format!("{} {}", self.i18n().theme_changed(), next);
        self.set_status_message(&text);
    }

    pub fn toggle_language(&mut self) {
        self.config.settings.language = self.language().toggle();
        let text = self.i18n().language_changed();
        self.set_status_message(text);
    }

    /// 每帧调用：推进动画并清理过期消息
    pub fn tick(&mut self, delta: Duration) {
        let fired = self.indicator.advance(delta);
        if fired > 0 {
            log::trace!("{} animation steps fired", fired);
        }
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.is_expired())
        {
            self.status_message = None;
        }
    }

    /// 生成待保存的配置（同步当前状态与进度）
    pub fn to_config(&self) -> AppConfig {
        let mut config = self.config.clone();
        config.indicator.status = self.indicator.status().clone();
        config.indicator.percentage = self.indicator.percentage().value();
        config
    }
}
