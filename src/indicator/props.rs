//! 指示器输入属性
//! 百分比在边界处截断，状态字符串宽松解析

use crate::theme::Palette;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 默认外框尺寸
pub const DEFAULT_SIZE: f64 = 40.0;

/// 完成百分比，始终位于 [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// 截断到 [0, 100]，NaN 视为 0
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// 0.0 ~ 1.0
    pub fn fraction(self) -> f64 {
        self.0 / Self::MAX
    }

    /// 是否已满（100%）
    pub fn is_complete(self) -> bool {
        self.0 == Self::MAX
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 指示器状态
/// 除 loading / ready 以外的任何值都按静态、非加载处理
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Loading,
    #[default]
    Ready,
    Other(String),
}

impl Status {
    /// 从文本解析，永不失败
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Status::Loading,
            "ready" => Status::Ready,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Loading => "loading",
            Status::Ready => "ready",
            Status::Other(value) => value,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Status::Ready)
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::parse(s))
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::parse(&value)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 颜色覆盖，未设置时回退到调色板
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokeColors {
    /// 未完成时的颜色（默认 grey）
    pub color: Option<Color>,
    /// 加载中 / 已完成时的颜色（默认 primary）
    pub loading_color: Option<Color>,
}

impl StrokeColors {
    pub fn idle(&self, palette: &Palette) -> Color {
        self.color.unwrap_or(palette.grey)
    }

    pub fn active(&self, palette: &Palette) -> Color {
        self.loading_color.unwrap_or(palette.primary)
    }
}

/// 指示器的全部输入
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorProps {
    /// 外框尺寸（显示尺寸，与内部 SIZE 坐标系无关）
    pub size: f64,
    pub percentage: Percentage,
    pub status: Status,
    pub colors: StrokeColors,
    /// 透传给容器的 class
    pub class_name: Option<String>,
    /// 透传给容器的样式
    pub style: BTreeMap<String, String>,
}

impl Default for IndicatorProps {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            percentage: Percentage::default(),
            status: Status::default(),
            colors: StrokeColors::default(),
            class_name: None,
            style: BTreeMap::new(),
        }
    }
}
