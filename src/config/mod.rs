//! 配置管理模块

mod persistence;

pub use persistence::*;

use crate::i18n::Language;
use crate::indicator::{IndicatorProps, Percentage, Status, StrokeColors, DEFAULT_SIZE};
use anyhow::Context;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// 默认帧间隔（毫秒）
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 50;

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// 主题名称
    pub theme: String,
    /// 界面语言
    #[serde(default)]
    pub language: Language,
    /// 刷新帧间隔（毫秒）
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_frame_interval() -> u64 {
    DEFAULT_FRAME_INTERVAL_MS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_string(),
            language: Language::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// 指示器初始属性
/// 颜色保留原始文本，保存时不做转换
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub size: f64,
    pub percentage: f64,
    pub status: Status,
    pub color: Option<String>,
    pub loading_color: Option<String>,
    pub class_name: Option<String>,
    pub style: BTreeMap<String, String>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            percentage: 0.0,
            status: Status::Ready,
            color: None,
            loading_color: None,
            class_name: None,
            style: BTreeMap::new(),
        }
    }
}

impl IndicatorConfig {
    /// 转换为指示器属性，颜色文本无法解析时报错
    pub fn to_props(&self) -> anyhow::Result<IndicatorProps> {
        if self.size.is_nan() || self.size <= 0.0 {
            anyhow::bail!("indicator.size must be positive, got {}", self.size);
        }
        Ok(IndicatorProps {
            size: self.size,
            percentage: Percentage::new(self.percentage),
            status: self.status.clone(),
            colors: StrokeColors {
                color: parse_color(self.color.as_deref()).context("invalid indicator.color")?,
                loading_color: parse_color(self.loading_color.as_deref())
                    .context("invalid indicator.loading_color")?,
            },
            class_name: self.class_name.clone(),
            style: self.style.clone(),
        })
    }
}

fn parse_color(value: Option<&str>) -> anyhow::Result<Option<Color>> {
    match value {
        None => Ok(None),
        Some(text) => Color::from_str(text)
            .map(Some)
            .map_err(|_| anyhow::anyhow!("unrecognized color '{}'", text)),
    }
}

/// 应用配置（持久化到 config.json）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// 指示器初始属性
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// 应用设置
    #[serde(default)]
    pub settings: AppSettings,
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.indicator.size, 40.0);
        assert_eq!(config.indicator.status, Status::Ready);
        assert_eq!(config.settings.frame_interval_ms, 50);
        assert_eq!(config.settings.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_to_props_parses_colors() {
        let config = IndicatorConfig {
            color: Some("#e0e0e0".to_string()),
            loading_color: Some("blue".to_string()),
            percentage: 140.0,
            ..Default::default()
        };
        let props = config.to_props().unwrap();
        assert_eq!(props.colors.color, Some(Color::Rgb(224, 224, 224)));
        assert_eq!(props.colors.loading_color, Some(Color::Blue));
        assert_eq!(props.percentage.value(), 100.0);
    }

    #[test]
    fn test_to_props_rejects_bad_input() {
        let config = IndicatorConfig {
            color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let err = config.to_props().unwrap_err();
        assert!(format!("{:#}", err).contains("indicator.color"));

        let config = IndicatorConfig {
            size: 0.0,
            ..Default::default()
        };
        assert!(config.to_props().is_err());
    }

    #[test]
    fn test_unknown_status_survives_round_trip() {
        let json = r#"{"indicator":{"status":"hide"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.indicator.status, Status::Other("hide".to_string()));
        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains(r#""status":"hide""#));
    }
}
