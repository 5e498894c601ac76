//! Refresh Indicator - 环形刷新/进度指示器
//!
//! 核心：几何计算 + 动画时序状态机。
//! 渲染层（终端预览、SVG 导出）只消费计算结果。

pub mod animator;
pub mod clock;
pub mod config;
pub mod i18n;
pub mod indicator;
pub mod svg;
pub mod theme;
