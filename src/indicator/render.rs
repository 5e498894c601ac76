//! 渲染输出
//! 状态机交给渲染层的数据，不依赖任何具体绘制后端

use super::geometry::{CircleStyle, PolygonStyle};
use ratatui::style::Color;
use std::collections::BTreeMap;

/// 外层容器（尺寸 size × size，带内边距，圆形）
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub border_radius: &'static str,
    /// 原样透传
    pub class_name: Option<String>,
    /// 原样透传
    pub style: BTreeMap<String, String>,
}

/// 加载动画委托（外部 spinner 组件）的参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerSpec {
    pub size: f64,
    pub thickness: f64,
    pub color: Color,
}

/// 静态环形：viewBox 为 SIZE × SIZE 的圆 + 三角标记
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    /// 显示尺寸
    pub paper_size: f64,
    pub view_box: f64,
    pub circle: CircleStyle,
    pub polygon: PolygonStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Spinner(SpinnerSpec),
    Ring(RingSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub container: Container,
    pub content: Content,
}

impl RenderOutput {
    pub fn ring(&self) -> Option<&RingSpec> {
        match &self.content {
            Content::Ring(ring) => Some(ring),
            Content::Spinner(_) => None,
        }
    }

    pub fn spinner(&self) -> Option<&SpinnerSpec> {
        match &self.content {
            Content::Spinner(spinner) => Some(spinner),
            Content::Ring(_) => None,
        }
    }
}
