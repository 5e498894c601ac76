//! 几何计算模块
//! 纯函数：由尺寸与百分比得到圆、弧、三角标记的属性和样式

use super::props::{Percentage, Status, StrokeColors};
use crate::theme::Palette;
use ratatui::style::Color;
use std::f64::consts::PI;
use std::fmt;

/// 内部画布尺寸（viewBox），与外框显示尺寸无关
pub const SIZE: f64 = 50.0;

const PADDING_RATIO: f64 = 0.14;
const BEGIN_SWEEP_DEG: f64 = 120.0;
const END_SWEEP_DEG: f64 = 410.0;
/// 百分比达到 40% 时 factor 达到 1
const FACTOR_RAMP: f64 = 0.4;

/// 外框内边距
pub fn padding_size(size: f64) -> f64 {
    size * PADDING_RATIO
}

/// 去掉内边距后的绘制区尺寸
pub fn paper_size(size: f64) -> f64 {
    size - padding_size(size) * 2.0
}

/// 圆的基本属性（常量）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleAttr {
    pub radius: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub stroke_width: f64,
}

impl CircleAttr {
    /// 周长 2πr
    pub fn perimeter(&self) -> f64 {
        PI * 2.0 * self.radius
    }
}

pub fn circle_attr() -> CircleAttr {
    CircleAttr {
        radius: SIZE / 2.0 - 5.0,
        origin_x: SIZE / 2.0,
        origin_y: SIZE / 2.0,
        stroke_width: 5.0,
    }
}

/// 弧的起止角度（度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDegrees {
    pub begin: f64,
    pub end: f64,
}

pub fn arc_degrees(percentage: Percentage) -> ArcDegrees {
    let p = percentage.fraction();
    ArcDegrees {
        begin: p * BEGIN_SWEEP_DEG,
        end: p * END_SWEEP_DEG,
    }
}

/// 淡入系数：min(1, p / 0.4)
pub fn factor(percentage: Percentage) -> f64 {
    (percentage.fraction() / FACTOR_RAMP).min(1.0)
}

/// stroke-dasharray 的一组 (实线, 间隔)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashArray {
    pub dash: f64,
    pub gap: f64,
}

impl DashArray {
    pub fn new(dash: f64, gap: f64) -> Self {
        Self { dash, gap }
    }

    /// 一个图案周期的长度
    pub fn period(&self) -> f64 {
        self.dash + self.gap
    }

    /// 沿描边位置 `distance` 处是否落在实线段内
    pub fn is_visible_at(&self, distance: f64, offset: f64) -> bool {
        let period = self.period();
        if period <= 0.0 {
            return false;
        }
        (distance + offset).rem_euclid(period) < self.dash
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.dash, self.gap)
    }
}

/// 圆形描边样式
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub dash_array: DashArray,
    pub dash_offset: f64,
    pub stroke: Color,
    pub line_cap: &'static str,
    pub opacity: f64,
    pub stroke_width: f64,
    /// 无填充
    pub fill: Option<Color>,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

pub fn circle_style(
    status: &Status,
    percentage: Percentage,
    colors: &StrokeColors,
    palette: &Palette,
) -> CircleStyle {
    let is_loading = status.is_loading();
    let p1 = if is_loading { 1.0 } else { factor(percentage) };
    let circle = circle_attr();
    let perimeter = circle.perimeter();

    let ArcDegrees { begin, end } = arc_degrees(percentage);
    let arc_len = (end - begin) * perimeter / 360.0;
    let dash_offset = -begin * perimeter / 360.0;

    let stroke = if is_loading || percentage.is_complete() {
        colors.active(palette)
    } else {
        colors.idle(palette)
    };

    CircleStyle {
        dash_array: DashArray::new(arc_len, perimeter - arc_len),
        dash_offset,
        stroke,
        line_cap: "round",
        opacity: p1,
        stroke_width: circle.stroke_width * p1,
        fill: None,
        cx: circle.origin_x,
        cy: circle.origin_y,
        r: circle.radius,
    }
}

/// 三角标记样式
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    /// 未旋转的三个顶点
    pub points: [(f64, f64); 3],
    /// 绕 transform_origin 旋转的角度（度）
    pub rotation_deg: f64,
    pub transform_origin: (f64, f64),
    pub fill: Color,
    pub opacity: f64,
}

impl PolygonStyle {
    /// SVG points 属性，如 "43,25 47,25 45,27"
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 旋转后的绝对坐标（y 轴向下，正角度为顺时针）
    pub fn rotated_points(&self) -> [(f64, f64); 3] {
        let (ox, oy) = self.transform_origin;
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        self.points.map(|(x, y)| {
            let (dx, dy) = (x - ox, y - oy);
            (ox + dx * cos - dy * sin, oy + dx * sin + dy * cos)
        })
    }
}

pub fn polygon_style(
    percentage: Percentage,
    colors: &StrokeColors,
    palette: &Palette,
) -> PolygonStyle {
    let p1 = factor(percentage);
    let circle = circle_attr();

    let cx = circle.origin_x + circle.radius;
    let cy = circle.origin_y;
    let dx = (circle.stroke_width * 7.0 / 4.0) * p1;

    let fill = if percentage.is_complete() {
        colors.active(palette)
    } else {
        colors.idle(palette)
    };

    PolygonStyle {
        points: [(cx - dx, cy), (cx + dx, cy), (cx, cy + dx)],
        rotation_deg: arc_degrees(percentage).end,
        transform_origin: (circle.origin_x, circle.origin_y),
        fill,
        opacity: p1,
    }
}
