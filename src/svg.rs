//! SVG 输出
//! 将静态环形序列化为 SVG 标记，供 Web / 文件导出使用

use crate::indicator::{Content, RenderOutput, RingSpec};
use ratatui::style::Color;
use std::fmt::Write;

/// 颜色转 CSS 文本
pub fn css_color(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        Color::Reset => "currentColor".to_string(),
        Color::Indexed(idx) => format!("var(--ansi-{})", idx),
        named => format!("{:?}", named).to_lowercase(),
    }
}

/// 静态环形的 SVG 标记
pub fn ring_svg(ring: &RingSpec) -> String {
    let circle = &ring.circle;
    let polygon = &ring.polygon;
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<svg style="width:{paper}px;height:{paper}px" viewBox="0 0 {vb} {vb}">"#,
        paper = ring.paper_size,
        vb = ring.view_box,
    );
    let _ = write!(
        out,
        concat!(
            r#"<circle cx="{}" cy="{}" r="{}" style=""#,
            "stroke-dasharray:{};stroke-dashoffset:{};stroke:{};stroke-linecap:{};",
            r#"opacity:{};stroke-width:{};fill:none"/>"#
        ),
        circle.cx,
        circle.cy,
        circle.r,
        circle.dash_array,
        circle.dash_offset,
        css_color(circle.stroke),
        circle.line_cap,
        circle.opacity,
        circle.stroke_width,
    );
    let _ = write!(
        out,
        concat!(
            r#"<polygon points="{}" style=""#,
            "fill:{};transform:rotate({}deg);transform-origin:{}px {}px;opacity:{}",
            r#""/>"#
        ),
        polygon.points_attr(),
        css_color(polygon.fill),
        polygon.rotation_deg,
        polygon.transform_origin.0,
        polygon.transform_origin.1,
        polygon.opacity,
    );
    out.push_str("</svg>");
    out
}

/// 渲染输出的 SVG；spinner 分支输出占位的空 svg
pub fn to_svg(output: &RenderOutput) -> String {
    match &output.content {
        Content::Ring(ring) => ring_svg(ring),
        Content::Spinner(spinner) => format!(
            r#"<svg style="width:{size}px;height:{size}px" data-spinner="true"></svg>"#,
            size = spinner.size
        ),
    }
}
