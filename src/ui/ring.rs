//! 指示器预览
//! 在 ratatui Canvas 上按 SIZE × SIZE 坐标系绘制环形与三角标记

use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, BorderType, Borders,
    },
    Frame,
};
use refresh_indicator::indicator::geometry::{circle_attr, DashArray, PolygonStyle, SIZE};
use refresh_indicator::indicator::{Content, RingSpec, SpinnerSpec};
use refresh_indicator::theme::{blend, Theme};
use std::f64::consts::TAU;

/// 沿圆周的采样点数
const ARC_SAMPLES: usize = 360;
/// 描边宽度方向的采样间距
const STROKE_LAYER_STEP: f64 = 0.6;
/// 低于该不透明度时不绘制
const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// 绘制预览面板
pub fn draw_indicator(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let i18n = state.i18n();
    let block = Block::default()
        .title(i18n.preview())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let output = state.indicator.render();
    let sample = state.indicator.sample();
    let glyph = state.spinner.frame();
    let bg = theme.bg;
    let fg = theme.fg;

    let canvas = Canvas::default()
        .background_color(bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, SIZE])
        .y_bounds([0.0, SIZE])
        .paint(|ctx| match (&output.content, sample) {
            (Content::Ring(ring), _) => paint_ring(ctx, ring, bg),
            (Content::Spinner(spinner), Some(live)) => paint_arc(
                ctx,
                &live.dash_array,
                live.dash_offset,
                live.rotation_deg,
                spinner.thickness,
                spinner.color,
            ),
            (Content::Spinner(spinner), None) => paint_idle_spinner(ctx, spinner, glyph, fg, bg),
        });

    frame.render_widget(canvas, square_area(inner));
}

/// 终端字符约为 1:2，取一个视觉上的正方形区域并居中
fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// SVG 坐标（y 向下）转 Canvas 坐标（y 向上）
fn to_canvas(x: f64, y: f64) -> (f64, f64) {
    (x, SIZE - y)
}

fn paint_ring(ctx: &mut Context, ring: &RingSpec, bg: ratatui::style::Color) {
    let circle = &ring.circle;
    if circle.opacity >= MIN_VISIBLE_OPACITY {
        paint_arc(
            ctx,
            &circle.dash_array,
            circle.dash_offset,
            0.0,
            circle.stroke_width,
            blend(circle.stroke, bg, circle.opacity),
        );
    }
    if ring.polygon.opacity >= MIN_VISIBLE_OPACITY {
        paint_marker(ctx, &ring.polygon, bg);
    }
}

/// 按虚线图案绘制圆周描边
fn paint_arc(
    ctx: &mut Context,
    dash: &DashArray,
    offset: f64,
    rotation_deg: f64,
    stroke_width: f64,
    color: ratatui::style::Color,
) {
    let circle = circle_attr();
    let perimeter = circle.perimeter();
    let layers = (stroke_width / STROKE_LAYER_STEP).ceil().max(1.0) as usize;
    let rotation = rotation_deg.to_radians();

    let mut coords = Vec::with_capacity(ARC_SAMPLES * (layers + 1));
    for i in 0..ARC_SAMPLES {
        let t = i as f64 / ARC_SAMPLES as f64;
        if !dash.is_visible_at(t * perimeter, offset) {
            continue;
        }
        let angle = t * TAU + rotation;
        for layer in 0..=layers {
            let r = circle.radius - stroke_width / 2.0 + stroke_width * layer as f64 / layers as f64;
            coords.push(to_canvas(
                circle.origin_x + r * angle.cos(),
                circle.origin_y + r * angle.sin(),
            ));
        }
    }
    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}

/// 三角标记：从顶点向底边扇形填充
fn paint_marker(ctx: &mut Context, polygon: &PolygonStyle, bg: ratatui::style::Color) {
    let color = blend(polygon.fill, bg, polygon.opacity);
    let [left, right, apex] = polygon.rotated_points();
    let (ax, ay) = to_canvas(apex.0, apex.1);

    const FILL_LINES: usize = 12;
    for i in 0..=FILL_LINES {
        let t = i as f64 / FILL_LINES as f64;
        let (bx, by) = to_canvas(
            left.0 + (right.0 - left.0) * t,
            left.1 + (right.1 - left.1) * t,
        );
        ctx.draw(&CanvasLine {
            x1: ax,
            y1: ay,
            x2: bx,
            y2: by,
            color,
        });
    }
}

/// 未知状态：淡色整圆 + 中心文字 spinner
fn paint_idle_spinner(
    ctx: &mut Context,
    spinner: &SpinnerSpec,
    glyph: &'static str,
    fg: ratatui::style::Color,
    bg: ratatui::style::Color,
) {
    let full = DashArray::new(circle_attr().perimeter(), 0.0);
    paint_arc(
        ctx,
        &full,
        0.0,
        0.0,
        spinner.thickness,
        blend(spinner.color, bg, 0.3),
    );
    ctx.print(SIZE / 2.0, SIZE / 2.0, Span::raw(glyph).fg(fg));
}
