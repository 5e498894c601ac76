//! 布局管理模块
//! 负责主界面的布局划分

use crate::app::{AppMode, AppState};
use crate::ui::{draw_help_popup, draw_indicator, draw_status_bar, percentage_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use refresh_indicator::indicator::geometry::{arc_degrees, factor};

/// 详情面板宽度
pub const DETAILS_WIDTH: u16 = 36;

/// 绘制主界面
pub fn draw_ui(frame: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // 主布局：顶部标题 + 中间内容 + 底部状态栏
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    let title = Paragraph::new(state.i18n().app_title())
        .style(Style::default().fg(theme.title).bold())
        .bg(theme.status_bg);
    frame.render_widget(title, main_chunks[0]);

    // 内容区：左侧预览 + 右侧详情
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(DETAILS_WIDTH)])
        .split(main_chunks[1]);

    draw_indicator(frame, content_chunks[0], state, theme);
    draw_details(frame, content_chunks[1], state);
    draw_status_bar(frame, main_chunks[2], state, theme);

    if state.mode == AppMode::Help {
        draw_help_popup(frame, state, theme);
    }
}

/// 详情面板：展示几何与动画的当前数值
fn draw_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let i18n = state.i18n();
    let indicator = &state.indicator;
    let percentage = indicator.percentage();
    let arc = arc_degrees(percentage);

    let label_style = Style::default().fg(theme.info);
    let value_style = Style::default().fg(theme.fg);
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {:<14}", label), label_style),
            Span::styled(value, value_style),
        ])
    };

    let mut lines = vec![
        row(i18n.status(), indicator.status().to_string()),
        row(i18n.percentage(), format!("{:.0}%", percentage.value())),
        Line::from(Span::styled(
            format!(" {}", percentage_bar(percentage, (DETAILS_WIDTH - 4) as usize)),
            Style::default().fg(theme.success),
        )),
        row(i18n.factor(), format!("{:.3}", factor(percentage))),
        row(i18n.arc(), format!("{:.1}° → {:.1}°", arc.begin, arc.end)),
    ];

    if let Some(snapshot) = indicator.snapshot() {
        lines.push(Line::default());
        lines.push(row(i18n.phase(), snapshot.dash_phase.to_string()));
        if let Some(live) = indicator.sample() {
            lines.push(row(i18n.rotation(), format!("{:.0}°", live.rotation_deg)));
        }
    } else if !indicator.status().is_ready() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {} {}", state.spinner.frame(), i18n.loading()),
            Style::default().fg(theme.warning),
        )));
    }

    lines.push(Line::default());
    lines.push(row(i18n.pending(), indicator.pending_steps().to_string()));
    lines.push(row(i18n.theme(), theme.name.to_string()));

    let block = Block::default()
        .title(Span::styled(
            i18n.details(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算居中矩形（使用百分比）
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
