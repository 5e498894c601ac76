//! 帮助弹窗模块

use crate::app::AppState;
use crate::ui::centered_rect;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use refresh_indicator::i18n::Language;
use refresh_indicator::theme::Theme;

/// 帮助弹窗
pub fn draw_help_popup(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let i18n = state.i18n();
    let area = centered_rect(55, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(i18n.help())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.info))
        .style(Style::default().bg(theme.bg));

    let key_style = Style::default().fg(theme.info).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.fg);
    let section_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let sections = match state.language() {
        Language::English => vec![
            ("STATUS", ""),
            ("  l", "Loading (indeterminate animation)"),
            ("  r", "Ready (static ring)"),
            ("  o", "Other status (spinner, no animation)"),
            ("", ""),
            ("PERCENTAGE", ""),
            ("  +/-", "Increase / decrease by 5"),
            ("  0 / 9", "Jump to 0% / 100%"),
            ("", ""),
            ("GENERAL", ""),
            ("  t", "Cycle theme"),
            ("  L", "Toggle language"),
            ("  q", "Quit"),
        ],
        Language::Chinese => vec![
            ("状态", ""),
            ("  l", "加载中（不确定进度动画）"),
            ("  r", "就绪（静态环形）"),
            ("  o", "其他状态（spinner，无动画）"),
            ("", ""),
            ("进度", ""),
            ("  +/-", "增加 / 减少 5"),
            ("  0 / 9", "跳到 0% / 100%"),
            ("", ""),
            ("通用", ""),
            ("  t", "切换主题"),
            ("  L", "切换语言"),
            ("  q", "退出"),
        ],
    };

    let mut lines: Vec<Line> = sections
        .into_iter()
        .map(|(key, desc)| {
            if desc.is_empty() {
                Line::from(Span::styled(key, section_style))
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<10}", key), key_style),
                    Span::styled(desc, desc_style),
                ])
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        i18n.close_hint(),
        Style::default().fg(theme.border),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
