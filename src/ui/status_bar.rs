//! 状态栏模块

use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use refresh_indicator::i18n::Language;
use refresh_indicator::theme::Theme;

/// 状态栏快捷键提示
pub fn get_status_help_items(language: Language) -> Vec<(&'static str, &'static str)> {
    match language {
        Language::English => vec![
            ("l/r/o", "Status"),
            ("+/-", "Percent"),
            ("t", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Language::Chinese => vec![
            ("l/r/o", "状态"),
            ("+/-", "进度"),
            ("t", "主题"),
            ("?", "帮助"),
            ("q", "退出"),
        ],
    }
}

/// 绘制状态栏
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(ref msg) = state.status_message {
        // 淡出时变暗
        let fg_color = if state.status_opacity() > 0.5 {
            theme.success
        } else {
            theme.border
        };

        let status = Paragraph::new(format!(" ✓ {}", msg.text))
            .style(Style::default().fg(fg_color))
            .bg(theme.status_bg);
        frame.render_widget(status, area);
        return;
    }

    let key_style = Style::default().fg(theme.info);
    let desc_style = Style::default().fg(theme.status_fg);
    let sep_style = Style::default().fg(theme.border);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in get_status_help_items(state.language()).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(": ", sep_style));
        spans.push(Span::styled(*desc, desc_style));
    }

    let status = Paragraph::new(Line::from(spans)).bg(theme.status_bg);
    frame.render_widget(status, area);
}
