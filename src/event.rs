//! 事件处理模块
//! 负责处理键盘输入和其他 crossterm 事件

use crate::app::{AppMode, AppState, PERCENTAGE_STEP};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use refresh_indicator::indicator::Status;

/// 未知状态示例值
const OTHER_STATUS: &str = "hide";

/// 处理 crossterm 事件，返回是否需要重绘
pub fn handle_event(state: &mut AppState, event: Event) -> anyhow::Result<bool> {
    match event {
        Event::Key(key) => {
            // Windows 会同时发送 Press 和 Release 事件，只处理 Press 事件
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }
            handle_key_event(state, key)
        }
        Event::Resize(_cols, _rows) => Ok(true),
        _ => Ok(false),
    }
}

/// 处理键盘事件
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    match state.mode {
        AppMode::Normal => handle_normal_mode(state, key),
        AppMode::Help => handle_help_mode(state, key),
    }
}

fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('l') => state.switch_status(Status::Loading),
        KeyCode::Char('r') => state.switch_status(Status::Ready),
        KeyCode::Char('o') => state.switch_status(Status::parse(OTHER_STATUS)),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            state.adjust_percentage(PERCENTAGE_STEP)
        }
        KeyCode::Char('-') | KeyCode::Down => state.adjust_percentage(-PERCENTAGE_STEP),
        KeyCode::Char('0') => state.set_percentage(0.0),
        KeyCode::Char('9') => state.set_percentage(100.0),
        KeyCode::Char('t') => state.cycle_theme(),
        KeyCode::Char('L') => state.toggle_language(),
        KeyCode::Char('?') => state.mode = AppMode::Help,
        _ => return Ok(false),
    }
    Ok(true)
}

fn handle_help_mode(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.mode = AppMode::Normal;
            Ok(true)
        }
        _ => Ok(false),
    }
}
