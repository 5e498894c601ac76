//! Refresh Indicator - 环形刷新指示器终端预览
//!
//! 在终端中实时预览指示器的各个状态（加载动画 / 静态进度 / 未知状态）

mod app;
mod event;
mod ui;

use app::AppState;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use refresh_indicator::config::{
    ensure_config_dir, get_config_path, load_config, save_config, AppConfig, LOG_FILE_NAME,
};
use std::io;
use std::time::{Duration, Instant};
use ui::draw_ui;

/// 帧间隔下限
const MIN_FRAME_INTERVAL_MS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // TUI 占用终端，日志只在设置 RUST_LOG 时写入文件
    init_logging()?;

    let config_path = get_config_path();
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }
    };

    let state = AppState::new(config)?;
    let final_config = run_app(state).await?;

    if let Err(e) = save_config(&final_config, &config_path) {
        log::error!("Failed to save config: {:#}", e);
    }
    Ok(())
}

/// 初始化文件日志
fn init_logging() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let log_path = ensure_config_dir()?.join(LOG_FILE_NAME);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!("logging to {}", log_path.display());
    Ok(())
}

/// 运行主应用，返回退出时需要保存的配置
async fn run_app(mut state: AppState) -> anyhow::Result<AppConfig> {
    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state).await;

    // 恢复终端（即使主循环出错）
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    state.indicator.dispose();
    Ok(state.to_config())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> anyhow::Result<()> {
    let frame_interval = Duration::from_millis(
        state
            .config
            .settings
            .frame_interval_ms
            .max(MIN_FRAME_INTERVAL_MS),
    );
    let mut event_stream = EventStream::new();
    let mut last_tick = Instant::now();

    loop {
        // 按真实流逝时间推进动画时钟
        let now = Instant::now();
        state.tick(now - last_tick);
        last_tick = now;

        terminal.draw(|frame| draw_ui(frame, state))?;

        if state.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(evt)) = maybe_event {
                    event::handle_event(state, evt)?;
                }
            }
            _ = tokio::time::sleep(frame_interval) => {}
        }
    }

    Ok(())
}
