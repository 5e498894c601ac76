//! 文字 Spinner 与进度条
//! 用于未知状态下的加载委托，以及详情面板中的百分比条

use refresh_indicator::indicator::Percentage;
use std::time::{Duration, Instant};

/// Spinner 动画帧
pub struct Spinner {
    frames: &'static [&'static str],
    interval: Duration,
    start_time: Instant,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::circle()
    }
}

impl Spinner {
    /// 圆形 spinner
    pub fn circle() -> Self {
        Self {
            frames: &["◐", "◓", "◑", "◒"],
            interval: Duration::from_millis(100),
            start_time: Instant::now(),
        }
    }

    /// 指定时刻的帧
    pub fn frame_at(&self, elapsed: Duration) -> &'static str {
        let idx = (elapsed.as_millis() / self.interval.as_millis().max(1)) as usize;
        self.frames[idx % self.frames.len()]
    }

    /// 获取当前帧
    pub fn frame(&self) -> &'static str {
        self.frame_at(self.start_time.elapsed())
    }
}

/// 生成百分比进度条，如 "████▓░░░░░"
pub fn percentage_bar(percentage: Percentage, width: usize) -> String {
    let filled = (percentage.fraction() * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        let ch = if i + 1 < filled || (i + 1 == filled && filled == width) {
            '█'
        } else if i + 1 == filled {
            '▓'
        } else {
            '░'
        };
        bar.push(ch);
    }
    bar
}
