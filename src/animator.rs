//! 不确定进度动画
//! 两个独立循环：三段式虚线变化 + 持续旋转
//!
//! 动画只维护自己的样式快照，渲染层读取快照，不直接修改渲染输出。

use crate::clock::{AnimationClock, TimerId};
use crate::indicator::geometry::{circle_attr, DashArray};
use std::time::Duration;

/// 各段虚线的停留时间（毫秒）
const DASH_HOLDS_MS: [u64; 3] = [250, 750, 850];
/// 各段虚线的过渡时长（毫秒）
const DASH_TRANSITIONS_MS: [u64; 3] = [0, 750, 850];
/// 加载中虚线间隔
const LOADING_GAP: f64 = 200.0;
const LOADING_ARC_RATIO: f64 = 0.64;
const PHASE_ONE_OFFSET: f64 = -15.0;

const ROTATION_DELAY: Duration = Duration::from_millis(50);
const ROTATION_SWEEP: Duration = Duration::from_millis(10_000);
/// 旋转周期：复位 + 延迟 + 线性旋转
pub const ROTATION_PERIOD: Duration = Duration::from_millis(10_050);
const ROTATION_TARGET_DEG: f64 = 1800.0;

/// 一个完整虚线循环的时长
pub fn dash_cycle() -> Duration {
    Duration::from_millis(DASH_HOLDS_MS.iter().sum())
}

/// 调度到时钟上的动画步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// 第 n 步虚线变化（阶段 = n % 3）
    Dash(u64),
    /// 旋转周期开始，立即复位到 0°
    RotationReset,
    /// 复位后开始线性旋转
    RotationSweep,
}

/// 单个虚线阶段
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPhase {
    pub phase: u8,
    pub dash_array: DashArray,
    pub dash_offset: f64,
    pub transition: Duration,
    /// 到下一阶段的间隔
    pub hold: Duration,
}

pub fn dash_phase(step: u64) -> DashPhase {
    let phase = (step % 3) as usize;
    let perimeter = circle_attr().perimeter();
    let arc_len = perimeter * LOADING_ARC_RATIO;

    let (dash_array, dash_offset) = match phase {
        0 => (DashArray::new(1.0, LOADING_GAP), 0.0),
        1 => (DashArray::new(arc_len, LOADING_GAP), PHASE_ONE_OFFSET),
        _ => (DashArray::new(arc_len, LOADING_GAP), -(perimeter - 1.0)),
    };

    DashPhase {
        phase: phase as u8,
        dash_array,
        dash_offset,
        transition: Duration::from_millis(DASH_TRANSITIONS_MS[phase]),
        hold: Duration::from_millis(DASH_HOLDS_MS[phase]),
    }
}

/// 动画样式快照（过渡目标值 + 过渡时长）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub dash_phase: u8,
    pub dash_array: DashArray,
    pub dash_offset: f64,
    pub dash_transition: Duration,
    pub rotation_deg: f64,
    pub rotation_transition: Duration,
}

impl StyleSnapshot {
    fn with_dash(mut self, phase: &DashPhase) -> Self {
        self.dash_phase = phase.phase;
        self.dash_array = phase.dash_array;
        self.dash_offset = phase.dash_offset;
        self.dash_transition = phase.transition;
        self
    }

    fn with_rotation(mut self, deg: f64, transition: Duration) -> Self {
        self.rotation_deg = deg;
        self.rotation_transition = transition;
        self
    }
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        let first = dash_phase(0);
        Self {
            dash_phase: first.phase,
            dash_array: first.dash_array,
            dash_offset: first.dash_offset,
            dash_transition: first.transition,
            rotation_deg: 0.0,
            rotation_transition: Duration::ZERO,
        }
    }
}

/// 开始加载 `elapsed` 之后的快照（纯函数）
pub fn snapshot_at(elapsed: Duration) -> StyleSnapshot {
    let in_dash = wrap(elapsed, dash_cycle());
    let mut start = Duration::ZERO;
    let mut step = 0;
    for (idx, hold) in DASH_HOLDS_MS.iter().enumerate() {
        let end = start + Duration::from_millis(*hold);
        if in_dash < end {
            step = idx as u64;
            break;
        }
        start = end;
    }

    let snapshot = StyleSnapshot::default().with_dash(&dash_phase(step));
    if wrap(elapsed, ROTATION_PERIOD) < ROTATION_DELAY {
        snapshot.with_rotation(0.0, Duration::ZERO)
    } else {
        snapshot.with_rotation(ROTATION_TARGET_DEG, ROTATION_SWEEP)
    }
}

fn wrap(elapsed: Duration, period: Duration) -> Duration {
    let nanos = elapsed.as_nanos() % period.as_nanos();
    Duration::from_nanos(nanos as u64)
}

/// 线性过渡
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

impl Tween {
    fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    fn value_at(&self, now: Duration) -> f64 {
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        let t = now.saturating_sub(self.start).as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }

    /// 从当前值出发过渡到新目标
    fn retarget(&mut self, to: f64, now: Duration, duration: Duration) {
        *self = Self {
            from: self.value_at(now),
            to,
            start: now,
            duration,
        };
    }
}

/// 某一时刻实际绘制用的环形参数（已插值）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub dash_array: DashArray,
    pub dash_offset: f64,
    pub rotation_deg: f64,
}

/// 加载动画
/// 只在 loading 状态下存在，解除时取消全部待触发步骤
#[derive(Debug)]
pub struct IndeterminateAnimator {
    armed_at: Duration,
    snapshot: StyleSnapshot,
    dash_len: Tween,
    dash_offset: Tween,
    rotation: Tween,
    dash_timer: Option<TimerId>,
    sweep_timer: Option<TimerId>,
    cycle_timer: Option<TimerId>,
}

impl IndeterminateAnimator {
    /// 启动两个循环：立即应用第 0 阶段并复位旋转
    pub fn arm(clock: &mut AnimationClock<AnimationStep>) -> Self {
        let snapshot = StyleSnapshot::default();
        let mut animator = Self {
            armed_at: clock.now(),
            snapshot,
            dash_len: Tween::settled(snapshot.dash_array.dash),
            dash_offset: Tween::settled(snapshot.dash_offset),
            rotation: Tween::settled(0.0),
            dash_timer: None,
            sweep_timer: None,
            cycle_timer: None,
        };
        animator.apply_dash(clock, 0);
        animator.reset_rotation(clock);
        animator
    }

    /// 处理到期步骤并调度后续步骤
    pub fn on_step(&mut self, clock: &mut AnimationClock<AnimationStep>, step: AnimationStep) {
        log::trace!("animation step {:?} at {:?}", step, clock.now());
        match step {
            AnimationStep::Dash(n) => self.apply_dash(clock, n),
            AnimationStep::RotationReset => self.reset_rotation(clock),
            AnimationStep::RotationSweep => self.start_sweep(clock),
        }
    }

    /// 取消所有待触发步骤，返回取消数量
    pub fn disarm(&mut self, clock: &mut AnimationClock<AnimationStep>) -> usize {
        [
            self.dash_timer.take(),
            self.sweep_timer.take(),
            self.cycle_timer.take(),
        ]
        .into_iter()
        .flatten()
        .filter(|id| clock.cancel(*id))
        .count()
    }

    pub fn snapshot(&self) -> &StyleSnapshot {
        &self.snapshot
    }

    /// 启动后经过的时间
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.armed_at)
    }

    /// 插值得到 `now` 时刻的环形参数
    pub fn sample(&self, now: Duration) -> RingFrame {
        RingFrame {
            dash_array: DashArray::new(self.dash_len.value_at(now), LOADING_GAP),
            dash_offset: self.dash_offset.value_at(now),
            rotation_deg: self.rotation.value_at(now),
        }
    }

    fn apply_dash(&mut self, clock: &mut AnimationClock<AnimationStep>, step: u64) {
        let phase = dash_phase(step);
        let now = clock.now();
        self.dash_len
            .retarget(phase.dash_array.dash, now, phase.transition);
        self.dash_offset
            .retarget(phase.dash_offset, now, phase.transition);
        self.snapshot = self.snapshot.with_dash(&phase);
        self.dash_timer = Some(clock.schedule(phase.hold, AnimationStep::Dash(step + 1)));
    }

    fn reset_rotation(&mut self, clock: &mut AnimationClock<AnimationStep>) {
        self.rotation.retarget(0.0, clock.now(), Duration::ZERO);
        self.snapshot = self.snapshot.with_rotation(0.0, Duration::ZERO);
        self.sweep_timer = Some(clock.schedule(ROTATION_DELAY, AnimationStep::RotationSweep));
        self.cycle_timer = Some(clock.schedule(ROTATION_PERIOD, AnimationStep::RotationReset));
    }

    fn start_sweep(&mut self, clock: &mut AnimationClock<AnimationStep>) {
        self.sweep_timer = None;
        self.rotation
            .retarget(ROTATION_TARGET_DEG, clock.now(), ROTATION_SWEEP);
        self.snapshot = self
            .snapshot
            .with_rotation(ROTATION_TARGET_DEG, ROTATION_SWEEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn armed() -> (AnimationClock<AnimationStep>, IndeterminateAnimator) {
        let mut clock = AnimationClock::new();
        let animator = IndeterminateAnimator::arm(&mut clock);
        (clock, animator)
    }

    fn advance(
        clock: &mut AnimationClock<AnimationStep>,
        animator: &mut IndeterminateAnimator,
        delta: Duration,
    ) -> usize {
        clock.advance(delta, |clock, step| animator.on_step(clock, step))
    }

    #[test]
    fn test_dash_phases() {
        let perimeter = circle_attr().perimeter();

        let zero = dash_phase(0);
        assert_eq!(zero.dash_array, DashArray::new(1.0, 200.0));
        assert_eq!(zero.dash_offset, 0.0);
        assert_eq!(zero.transition, Duration::ZERO);
        assert_eq!(zero.hold, ms(250));

        let one = dash_phase(1);
        assert!((one.dash_array.dash - 0.64 * perimeter).abs() < 1e-9);
        assert_eq!(one.dash_array.gap, 200.0);
        assert_eq!(one.dash_offset, -15.0);
        assert_eq!(one.transition, ms(750));
        assert_eq!(one.hold, ms(750));

        let two = dash_phase(2);
        assert_eq!(two.dash_array, one.dash_array);
        assert!((two.dash_offset + (perimeter - 1.0)).abs() < 1e-9);
        assert_eq!(two.transition, ms(850));
        assert_eq!(two.hold, ms(850));

        assert_eq!(dash_phase(3), zero);
        assert_eq!(dash_cycle(), ms(1850));
    }

    #[test]
    fn test_arm_applies_first_phase_immediately() {
        let (clock, animator) = armed();
        let snapshot = animator.snapshot();
        assert_eq!(snapshot.dash_phase, 0);
        assert_eq!(snapshot.dash_array, DashArray::new(1.0, 200.0));
        assert_eq!(snapshot.rotation_deg, 0.0);
        // 虚线下一步 + 旋转开始 + 周期复位
        assert_eq!(clock.pending(), 3);
    }

    #[test]
    fn test_first_tick_after_250ms() {
        let (mut clock, mut animator) = armed();
        let perimeter = circle_attr().perimeter();

        advance(&mut clock, &mut animator, ms(249));
        assert_eq!(animator.snapshot().dash_phase, 0);

        advance(&mut clock, &mut animator, ms(1));
        let snapshot = animator.snapshot();
        assert_eq!(snapshot.dash_phase, 1);
        assert!((snapshot.dash_array.dash - 0.64 * perimeter).abs() < 1e-9);
        assert_eq!(snapshot.dash_array.gap, 200.0);
        assert_eq!(snapshot.dash_offset, -15.0);
        assert_eq!(snapshot.dash_transition, ms(750));
    }

    #[test]
    fn test_rotation_cycle() {
        let (mut clock, mut animator) = armed();

        advance(&mut clock, &mut animator, ms(50));
        assert_eq!(animator.snapshot().rotation_deg, 1800.0);
        assert_eq!(animator.snapshot().rotation_transition, ms(10_000));

        advance(&mut clock, &mut animator, ms(10_000));
        assert_eq!(animator.snapshot().rotation_deg, 0.0);
        assert_eq!(animator.snapshot().rotation_transition, Duration::ZERO);

        advance(&mut clock, &mut animator, ms(50));
        assert_eq!(animator.snapshot().rotation_deg, 1800.0);
    }

    #[test]
    fn test_timer_path_matches_pure_snapshot() {
        let (mut clock, mut animator) = armed();
        let mut elapsed = Duration::ZERO;
        for delta in [1, 49, 200, 1, 749, 3, 847, 1, 4000, 5000, 199, 17, 10_050, 333] {
            advance(&mut clock, &mut animator, ms(delta));
            elapsed += ms(delta);
            assert_eq!(
                *animator.snapshot(),
                snapshot_at(elapsed),
                "snapshot diverged at {:?}",
                elapsed
            );
        }
    }

    #[test]
    fn test_sample_interpolates_transitions() {
        let (mut clock, mut animator) = armed();
        let perimeter = circle_attr().perimeter();

        advance(&mut clock, &mut animator, ms(250 + 375));
        let frame = animator.sample(clock.now());
        let expected_dash = 1.0 + (0.64 * perimeter - 1.0) / 2.0;
        assert!((frame.dash_array.dash - expected_dash).abs() < 1e-6);
        assert!((frame.dash_offset + 7.5).abs() < 1e-6);
        // 625ms 时旋转已进行 575ms
        assert!((frame.rotation_deg - 1800.0 * 575.0 / 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_disarm_cancels_all_pending_steps() {
        let (mut clock, mut animator) = armed();
        advance(&mut clock, &mut animator, ms(600));

        let before = *animator.snapshot();
        assert_eq!(animator.disarm(&mut clock), 2);
        assert_eq!(clock.pending(), 0);

        let fired = advance(&mut clock, &mut animator, ms(20_000));
        assert_eq!(fired, 0);
        assert_eq!(*animator.snapshot(), before);
        assert_eq!(animator.disarm(&mut clock), 0);
    }
}
