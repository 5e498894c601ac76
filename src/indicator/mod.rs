//! 刷新指示器状态机
//! 持有 status / percentage，选择静态几何或加载动画，并管理动画生命周期
//!
//! - status == ready：解除动画，按百分比绘制静态环形
//! - status != ready：交给外部 spinner 委托；仅 loading 时启动动画

pub mod geometry;
mod props;
mod render;

pub use props::*;
pub use render::*;

use crate::animator::{AnimationStep, IndeterminateAnimator, RingFrame, StyleSnapshot};
use crate::clock::AnimationClock;
use crate::theme::Palette;
use geometry::{circle_style, padding_size, paper_size, polygon_style, SIZE};
use std::time::Duration;

/// spinner 委托的描边粗细
const SPINNER_THICKNESS: f64 = 3.0 * SIZE / 32.0;

/// 刷新指示器
pub struct RefreshIndicator {
    props: IndicatorProps,
    palette: Palette,
    clock: AnimationClock<AnimationStep>,
    animator: Option<IndeterminateAnimator>,
    disposed: bool,
}

impl std::fmt::Debug for RefreshIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshIndicator")
            .field("status", &self.props.status)
            .field("percentage", &self.props.percentage)
            .field("animating", &self.animator.is_some())
            .field("pending", &self.clock.pending())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl RefreshIndicator {
    /// 以初始属性创建，初始状态即传入的 status
    pub fn new(props: IndicatorProps, palette: Palette) -> Self {
        let mut indicator = Self {
            props,
            palette,
            clock: AnimationClock::new(),
            animator: None,
            disposed: false,
        };
        indicator.sync_animator();
        indicator
    }

    pub fn props(&self) -> &IndicatorProps {
        &self.props
    }

    pub fn status(&self) -> &Status {
        &self.props.status
    }

    pub fn percentage(&self) -> Percentage {
        self.props.percentage
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_status(&mut self, status: Status) {
        if self.props.status != status {
            log::debug!("indicator status {} -> {}", self.props.status, status);
            self.props.status = status;
            self.sync_animator();
        }
    }

    pub fn set_percentage(&mut self, percentage: impl Into<Percentage>) {
        self.props.percentage = percentage.into();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// 整体替换属性
    pub fn update(&mut self, props: IndicatorProps) {
        self.props = props;
        self.sync_animator();
    }

    /// 推进动画时间，返回触发的步骤数
    pub fn advance(&mut self, delta: Duration) -> usize {
        let animator = &mut self.animator;
        self.clock.advance(delta, |clock, step| {
            if let Some(animator) = animator.as_mut() {
                animator.on_step(clock, step);
            }
        })
    }

    /// 指示器内部时间
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    /// 待触发的动画步骤数
    pub fn pending_steps(&self) -> usize {
        self.clock.pending()
    }

    /// 当前动画快照（仅 loading 时存在）
    pub fn snapshot(&self) -> Option<&StyleSnapshot> {
        self.animator.as_ref().map(|a| a.snapshot())
    }

    /// 当前时刻插值后的加载环参数
    pub fn sample(&self) -> Option<RingFrame> {
        self.animator.as_ref().map(|a| a.sample(self.clock.now()))
    }

    /// 加载动画已运行时间
    pub fn animation_elapsed(&self) -> Option<Duration> {
        self.animator.as_ref().map(|a| a.elapsed(self.clock.now()))
    }

    /// 计算当前渲染输出
    pub fn render(&self) -> RenderOutput {
        let size = self.props.size;
        let paper = paper_size(size);

        let content = if self.props.status.is_ready() {
            Content::Ring(RingSpec {
                paper_size: paper,
                view_box: SIZE,
                circle: circle_style(
                    &self.props.status,
                    self.props.percentage,
                    &self.props.colors,
                    &self.palette,
                ),
                polygon: polygon_style(self.props.percentage, &self.props.colors, &self.palette),
            })
        } else {
            Content::Spinner(SpinnerSpec {
                size: paper,
                thickness: SPINNER_THICKNESS,
                color: self.palette.accent,
            })
        };

        RenderOutput {
            container: Container {
                width: size,
                height: size,
                padding: padding_size(size),
                border_radius: "50%",
                class_name: self.props.class_name.clone(),
                style: self.props.style.clone(),
            },
            content,
        }
    }

    /// 释放所有定时器；可重复调用
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.disarm();
        let leftover = self.clock.cancel_all();
        if leftover > 0 {
            log::warn!("{} orphan animation steps cancelled on dispose", leftover);
        }
        log::debug!("indicator disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn sync_animator(&mut self) {
        let should_animate = !self.disposed && self.props.status.is_loading();
        match (should_animate, self.animator.is_some()) {
            (true, false) => {
                log::debug!("indeterminate animation armed at {:?}", self.clock.now());
                self.animator = Some(IndeterminateAnimator::arm(&mut self.clock));
            }
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    fn disarm(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            let cancelled = animator.disarm(&mut self.clock);
            log::debug!("indeterminate animation disarmed, {} steps cancelled", cancelled);
        }
    }
}

impl Drop for RefreshIndicator {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::ROTATION_PERIOD;
    use crate::theme::Theme;
    use super::geometry::circle_attr;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn indicator(status: Status, percentage: f64) -> RefreshIndicator {
        let props = IndicatorProps {
            status,
            percentage: Percentage::new(percentage),
            ..Default::default()
        };
        RefreshIndicator::new(props, Theme::default().palette())
    }

    #[test]
    fn test_ready_renders_static_ring() {
        let ind = indicator(Status::Ready, 100.0);
        assert!(!ind.is_animating());
        assert_eq!(ind.pending_steps(), 0);

        let output = ind.render();
        assert_eq!(output.container.width, 40.0);
        assert!((output.container.padding - 5.6).abs() < 1e-9);
        assert_eq!(output.container.border_radius, "50%");

        let ring = output.ring().expect("ready renders a ring");
        assert_eq!(ring.view_box, 50.0);
        assert!((ring.paper_size - 28.8).abs() < 1e-9);
        assert_eq!(ring.circle.stroke, ind.palette().primary);
        assert_eq!(ring.polygon.fill, ind.palette().primary);
    }

    #[test]
    fn test_loading_delegates_to_spinner_and_arms() {
        let ind = indicator(Status::Loading, 0.0);
        assert!(ind.is_animating());
        assert!(ind.pending_steps() > 0);

        let output = ind.render();
        let spinner = output.spinner().expect("loading renders the spinner delegate");
        assert!((spinner.size - 28.8).abs() < 1e-9);
        assert!((spinner.thickness - 4.6875).abs() < 1e-9);
        assert_eq!(spinner.color, ind.palette().accent);
    }

    #[test]
    fn test_unknown_status_is_static_and_not_animating() {
        let ind = indicator(Status::parse("hide"), 30.0);
        assert!(!ind.is_animating());
        assert_eq!(ind.pending_steps(), 0);
        assert!(ind.render().spinner().is_some());
        assert!(ind.snapshot().is_none());
    }

    #[test]
    fn test_first_tick_transitions_dash() {
        let mut ind = indicator(Status::Loading, 0.0);
        let perimeter = circle_attr().perimeter();

        let snapshot = ind.snapshot().copied().unwrap();
        assert_eq!((snapshot.dash_array.dash, snapshot.dash_array.gap), (1.0, 200.0));

        ind.advance(ms(250));
        let snapshot = ind.snapshot().copied().unwrap();
        assert!((snapshot.dash_array.dash - 0.64 * perimeter).abs() < 1e-9);
        assert_eq!(snapshot.dash_array.gap, 200.0);
        assert_eq!(snapshot.dash_offset, -15.0);
    }

    #[test]
    fn test_loading_to_ready_mid_cycle_stops_ticks() {
        let mut ind = indicator(Status::Loading, 0.0);
        ind.advance(ms(400));
        assert!(ind.pending_steps() > 0);

        ind.set_status(Status::Ready);
        assert!(!ind.is_animating());
        assert_eq!(ind.pending_steps(), 0);

        // 超过下一次计划步骤（1000ms）和旋转周期
        let fired = ind.advance(ROTATION_PERIOD * 2);
        assert_eq!(fired, 0);
        assert!(ind.snapshot().is_none());
    }

    #[test]
    fn test_rearm_restarts_from_first_phase() {
        let mut ind = indicator(Status::Loading, 0.0);
        ind.advance(ms(1200));
        assert_eq!(ind.snapshot().unwrap().dash_phase, 2);

        ind.set_status(Status::Ready);
        ind.advance(ms(333));
        ind.set_status(Status::Loading);

        assert_eq!(ind.snapshot().unwrap().dash_phase, 0);
        assert_eq!(ind.animation_elapsed(), Some(Duration::ZERO));
        ind.advance(ms(250));
        assert_eq!(ind.snapshot().unwrap().dash_phase, 1);
    }

    #[test]
    fn test_percentage_change_keeps_animation_running() {
        let mut ind = indicator(Status::Loading, 0.0);
        ind.advance(ms(300));
        ind.set_percentage(55.0);
        assert!(ind.is_animating());
        assert_eq!(ind.snapshot().unwrap().dash_phase, 1);
    }

    #[test]
    fn test_update_props_switches_branch() {
        let mut ind = indicator(Status::Ready, 20.0);
        let mut props = ind.props().clone();
        props.status = Status::Loading;
        props.percentage = Percentage::new(500.0);
        ind.update(props);

        assert!(ind.is_animating());
        assert_eq!(ind.percentage().value(), 100.0);
    }

    #[test]
    fn test_dispose_while_loading() {
        let mut ind = indicator(Status::Loading, 0.0);
        ind.advance(ms(60));
        ind.dispose();

        assert_eq!(ind.pending_steps(), 0);
        assert!(!ind.is_animating());
        assert_eq!(ind.advance(ms(20_000)), 0);

        // 释放后不再重新启动
        ind.set_status(Status::Ready);
        ind.set_status(Status::Loading);
        assert!(!ind.is_animating());
        assert_eq!(ind.pending_steps(), 0);

        ind.dispose();
        assert!(ind.is_disposed());
    }

    #[test]
    fn test_passthrough_container_attributes() {
        let mut props = IndicatorProps {
            class_name: Some("refresh".to_string()),
            size: 60.0,
            ..Default::default()
        };
        props.style.insert("top".to_string(), "10px".to_string());
        let ind = RefreshIndicator::new(props, Theme::material().palette());

        let output = ind.render();
        assert_eq!(output.container.class_name.as_deref(), Some("refresh"));
        assert_eq!(output.container.style.get("top").map(String::as_str), Some("10px"));
        assert_eq!(output.container.height, 60.0);
    }
}
