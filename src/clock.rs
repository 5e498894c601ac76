//! 动画时钟
//! 可取消的定时调度器：虚拟时间由持有者显式推进，到期事件按顺序触发

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// 定时器句柄，用于取消
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// 定时调度器
/// 同一时刻到期的事件按调度先后触发；取消立即从队列移除
#[derive(Debug)]
pub struct AnimationClock<E> {
    now: Duration,
    next_seq: u64,
    /// (到期时间, 序号) -> 事件
    queue: BTreeMap<(Duration, u64), E>,
    /// 序号 -> 到期时间，用于按句柄取消
    due_times: HashMap<u64, Duration>,
}

impl<E> Default for AnimationClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AnimationClock<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            due_times: HashMap::new(),
        }
    }

    /// 当前虚拟时间
    pub fn now(&self) -> Duration {
        self.now
    }

    /// 在 `delay` 之后触发 `event`
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now + delay;
        self.queue.insert((due, seq), event);
        self.due_times.insert(seq, due);
        TimerId(seq)
    }

    /// 取消定时器，返回是否确实取消了一个待触发的事件
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_times.remove(&id.0) {
            Some(due) => self.queue.remove(&(due, id.0)).is_some(),
            None => false,
        }
    }

    /// 取消全部定时器，返回取消数量
    pub fn cancel_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        self.due_times.clear();
        count
    }

    /// 待触发的定时器数量
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// 最早到期时间
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// 推进 `delta`，依次触发到期事件
    ///
    /// 回调执行时 `now()` 等于该事件的到期时间，回调中新调度的事件
    /// 若仍落在本次推进窗口内也会被触发。返回触发的事件数量。
    pub fn advance<F>(&mut self, delta: Duration, mut on_fire: F) -> usize
    where
        F: FnMut(&mut Self, E),
    {
        let target = self.now + delta;
        let mut fired = 0;

        while let Some(entry) = self.queue.first_entry() {
            let (due, seq) = *entry.key();
            if due > target {
                break;
            }
            let event = entry.remove();
            self.due_times.remove(&seq);
            self.now = due;
            fired += 1;
            on_fire(self, event);
        }

        self.now = target;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut clock = AnimationClock::new();
        clock.schedule(ms(30), "c");
        clock.schedule(ms(10), "a");
        clock.schedule(ms(10), "b");

        let mut seen = Vec::new();
        let fired = clock.advance(ms(100), |clock, event| seen.push((clock.now(), event)));

        assert_eq!(fired, 3);
        assert_eq!(seen, vec![(ms(10), "a"), (ms(10), "b"), (ms(30), "c")]);
        assert_eq!(clock.now(), ms(100));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_not_due_yet() {
        let mut clock = AnimationClock::new();
        clock.schedule(ms(50), ());
        assert_eq!(clock.advance(ms(49), |_, _| {}), 0);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(ms(50)));
        assert_eq!(clock.advance(ms(1), |_, _| {}), 1);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut clock = AnimationClock::new();
        let id = clock.schedule(ms(10), 1);
        clock.schedule(ms(20), 2);

        assert!(clock.cancel(id));
        assert!(!clock.cancel(id));

        let mut seen = Vec::new();
        clock.advance(ms(100), |_, event| seen.push(event));
        assert_eq!(seen, vec![2]);
    }

    #[test]
    fn test_rescheduling_within_window() {
        let mut clock = AnimationClock::new();
        clock.schedule(ms(0), 0u32);

        let mut seen = Vec::new();
        clock.advance(ms(35), |clock, step| {
            seen.push((clock.now(), step));
            clock.schedule(ms(10), step + 1);
        });

        assert_eq!(
            seen,
            vec![(ms(0), 0), (ms(10), 1), (ms(20), 2), (ms(30), 3)]
        );
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(ms(40)));
    }

    #[test]
    fn test_cancel_all() {
        let mut clock = AnimationClock::new();
        clock.schedule(ms(1), ());
        clock.schedule(ms(2), ());
        assert_eq!(clock.cancel_all(), 2);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.advance(ms(10), |_, _| {}), 0);
    }
}
