//! Virtual-time interval scheduler

use crate::scheduler::{IntervalScheduler, TimerId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
struct Interval {
    id: TimerId,
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    intervals: Vec<Interval>,
}

/// Virtual-time scheduler for tests
///
/// Time only moves through [`ManualScheduler::advance`], which reports every
/// firing that would have happened in that span.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward and collect every firing, in order
    ///
    /// Simultaneous firings are ordered by creation.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut clock = self.clock.borrow_mut();
        let target = clock.now + by;
        let mut fired = Vec::new();

        loop {
            let due = clock
                .intervals
                .iter_mut()
                .filter(|i| i.next_due <= target)
                .min_by_key(|i| (i.next_due, i.id));

            let Some(interval) = due else { break };
            let when = interval.next_due;
            interval.next_due += interval.period;
            fired.push(interval.id);
            clock.now = when;
        }

        clock.now = target;
        fired
    }

    /// Number of timers currently running
    pub fn active_count(&self) -> usize {
        self.clock.borrow().intervals.len()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }
}

impl IntervalScheduler for ManualScheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = TimerId::new(clock.next_id);
        let next_due = clock.now + period;
        clock.intervals.push(Interval {
            id,
            period,
            next_due,
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.clock.borrow_mut().intervals.retain(|i| i.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_every_period() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.set_interval(Duration::from_millis(3000));

        assert!(scheduler.advance(Duration::from_millis(2999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id]);
        assert_eq!(scheduler.advance(Duration::from_millis(6000)), vec![id, id]);
    }

    #[test]
    fn cleared_interval_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.set_interval(Duration::from_millis(100));
        scheduler.clear_interval(id);
        scheduler.clear_interval(id);

        assert_eq!(scheduler.active_count(), 0);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn firings_are_ordered_across_timers() {
        let mut scheduler = ManualScheduler::new();
        let slow = scheduler.set_interval(Duration::from_millis(300));
        let fast = scheduler.set_interval(Duration::from_millis(200));

        // 200 fast, 300 slow, 400 fast, 600 slow + fast (creation order)
        let fired = scheduler.advance(Duration::from_millis(600));
        assert_eq!(fired, vec![fast, slow, fast, slow, fast]);
        assert_eq!(scheduler.now(), Duration::from_millis(600));
    }
}
