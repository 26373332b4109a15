use std::time::{Duration, Instant};

/// Fixed-interval gate for simulation steps.
///
/// `poll` fires when strictly more than `period` has elapsed since the last
/// firing, then rebases on the polled instant. It fires at most once per call,
/// so a long stall produces a single step rather than a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    last: Instant,
    ticks: u64,
}

impl TickTimer {
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last: start,
            ticks: 0,
        }
    }

    /// Number of times the timer has fired.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` if a step is due at `now`, and starts the next interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) <= self.period {
            return false;
        }
        self.last = now;
        self.ticks += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn does_not_fire_before_period() {
        let t0 = Instant::now();
        let mut timer = TickTimer::starting_at(PERIOD, t0);
        assert!(!timer.poll(t0 + Duration::from_millis(50)));
        assert_eq!(timer.ticks(), 0);
    }

    #[test]
    fn exact_period_does_not_fire() {
        let t0 = Instant::now();
        let mut timer = TickTimer::starting_at(PERIOD, t0);
        assert!(!timer.poll(t0 + PERIOD));
    }

    #[test]
    fn fires_once_past_period_then_rebases() {
        let t0 = Instant::now();
        let mut timer = TickTimer::starting_at(PERIOD, t0);
        let t1 = t0 + Duration::from_millis(101);
        assert!(timer.poll(t1));
        assert!(!timer.poll(t1));
        assert!(!timer.poll(t1 + Duration::from_millis(100)));
        assert!(timer.poll(t1 + Duration::from_millis(102)));
        assert_eq!(timer.ticks(), 2);
    }

    #[test]
    fn long_stall_yields_single_tick() {
        let t0 = Instant::now();
        let mut timer = TickTimer::starting_at(PERIOD, t0);
        let late = t0 + Duration::from_secs(3);
        assert!(timer.poll(late));
        assert!(!timer.poll(late + Duration::from_millis(1)));
        assert_eq!(timer.ticks(), 1);
    }

    #[test]
    fn earlier_instant_never_fires() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut timer = TickTimer::starting_at(PERIOD, t0);
        assert!(!timer.poll(t0 - Duration::from_millis(500)));
    }
}
