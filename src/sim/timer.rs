//! Wall-clock period timers
//!
//! The spawner (2000 ms) and the countdown clock (1000 ms) are driven by
//! elapsed wall-clock time, not by the render cadence, so a varying frame
//! rate neither accelerates nor stalls them.

use super::config::Config;
use super::state::{RunState, Session};
use super::tick::Event;

/// Fixed-period timer fed elapsed milliseconds, reporting due firings
#[derive(Debug, Clone)]
pub struct PeriodTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl PeriodTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Advance by wall-clock time, returning how many whole periods are due
    pub fn advance(&mut self, dt_ms: u32) -> u32 {
        self.elapsed_ms += dt_ms;
        let fired = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        fired
    }
}

/// The two period handles owned by a playing session.
///
/// Dropped wholesale on pause/quit/game-over and rebuilt on start/resume, so
/// partial accumulation never leaks across a pause and a stale period can
/// never fire after teardown.
#[derive(Debug, Clone)]
pub(crate) struct Timers {
    pub(crate) spawner: PeriodTimer,
    pub(crate) clock: PeriodTimer,
}

impl Timers {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            spawner: PeriodTimer::new(config.spawn_period_ms),
            clock: PeriodTimer::new(config.clock_period_ms),
        }
    }
}

impl Session {
    /// Pump the spawner and countdown with elapsed wall-clock milliseconds.
    ///
    /// No-op unless Playing (the handles only exist then). Within one call,
    /// every due spawn is applied before any clock decrement: a session
    /// ending on the timer never races a same-instant spawn.
    pub fn elapse(&mut self, dt_ms: u32) {
        let Some(mut timers) = self.timers.take() else {
            return;
        };
        let spawns = timers.spawner.advance(dt_ms);
        let clocks = timers.clock.advance(dt_ms);
        self.timers = Some(timers);

        for _ in 0..spawns {
            self.apply(Event::Spawn);
        }
        for _ in 0..clocks {
            self.apply(Event::Clock);
            if self.run_state != RunState::Playing {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_timer_fires_per_period() {
        let mut timer = PeriodTimer::new(2000);
        assert_eq!(timer.advance(1999), 0);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.advance(5000), 2);
        // 1000 ms carried over
        assert_eq!(timer.advance(1000), 1);
    }

    #[test]
    fn test_period_timer_granularity_independent() {
        let mut coarse = PeriodTimer::new(1000);
        let mut fine = PeriodTimer::new(1000);

        let coarse_fired = coarse.advance(3500);
        let mut fine_fired = 0;
        for _ in 0..3500 {
            fine_fired += fine.advance(1);
        }
        assert_eq!(coarse_fired, 3);
        assert_eq!(fine_fired, 3);
    }

    #[test]
    fn test_elapse_spawns_and_counts_down() {
        let mut session = Session::new(11);
        session.start("robin");
        let before = session.visible_targets().len();

        session.elapse(2000);
        assert_eq!(session.visible_targets().len(), before + 1);
        assert_eq!(
            session.time_remaining(),
            crate::consts::INITIAL_TIME_SECS - 2
        );
    }

    #[test]
    fn test_elapse_is_inert_outside_playing() {
        let mut session = Session::new(11);
        session.elapse(10_000);
        assert_eq!(session.run_state(), RunState::Menu);

        session.start("robin");
        session.pause();
        session.elapse(10_000);
        assert_eq!(
            session.time_remaining(),
            crate::consts::INITIAL_TIME_SECS
        );
    }

    #[test]
    fn test_pause_discards_partial_periods() {
        let mut session = Session::new(11);
        session.start("robin");

        // Almost a full countdown period, then pause/resume
        session.elapse(999);
        session.pause();
        session.resume();

        // The fresh handle starts from zero: another 999 ms still fires nothing
        session.elapse(999);
        assert_eq!(session.time_remaining(), crate::consts::INITIAL_TIME_SECS);
        session.elapse(1);
        assert_eq!(
            session.time_remaining(),
            crate::consts::INITIAL_TIME_SECS - 1
        );
    }

    #[test]
    fn test_elapse_runs_the_clock_out() {
        let mut session = Session::new(11);
        session.start("robin");
        session.elapse(crate::consts::INITIAL_TIME_SECS * 1000);
        assert_eq!(session.run_state(), RunState::GameOver);
        assert_eq!(session.time_remaining(), 0);
        assert!(session.final_summary().is_some());
    }
}
