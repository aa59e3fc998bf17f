//! Session event processing
//!
//! The engine is reentered by three independently-clocked triggers: the
//! render/physics frame, the spawner period and the countdown clock. All
//! three funnel through one single-threaded dispatch here, so no locking is
//! needed; the only ordering rule is that clock expiries are evaluated last
//! within an instant.

use glam::Vec2;

use super::state::{RunState, Session};

/// The three triggers that reenter the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One render/physics frame
    Frame,
    /// Spawner period elapsed (fixed wall-clock cadence)
    Spawn,
    /// Countdown period elapsed (1 s)
    Clock,
}

impl Session {
    /// Advance the fall kinematics by whole physics ticks.
    ///
    /// No-op unless Playing. Each tick sweeps previously-dead entries, moves
    /// every live target down by the fall speed and resolves escapes. A
    /// target whose last life escapes ends the session mid-tick: the
    /// remaining targets are not advanced and the pool freezes as-is.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            if self.run_state != RunState::Playing {
                return;
            }
            self.step_frame();
        }
    }

    fn step_frame(&mut self) {
        self.sweep_dead();

        for i in 0..self.targets.len() {
            if !self.targets[i].alive {
                continue;
            }
            self.targets[i].pos.y += self.config.fall_speed;
            if self.targets[i].pos.y > self.config.board_h {
                let id = self.targets[i].id;
                self.targets[i].alive = false;
                self.score = self.score.saturating_sub(self.config.escape_penalty);
                self.lives = self.lives.saturating_sub(1);
                log::debug!("target {} escaped; lives now {}", id, self.lives);
                if self.lives == 0 {
                    self.end_session();
                    return;
                }
            }
        }

        self.ensure_min_targets();
    }

    /// Resolve a shot at playfield coordinates.
    ///
    /// No-op unless Playing. Scans live targets newest-spawned first (a later
    /// spawn renders on top of an earlier one) and kills at most the first
    /// whose bounding square contains the aim point. Misses cost nothing;
    /// only floor escapes carry a penalty.
    pub fn fire(&mut self, x: f32, y: f32) {
        if self.run_state != RunState::Playing {
            return;
        }
        let aim = Vec2::new(x, y);
        for target in self.targets.iter_mut().rev() {
            if target.alive && target.contains(aim) {
                target.alive = false;
                self.score += self.config.hit_score;
                log::debug!("hit target {}; score now {}", target.id, self.score);
                break;
            }
        }
        self.ensure_min_targets();
    }

    /// One countdown decrement. No-op unless Playing; the session ends when
    /// the remaining time reaches zero (never negative).
    pub fn clock_tick(&mut self) {
        if self.run_state != RunState::Playing {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.end_session();
        }
    }

    /// Apply a single trigger
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Frame => self.advance(1),
            Event::Spawn => {
                if self.run_state == RunState::Playing {
                    self.spawn_target();
                }
            }
            Event::Clock => self.clock_tick(),
        }
    }

    /// Apply triggers that arrived within the same wall-clock instant.
    ///
    /// Clock expiries are deferred to the back of the batch so a session
    /// ending on the timer never races a same-instant spawn or frame.
    pub fn apply_batch(&mut self, events: impl IntoIterator<Item = Event>) {
        let (immediate, clocks): (Vec<_>, Vec<_>) =
            events.into_iter().partition(|e| *e != Event::Clock);
        for event in immediate.into_iter().chain(clocks) {
            self.apply(event);
        }
    }
}
