//! Target pool and spawner primitives
//!
//! The pool owns every target for the session. Spawns respect the population
//! ceiling, `ensure_min_targets` restores the floor after every
//! population-affecting event, and dead entries are swept lazily by the next
//! scan pass rather than during iteration.

use glam::Vec2;
use rand::Rng;

use super::state::{Session, Target};

impl Session {
    /// Number of live targets in the pool
    pub(crate) fn alive_count(&self) -> usize {
        self.targets.iter().filter(|t| t.alive).count()
    }

    /// Spawn one target above the visible top edge; no-op at the population
    /// ceiling.
    ///
    /// `x` is uniform over the playfield, `y` carries a random stagger so
    /// simultaneous spawns do not fall in lockstep.
    pub(crate) fn spawn_target(&mut self) {
        if self.alive_count() >= self.config.max_targets {
            return;
        }
        let size = self.config.target_size;
        let max_x = (self.config.board_w - size).max(0.0);
        let x = if max_x > 0.0 {
            self.rng.random_range(0.0..max_x)
        } else {
            0.0
        };
        let stagger = if self.config.spawn_stagger > 0.0 {
            self.rng.random_range(0.0..=self.config.spawn_stagger)
        } else {
            0.0
        };
        self.spawn_target_at(Vec2::new(x, -size - stagger));
    }

    /// Spawn a target at an explicit position, bypassing placement rules but
    /// not identity assignment. Also the seam tests use to stage scenarios.
    pub(crate) fn spawn_target_at(&mut self, pos: Vec2) {
        let id = self.next_target_id();
        let size = self.config.target_size;
        log::debug!("spawn target {} at ({:.1}, {:.1})", id, pos.x, pos.y);
        self.targets.push(Target {
            id,
            pos,
            size,
            alive: true,
        });
    }

    /// Top the pool up to the population floor.
    ///
    /// Bails out if a pass makes no progress (population bounds misconfigured
    /// with `min > max`) so the loop can never spin forever.
    pub(crate) fn ensure_min_targets(&mut self) {
        loop {
            let alive = self.alive_count();
            if alive >= self.config.min_targets {
                return;
            }
            self.spawn_target();
            if self.alive_count() == alive {
                log::warn!(
                    "population floor {} unreachable (ceiling {})",
                    self.config.min_targets,
                    self.config.max_targets
                );
                return;
            }
        }
    }

    /// Lazy removal pass: drop entries marked dead by earlier events.
    pub(crate) fn sweep_dead(&mut self) {
        self.targets.retain(|t| t.alive);
    }
}
