//! Per-session tuning
//!
//! Defaults mirror `crate::consts`; tests and embedders may vary individual
//! fields without touching the rest.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // === Playfield ===
    /// Board width in playfield units
    pub board_w: f32,
    /// Board height; a target whose y exceeds this has escaped
    pub board_h: f32,

    // === Targets ===
    /// Edge length of a target's bounding square
    pub target_size: f32,
    /// Maximum random offset above the top edge at spawn
    pub spawn_stagger: f32,
    /// Fall distance per physics tick
    pub fall_speed: f32,
    /// Population bounds for live targets while playing.
    /// `min_targets` must not exceed `max_targets`; `ensure_min_targets`
    /// refuses to loop forever if they are misconfigured.
    pub min_targets: usize,
    pub max_targets: usize,

    // === Session budget ===
    pub initial_lives: u32,
    pub initial_time_secs: u32,

    // === Scoring ===
    pub hit_score: u32,
    pub escape_penalty: u32,

    // === Wall-clock periods ===
    pub spawn_period_ms: u32,
    pub clock_period_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_w: BOARD_W,
            board_h: BOARD_H,
            target_size: TARGET_SIZE,
            spawn_stagger: SPAWN_STAGGER,
            fall_speed: FALL_SPEED,
            min_targets: MIN_TARGETS,
            max_targets: MAX_TARGETS,
            initial_lives: INITIAL_LIVES,
            initial_time_secs: INITIAL_TIME_SECS,
            hit_score: HIT_SCORE,
            escape_penalty: ESCAPE_PENALTY,
            spawn_period_ms: SPAWN_PERIOD_MS,
            clock_period_ms: CLOCK_PERIOD_MS,
        }
    }
}
