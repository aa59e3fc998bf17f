//! Archery Pop - a falling-targets arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic session engine (state machine, target pool, scoring)
//! - `highscores`: Best-score persistence owned by the embedding UI
//!
//! Rendering, input capture and overlays live in the embedder; the engine
//! only consumes abstract commands and exposes a read-only snapshot.

pub mod highscores;
pub mod sim;

pub use highscores::HighScore;
pub use sim::{Config, Event, FinalSummary, RunState, Session, TargetView};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in board units
    pub const BOARD_W: f32 = 960.0;
    pub const BOARD_H: f32 = 600.0;

    /// Target edge length (axis-aligned square)
    pub const TARGET_SIZE: f32 = 80.0;
    /// Maximum random offset above the top edge at spawn (desynchronizes falls)
    pub const SPAWN_STAGGER: f32 = 80.0;
    /// Fall speed in board units per physics tick (one tick per rendered frame)
    pub const FALL_SPEED: f32 = 3.0;

    /// Live-target population bounds
    pub const MIN_TARGETS: usize = 1;
    pub const MAX_TARGETS: usize = 5;

    /// Session budget
    pub const INITIAL_LIVES: u32 = 3;
    pub const INITIAL_TIME_SECS: u32 = 60;

    /// Scoring
    pub const HIT_SCORE: u32 = 10;
    pub const ESCAPE_PENALTY: u32 = 5;

    /// Wall-clock periods, independent of the render cadence
    pub const SPAWN_PERIOD_MS: u32 = 2000;
    pub const CLOCK_PERIOD_MS: u32 = 1000;
}

/// Format seconds as "MM:SS" for HUD display
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
