//! Deterministic session engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Event-driven only (physics ticks, timer firings, input commands)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod config;
pub mod state;
pub mod targets;
pub mod tick;
pub mod timer;

pub use config::Config;
pub use state::{FinalSummary, RunState, Session, Target, TargetView};
pub use tick::Event;
pub use timer::PeriodTimer;
