//! Session state and core simulation types
//!
//! All authoritative state for one play-through lives here. A `Session` is a
//! single owned object with an explicit constructor, so independent sessions
//! (e.g. in tests) can coexist with no ambient state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::Config;
use super::timer::Timers;

/// Current run state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunState {
    /// Initial state, nothing ticking
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-session
    Paused,
    /// Run ended; terminal until the next `start`
    GameOver,
}

/// A falling target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Top-left corner in playfield units
    pub pos: Vec2,
    /// Edge length of the bounding square
    pub size: f32,
    /// Dead targets are swept out on the next population scan, never removed
    /// mid-iteration
    pub alive: bool,
}

impl Target {
    /// Axis-aligned bounding-square hit test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size
    }
}

/// Read-only snapshot row consumed by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// End-of-session summary, available only in `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSummary {
    pub score: u32,
    pub is_new_highscore: bool,
}

/// One arcade session: score, lives, countdown, target pool and timers
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: Config,
    pub(crate) rng: Pcg32,
    pub(crate) run_state: RunState,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) time_remaining: u32,
    /// Live and not-yet-swept targets, in spawn order
    pub(crate) targets: Vec<Target>,
    pub(crate) player_name: String,
    /// Best score carried across sessions, injected by the embedder
    pub(crate) highscore: u32,
    pub(crate) summary: Option<FinalSummary>,
    /// Spawner + countdown handles; `Some` exactly while Playing
    pub(crate) timers: Option<Timers>,
    /// Next target ID (monotonic per session)
    next_id: u32,
}

impl Session {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::default(), seed)
    }

    /// Create a session with custom tuning
    pub fn with_config(config: Config, seed: u64) -> Self {
        let lives = config.initial_lives;
        let time = config.initial_time_secs;
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            run_state: RunState::Menu,
            score: 0,
            lives,
            time_remaining: time,
            targets: Vec::new(),
            player_name: String::new(),
            highscore: 0,
            summary: None,
            timers: None,
            next_id: 1,
        }
    }

    /// Allocate the next target ID
    pub(crate) fn next_target_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // === Commands ===
    //
    // Every command is total: when the current state does not match its
    // precondition it is a silent no-op, observable by the caller comparing
    // `run_state` before and after.

    /// Begin a new session from `Menu` or `GameOver`.
    ///
    /// Requires a non-empty player name. Resets all counters, clears the
    /// pool, seeds the initial targets and allocates fresh timers.
    pub fn start(&mut self, name: &str) {
        if !matches!(self.run_state, RunState::Menu | RunState::GameOver) {
            return;
        }
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        self.player_name = name.to_string();
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.time_remaining = self.config.initial_time_secs;
        self.targets.clear();
        self.summary = None;
        self.next_id = 1;
        self.run_state = RunState::Playing;

        // Two staggered targets up front, then top up to the minimum
        for _ in 0..2 {
            self.spawn_target();
        }
        self.ensure_min_targets();

        self.timers = Some(Timers::new(&self.config));
        log::info!("session started for {:?}", self.player_name);
    }

    /// Freeze gameplay. Counters are untouched; timer handles are torn down
    /// so no stale period fires while paused.
    pub fn pause(&mut self) {
        if self.run_state != RunState::Playing {
            return;
        }
        self.timers = None;
        self.run_state = RunState::Paused;
        log::info!("session paused");
    }

    /// Resume from pause with freshly allocated timers; missed spawner and
    /// countdown periods are not caught up.
    pub fn resume(&mut self) {
        if self.run_state != RunState::Paused {
            return;
        }
        self.timers = Some(Timers::new(&self.config));
        self.run_state = RunState::Playing;
        log::info!("session resumed");
    }

    /// Abandon the session from `Paused` or `GameOver` and return to the
    /// menu. Nothing is persisted.
    pub fn quit(&mut self) {
        if !matches!(self.run_state, RunState::Paused | RunState::GameOver) {
            return;
        }
        self.timers = None;
        self.targets.clear();
        self.summary = None;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.time_remaining = self.config.initial_time_secs;
        self.run_state = RunState::Menu;
        log::info!("session abandoned to menu");
    }

    /// Transition into `GameOver`: tear down timers, freeze the pool as-is
    /// and evaluate the high score exactly once.
    pub(crate) fn end_session(&mut self) {
        self.timers = None;
        self.run_state = RunState::GameOver;

        let is_new = self.score > self.highscore;
        if is_new {
            self.highscore = self.score;
        }
        self.summary = Some(FinalSummary {
            score: self.score,
            is_new_highscore: is_new,
        });
        log::info!(
            "session over: {:?} scored {} (new high: {})",
            self.player_name,
            self.score,
            is_new
        );
    }

    // === Read-only snapshot ===

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Remaining session time in whole seconds
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Best score as the session currently knows it
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Inject the persisted best score (read by the embedder at startup)
    pub fn set_highscore(&mut self, best: u32) {
        self.highscore = best;
    }

    /// Live targets in spawn order, for rendering
    pub fn visible_targets(&self) -> Vec<TargetView> {
        self.targets
            .iter()
            .filter(|t| t.alive)
            .map(|t| TargetView {
                x: t.pos.x,
                y: t.pos.y,
                size: t.size,
            })
            .collect()
    }

    /// End-of-session summary; `None` outside `GameOver`
    pub fn final_summary(&self) -> Option<FinalSummary> {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requires_name() {
        let mut session = Session::new(7);
        session.start("");
        assert_eq!(session.run_state(), RunState::Menu);
        session.start("   ");
        assert_eq!(session.run_state(), RunState::Menu);

        session.start("  robin  ");
        assert_eq!(session.run_state(), RunState::Playing);
        assert_eq!(session.player_name(), "robin");
    }

    #[test]
    fn test_start_seeds_population() {
        let mut session = Session::new(7);
        session.start("robin");
        let visible = session.visible_targets();
        assert_eq!(visible.len(), 2);
        assert!(session.timers.is_some());
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), crate::consts::INITIAL_LIVES);
        assert_eq!(session.time_remaining(), crate::consts::INITIAL_TIME_SECS);
    }

    #[test]
    fn test_commands_are_gated_noops() {
        let mut session = Session::new(7);

        // Nothing fires from the menu
        session.pause();
        session.resume();
        session.quit();
        assert_eq!(session.run_state(), RunState::Menu);

        session.start("robin");
        session.resume(); // not paused
        assert_eq!(session.run_state(), RunState::Playing);
        session.quit(); // quit is only reachable via pause or game over
        assert_eq!(session.run_state(), RunState::Playing);

        session.pause();
        assert_eq!(session.run_state(), RunState::Paused);
        assert!(session.timers.is_none());
        session.pause(); // idempotent
        assert_eq!(session.run_state(), RunState::Paused);

        // No restart mid-session
        session.start("again");
        assert_eq!(session.run_state(), RunState::Paused);
        assert_eq!(session.player_name(), "robin");
    }

    #[test]
    fn test_pause_resume_round_trip() {
        let mut session = Session::new(7);
        session.start("robin");
        session.score = 30;
        session.pause();
        session.resume();
        assert_eq!(session.run_state(), RunState::Playing);
        assert_eq!(session.score(), 30);
        assert!(session.timers.is_some());
    }

    #[test]
    fn test_quit_discards_session() {
        let mut session = Session::new(7);
        session.start("robin");
        session.score = 40;
        session.pause();
        session.quit();
        assert_eq!(session.run_state(), RunState::Menu);
        assert_eq!(session.score(), 0);
        assert!(session.visible_targets().is_empty());
        // Quitting never persists: the best-score copy is untouched
        assert_eq!(session.highscore(), 0);
    }

    #[test]
    fn test_visible_targets_skips_dead_and_keeps_order() {
        let mut session = Session::new(7);
        session.start("robin");
        session.targets.clear();
        for i in 0..3 {
            session.spawn_target_at(glam::Vec2::new(i as f32 * 100.0, 0.0));
        }
        session.targets[1].alive = false;

        let views = session.visible_targets();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].x, 0.0);
        assert_eq!(views[1].x, 200.0);
    }

    #[test]
    fn test_final_summary_only_in_game_over() {
        let mut session = Session::new(7);
        assert!(session.final_summary().is_none());
        session.start("robin");
        assert!(session.final_summary().is_none());
        session.end_session();
        let summary = session.final_summary().expect("game over summary");
        assert_eq!(summary.score, 0);
        assert!(!summary.is_new_highscore);
    }

    #[test]
    fn test_target_ids_monotonic_and_reset_per_session() {
        let mut session = Session::new(7);
        session.start("robin");
        let first_run: Vec<u32> = session.targets.iter().map(|t| t.id).collect();
        assert_eq!(first_run, vec![1, 2]);

        session.end_session();
        session.start("robin");
        let second_run: Vec<u32> = session.targets.iter().map(|t| t.id).collect();
        assert_eq!(second_run, vec![1, 2]);
    }
}
