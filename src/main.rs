//! Archery Pop entry point
//!
//! Headless demo driver: runs one scripted session at a simulated 60 Hz
//! cadence until the run ends, then reports the summary.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use archery_pop::{HighScore, RunState, Session, format_time};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Archery Pop demo starting with seed {}", seed);

    let mut store = HighScore::load();
    let mut session = Session::new(seed);
    session.set_highscore(store.best());
    session.start("Demo");

    // ~16 ms of wall clock per simulated frame
    let mut frame: u64 = 0;
    while session.run_state() == RunState::Playing {
        session.elapse(16);
        session.advance(1);

        // Every 20th frame, shoot the target closest to the floor
        if frame % 20 == 0 {
            if let Some(t) = session
                .visible_targets()
                .into_iter()
                .max_by(|a, b| a.y.total_cmp(&b.y))
            {
                session.fire(t.x + t.size / 2.0, t.y + t.size / 2.0);
            }
        }
        frame += 1;
    }

    let summary = session.final_summary().expect("session ended");
    if store.record(summary.score) {
        store.save();
    }
    println!(
        "{} scored {} with {} remaining (lives {}, best {})",
        session.player_name(),
        summary.score,
        format_time(session.time_remaining()),
        session.lives(),
        store.best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm embedder drives the engine through the library surface
}
