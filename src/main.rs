//! Headless demo driver
//!
//! Stands in for the real presentation layer: owns the clock, feeds the
//! stepper a scripted input once per tick, and polls snapshots. Run with
//! `RUST_LOG=info` to watch the session transitions; pass a seed as the
//! first argument to replay a specific run.

use brick_breaker::consts::TICK_RATE;
use brick_breaker::sim::{self, GamePhase, GameState, Playfield, TickInput};

const DEFAULT_SEED: u64 = 0xB41C;
const MAX_RUN_SECS: u64 = 120;

fn main() -> Result<(), sim::ConfigError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let playfield = Playfield::new(800.0, 600.0)?;
    let mut state = GameState::new(playfield, seed);
    state.start();

    for tick_no in 0..MAX_RUN_SECS * u64::from(TICK_RATE) {
        // Naive autopilot: keep the paddle under the ball
        let input = TickInput {
            movement: sim::MoveDir::None,
            pointer_x: Some(state.ball.pos.x),
        };
        sim::tick(&mut state, &input);

        for event in state.take_events() {
            log::info!("event: {event:?}");
        }

        if tick_no % u64::from(TICK_RATE) == 0 {
            if let Ok(json) = serde_json::to_string(&state.snapshot()) {
                println!("{json}");
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let last = state.snapshot();
    log::info!(
        "run finished after {} ticks: {} points, level {}",
        state.time_ticks,
        last.score,
        last.level
    );
    if let Ok(json) = serde_json::to_string(&last) {
        println!("{json}");
    }
    Ok(())
}
