//! Headless replay driver
//!
//! Runs a delivery log through the simulation at the fixed tick rate and
//! prints the scoreboard after every ball. Pass a comma-separated log
//! ("4,0,wicket,6") as the first argument, or run with no arguments for a
//! generated demo innings.

use std::process::exit;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use pitchside::sim::{generate_demo_log, tick, MatchState, OutcomeLog, Phase};
use pitchside::MatchConfig;

fn main() {
    env_logger::init();

    let config = MatchConfig::demo();
    let log = match std::env::args().nth(1) {
        Some(text) => match OutcomeLog::parse(&text) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("invalid delivery log: {e}");
                exit(1);
            }
        },
        None => generate_demo_log(&mut Pcg32::seed_from_u64(config.seed)),
    };

    println!(
        "{} (batting) vs {} over {} deliveries",
        config.batting.name,
        config.bowling.name,
        log.len()
    );

    let mut state = MatchState::new(log, config.seed);
    let mut last_reported = 0;
    while state.phase != Phase::MatchOver {
        tick(&mut state);
        if state.progress.balls != last_reported {
            last_reported = state.progress.balls;
            println!(
                "  {}.{}  {:>7}  {} / {}",
                state.progress.overs_completed(),
                state.progress.balls_this_over(),
                state.progress.last_ball,
                state.progress.runs,
                state.progress.wickets,
            );
        }
    }
    println!("{}", state.caption);
    println!(
        "final: {} {} / {} in {:.1}s of animation",
        config.batting.name,
        state.progress.runs,
        state.progress.wickets,
        state.time_ticks as f64 / pitchside::consts::FPS as f64,
    );
}
