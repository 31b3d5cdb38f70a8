//! Delivery phase machine
//!
//! `tick` advances the whole animation by exactly one frame. Each delivery
//! walks PreBall -> BowlerRunup -> BowlerAction -> BallTravel ->
//! BatsmanAction -> [Fielding] -> ShowingOutcome -> Paused, then either
//! loops back to PreBall for the next log entry or terminates in MatchOver.
//! The crowd phase clock runs on every tick regardless of phase.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::sim::state::{MatchState, Phase};

/// Advance the animation by one frame
pub fn tick(state: &mut MatchState) {
    state.time_ticks += 1;
    state.crowd.advance();

    match state.phase {
        Phase::PreBall => match state.log.current() {
            Some(outcome) => {
                state.reset_for_delivery();
                state.caption = format!("Ball {}: {}", state.log.cursor() + 1, outcome);
                state.phase = Phase::BowlerRunup;
            }
            None => enter_match_over(state),
        },

        Phase::BowlerRunup => {
            if state.bowler.advance_runup() {
                state.ball.hold_at(state.bowler.carry_pos());
            } else {
                state.phase = Phase::BowlerAction;
            }
        }

        Phase::BowlerAction => {
            if state.bowler.advance_action() {
                if state.bowler.is_releasing() {
                    let target = Vec2::new(state.batsman.pos.x, STUMPS_LINE_Y_BATSMAN);
                    let bounce_plane = STUMPS_LINE_Y_BATSMAN - PITCH_BOUNCE_POINT_OFFSET;
                    state
                        .ball
                        .start_travel(state.bowler.hand_pos(), target, bounce_plane);
                    state.phase = Phase::BallTravel;
                } else {
                    state.ball.hold_at(state.bowler.carry_pos());
                }
            } else {
                // action ended without the release signal firing
                state.phase = Phase::ShowingOutcome;
            }
        }

        Phase::BallTravel => {
            if !state.ball.advance() {
                let outcome = match state.log.current() {
                    Some(o) => o,
                    None => {
                        enter_match_over(state);
                        return;
                    }
                };
                state.batsman.start_action(outcome);
                if outcome.is_wicket() {
                    state.stumps_hit = true;
                    state.roll_stump_scatter();
                    state.ball.pos =
                        Vec2::new(state.batsman.pos.x, STUMPS_LINE_Y_BATSMAN + STUMP_HEIGHT / 2.0);
                    state.ball.visible = false;
                }
                state.phase = Phase::BatsmanAction;
            }
        }

        Phase::BatsmanAction => {
            if !state.batsman.advance() {
                let outcome = match state.log.current() {
                    Some(o) => o,
                    None => {
                        enter_match_over(state);
                        return;
                    }
                };
                state.progress.record(outcome);
                state.crowd.set_reaction(outcome);
                log::info!(
                    "ball {}: {} ({}/{} after {}.{})",
                    state.log.cursor() + 1,
                    outcome,
                    state.progress.runs,
                    state.progress.wickets,
                    state.progress.overs_completed(),
                    state.progress.balls_this_over(),
                );
                if outcome.sends_fielders() {
                    arm_fielders(state);
                    state.fielding_timer = FIELDER_MAX_MOVE_FRAMES;
                    state.phase = Phase::Fielding;
                } else {
                    state.phase = Phase::ShowingOutcome;
                }
            }
        }

        Phase::Fielding => {
            let mut any_moving = false;
            for f in &mut state.fielders {
                if f.advance() {
                    any_moving = true;
                }
            }
            state.fielding_timer = state.fielding_timer.saturating_sub(1);
            if !any_moving || state.fielding_timer == 0 {
                for f in &mut state.fielders {
                    f.reset_home();
                }
                state.phase = Phase::ShowingOutcome;
            }
        }

        Phase::ShowingOutcome => {
            state.pause_timer = INTER_BALL_PAUSE_FRAMES;
            state.phase = Phase::Paused;
        }

        Phase::Paused => {
            state.pause_timer = state.pause_timer.saturating_sub(1);
            if state.pause_timer == 0 {
                state.log.advance();
                if state.log.is_exhausted() {
                    enter_match_over(state);
                } else {
                    state.phase = Phase::PreBall;
                }
            }
        }

        Phase::MatchOver => {}
    }
}

/// Send two distinct fielders after the ball, each to a jittered point
/// near its own home position
fn arm_fielders(state: &mut MatchState) {
    let n = state.fielders.len();
    if n == 0 {
        return;
    }
    let i = state.rng.random_range(0..n);
    let mut j = state.rng.random_range(0..n);
    if j == i {
        j = (j + 1) % n;
    }
    for idx in [i, j] {
        let home = state.fielders[idx].home;
        let jx = state.rng.random_range(-FIELDER_TARGET_JITTER..=FIELDER_TARGET_JITTER);
        let jy = state.rng.random_range(-FIELDER_TARGET_JITTER..=FIELDER_TARGET_JITTER);
        let target = Vec2::new(
            (home.x + jx).clamp(FIELDER_RADIUS, SCENE_WIDTH - FIELDER_RADIUS),
            (home.y + jy).clamp(
                CROWD_AREA_HEIGHT + FIELDER_RADIUS,
                SCENE_HEIGHT - FIELDER_RADIUS - 30.0,
            ),
        );
        state.fielders[idx].start_move(target);
    }
}

fn enter_match_over(state: &mut MatchState) {
    state.phase = Phase::MatchOver;
    state.caption = "Match Over!".to_string();
    state.progress.mark_match_over();
}
