//! Match animation state
//!
//! Everything the delivery phase machine reads and writes lives here,
//! including the seeded RNG. Nothing in this module advances time; that is
//! the orchestrator's job.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::ball::Projectile;
use crate::sim::batsman::Batsman;
use crate::sim::bowler::Bowler;
use crate::sim::crowd::Crowd;
use crate::sim::fielder::{home_positions, Fielder};
use crate::sim::outcome::OutcomeLog;
use crate::sim::score::MatchProgress;

/// Where the delivery phase machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Next delivery staged, actors resetting
    PreBall,
    BowlerRunup,
    BowlerAction,
    BallTravel,
    BatsmanAction,
    Fielding,
    /// Outcome recorded, caption up
    ShowingOutcome,
    /// Inter-ball hold
    Paused,
    /// Terminal; the log is exhausted
    MatchOver,
}

/// Per-stump disturbance rolled once when the wicket falls
#[derive(Debug, Clone, Copy, Default)]
pub struct StumpScatter {
    pub lean_x: f32,
    pub extra_drop: f32,
    pub toppled: bool,
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub seed: u64,
    pub rng: Pcg32,
    pub log: OutcomeLog,
    pub phase: Phase,
    pub bowler: Bowler,
    pub batsman: Batsman,
    pub ball: Projectile,
    pub fielders: Vec<Fielder>,
    pub crowd: Crowd,
    pub progress: MatchProgress,
    /// True from the moment a wicket delivery strikes until the next
    /// delivery is staged
    pub stumps_hit: bool,
    pub stump_scatter: [StumpScatter; 3],
    pub pause_timer: u32,
    pub fielding_timer: u32,
    /// Caption shown above the scoreboard
    pub caption: String,
    /// Total ticks since construction
    pub time_ticks: u64,
}

impl MatchState {
    pub fn new(log: OutcomeLog, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let crowd = Crowd::generate(&mut rng);
        let fielders = home_positions().into_iter().map(Fielder::new).collect();

        let center_x = PITCH_X + PITCH_WIDTH / 2.0;
        let bowler = Bowler::new(center_x, STUMPS_LINE_Y_BOWLER + 20.0);
        let batsman = Batsman::new(Vec2::new(center_x, STUMPS_LINE_Y_BATSMAN - 20.0));
        let ball = Projectile::at_rest(bowler.carry_pos());

        Self {
            seed,
            rng,
            log,
            phase: Phase::PreBall,
            bowler,
            batsman,
            ball,
            fielders,
            crowd,
            progress: MatchProgress::default(),
            stumps_hit: false,
            stump_scatter: [StumpScatter::default(); 3],
            pause_timer: 0,
            fielding_timer: 0,
            caption: String::new(),
            time_ticks: 0,
        }
    }

    /// Rebuild the whole animation from tick zero with the same log and
    /// seed. Idempotent; repeated resets produce identical state.
    pub fn reset(&mut self) {
        let mut log = self.log.clone();
        log.rewind();
        *self = Self::new(log, self.seed);
    }

    /// Stage the actors for the next delivery
    pub fn reset_for_delivery(&mut self) {
        self.stumps_hit = false;
        self.stump_scatter = [StumpScatter::default(); 3];
        self.bowler.reset();
        self.batsman.reset();
        self.ball = Projectile::at_rest(self.bowler.carry_pos());
        for f in &mut self.fielders {
            f.reset_home();
        }
    }

    /// Roll the disturbed-stumps pose for a fallen wicket
    pub fn roll_stump_scatter(&mut self) {
        for s in &mut self.stump_scatter {
            *s = StumpScatter {
                lean_x: self.rng.random_range(-5.0..=5.0),
                extra_drop: self.rng.random_range(0.0..10.0),
                toppled: self.rng.random_range(0..2) == 1,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> OutcomeLog {
        OutcomeLog::parse("4,wicket,1").unwrap()
    }

    #[test]
    fn test_new_stages_actors() {
        let s = MatchState::new(log(), 1);
        assert_eq!(s.phase, Phase::PreBall);
        assert_eq!(s.fielders.len(), NUM_FIELDERS);
        assert!(s.ball.visible);
        assert_eq!(s.ball.pos, s.bowler.carry_pos());
        assert!(!s.stumps_hit);
    }

    #[test]
    fn test_scatter_uses_seeded_rng() {
        let mut a = MatchState::new(log(), 42);
        let mut b = MatchState::new(log(), 42);
        a.roll_stump_scatter();
        b.roll_stump_scatter();
        for (sa, sb) in a.stump_scatter.iter().zip(&b.stump_scatter) {
            assert_eq!(sa.lean_x, sb.lean_x);
            assert_eq!(sa.extra_drop, sb.extra_drop);
            assert_eq!(sa.toppled, sb.toppled);
        }
    }

    #[test]
    fn test_reset_for_delivery_clears_wicket_state() {
        let mut s = MatchState::new(log(), 3);
        s.stumps_hit = true;
        s.roll_stump_scatter();
        s.reset_for_delivery();
        assert!(!s.stumps_hit);
        assert_eq!(s.stump_scatter[0].lean_x, 0.0);
        assert_eq!(s.ball.pos, s.bowler.carry_pos());
    }
}
