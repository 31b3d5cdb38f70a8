//! Crowd excitement model
//!
//! A generated population of stand figures bobbing on a shared phase clock.
//! Reactions are level-based: a new reaction only ever escalates or re-arms
//! the current level, and every reaction decays to idle on a fixed timer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::outcome::DeliveryOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ExcitementLevel {
    #[default]
    Idle,
    Mild,
    High,
}

impl ExcitementLevel {
    /// How a crowd greets each outcome: boundaries and wickets bring the
    /// house down, singles get polite applause, dot balls nothing.
    pub fn for_outcome(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Wicket | DeliveryOutcome::Runs(4) | DeliveryOutcome::Runs(6) => {
                Self::High
            }
            DeliveryOutcome::Runs(0) => Self::Idle,
            DeliveryOutcome::Runs(_) => Self::Mild,
        }
    }

    /// (amplitude multiplier, phase speed multiplier) for the bob
    fn bob_params(self) -> (f32, f32) {
        match self {
            Self::Idle => (0.0, 0.0),
            Self::Mild => (1.5, 1.2),
            Self::High => (2.5, 1.5),
        }
    }
}

/// One figure in the stands. Geometry is in scene pixels; `y` is a fraction
/// of the stand band height, fixed at generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdMember {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color_index: usize,
    speed_factor: f32,
    amplitude: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crowd {
    pub members: Vec<CrowdMember>,
    level: ExcitementLevel,
    timer: u32,
    phase: f32,
}

/// Stand row depths as fractions of the band, weighted toward the middle
/// rows so the stand looks filled rather than striped
const ROW_FRACTIONS: [f32; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
const ROW_WEIGHTS: [u32; 6] = [2, 3, 4, 5, 4, 2];

impl Crowd {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let total: u32 = ROW_WEIGHTS.iter().sum();
        let members = (0..CROWD_SIZE)
            .map(|_| {
                let roll = rng.random_range(0..total);
                let mut acc = 0;
                let mut row = ROW_FRACTIONS[ROW_FRACTIONS.len() - 1];
                for (frac, w) in ROW_FRACTIONS.iter().zip(ROW_WEIGHTS) {
                    acc += w;
                    if roll < acc {
                        row = *frac;
                        break;
                    }
                }
                CrowdMember {
                    x: rng.random_range(0.0..SCENE_WIDTH),
                    y: row,
                    width: rng.random_range(6.0..=12.0),
                    height: rng.random_range(12.0..=20.0),
                    color_index: rng.random_range(0..6),
                    speed_factor: rng.random_range(0.8..1.2),
                    amplitude: rng.random_range(1.0..3.0),
                }
            })
            .collect();
        Self {
            members,
            level: ExcitementLevel::Idle,
            timer: 0,
            phase: 0.0,
        }
    }

    pub fn level(&self) -> ExcitementLevel {
        self.level
    }

    /// React to an outcome. A weaker reaction never interrupts a stronger
    /// one in progress; an equal reaction re-arms the timer.
    pub fn set_reaction(&mut self, outcome: DeliveryOutcome) {
        let candidate = ExcitementLevel::for_outcome(outcome);
        if candidate >= self.level && candidate != ExcitementLevel::Idle {
            self.level = candidate;
            self.timer = CROWD_REACTION_FRAMES;
        }
    }

    /// Advance the phase clock and decay any active reaction
    pub fn advance(&mut self) {
        self.phase += CROWD_PHASE_STEP;
        if self.timer > 0 {
            self.timer -= 1;
            if self.timer == 0 {
                self.level = ExcitementLevel::Idle;
            }
        }
    }

    /// Vertical bob offset for one member at the current phase; zero when
    /// the crowd is idle
    pub fn member_offset(&self, m: &CrowdMember) -> f32 {
        let (amp, speed) = self.level.bob_params();
        if amp == 0.0 {
            return 0.0;
        }
        (self.phase * m.speed_factor * speed + m.x * 0.05).sin() * m.amplitude * amp
    }

    pub fn reset(&mut self) {
        self.level = ExcitementLevel::Idle;
        self.timer = 0;
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn crowd() -> Crowd {
        Crowd::generate(&mut Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_generation_populates_band() {
        let c = crowd();
        assert_eq!(c.members.len(), CROWD_SIZE);
        for m in &c.members {
            assert!(ROW_FRACTIONS.contains(&m.y));
            assert!(m.x >= 0.0 && m.x < SCENE_WIDTH);
            assert!(m.color_index < 6);
        }
    }

    #[test]
    fn test_weaker_reaction_never_downgrades() {
        let mut c = crowd();
        c.set_reaction(DeliveryOutcome::Wicket);
        assert_eq!(c.level(), ExcitementLevel::High);
        c.set_reaction(DeliveryOutcome::Runs(1));
        assert_eq!(c.level(), ExcitementLevel::High);
    }

    #[test]
    fn test_equal_reaction_rearms_timer() {
        let mut c = crowd();
        c.set_reaction(DeliveryOutcome::Runs(4));
        for _ in 0..CROWD_REACTION_FRAMES / 2 {
            c.advance();
        }
        c.set_reaction(DeliveryOutcome::Runs(6));
        for _ in 0..CROWD_REACTION_FRAMES - 1 {
            c.advance();
            assert_eq!(c.level(), ExcitementLevel::High);
        }
        c.advance();
        assert_eq!(c.level(), ExcitementLevel::Idle);
    }

    #[test]
    fn test_reaction_decays_to_idle() {
        let mut c = crowd();
        c.set_reaction(DeliveryOutcome::Runs(2));
        assert_eq!(c.level(), ExcitementLevel::Mild);
        for _ in 0..CROWD_REACTION_FRAMES {
            c.advance();
        }
        assert_eq!(c.level(), ExcitementLevel::Idle);
    }

    #[test]
    fn test_dot_ball_leaves_crowd_idle() {
        let mut c = crowd();
        c.set_reaction(DeliveryOutcome::Runs(0));
        assert_eq!(c.level(), ExcitementLevel::Idle);
    }

    #[test]
    fn test_idle_offset_is_zero() {
        let mut c = crowd();
        for _ in 0..10 {
            c.advance();
        }
        let m = c.members[0].clone();
        assert_eq!(c.member_offset(&m), 0.0);

        c.set_reaction(DeliveryOutcome::Runs(6));
        c.advance();
        assert_ne!(c.member_offset(&m), 0.0);
    }
}
