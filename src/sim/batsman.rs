//! Batsman shot clips
//!
//! Fixed-length procedural pose clips selected from the delivery outcome.
//! Each clip drives the bat angle over its frame budget and resets to the
//! idle stance when it completes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::outcome::DeliveryOutcome;

/// Which shot (or misfortune) is currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipKind {
    #[default]
    Idle,
    Defensive,
    Push,
    Drive,
    SixSwing,
    WicketBowled,
}

impl ClipKind {
    /// Clip for a given outcome. Dot balls get a defensive block, fours a
    /// drive, sixes a full swing, everything in between a push.
    pub fn for_outcome(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Runs(0) => Self::Defensive,
            DeliveryOutcome::Runs(1..=3) => Self::Push,
            DeliveryOutcome::Runs(4) => Self::Drive,
            DeliveryOutcome::Runs(6) => Self::SixSwing,
            DeliveryOutcome::Runs(_) => Self::Idle,
            DeliveryOutcome::Wicket => Self::WicketBowled,
        }
    }

    /// Bat angle (degrees) at the first frame of the clip
    fn start_angle(self) -> f32 {
        match self {
            Self::Drive => -15.0,
            Self::SixSwing => -45.0,
            Self::WicketBowled => 20.0,
            _ => 0.0,
        }
    }

    /// Bat angle at normalized clip progress `p` in [0, 1]
    fn angle_at(self, p: f32) -> f32 {
        let swing = (p * std::f32::consts::PI).sin();
        match self {
            Self::Push => 10.0 * swing,
            Self::Drive => -30.0 + 60.0 * swing,
            Self::SixSwing => -60.0 + 90.0 * swing,
            Self::WicketBowled => 20.0,
            Self::Defensive | Self::Idle => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batsman {
    pub pos: Vec2,
    pub clip: ClipKind,
    frame: u32,
    /// Bat angle in degrees
    pub bat_angle: f32,
}

impl Batsman {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            clip: ClipKind::Idle,
            frame: 0,
            bat_angle: 0.0,
        }
    }

    /// Neutral stance, no clip playing
    pub fn reset(&mut self) {
        self.clip = ClipKind::Idle;
        self.frame = 0;
        self.bat_angle = 0.0;
    }

    /// Begin the clip for `outcome`, replacing any clip in progress
    pub fn start_action(&mut self, outcome: DeliveryOutcome) {
        self.clip = ClipKind::for_outcome(outcome);
        self.frame = 0;
        self.bat_angle = self.clip.start_angle();
    }

    /// One tick of the current clip. Returns false exactly once, when the
    /// budget is exhausted, leaving the batsman back in the idle stance.
    pub fn advance(&mut self) -> bool {
        if self.frame >= BATSMAN_ACTION_FRAMES {
            self.reset();
            return false;
        }
        self.frame += 1;
        let p = self.frame as f32 / BATSMAN_ACTION_FRAMES as f32;
        self.bat_angle = self.clip.angle_at(p);
        true
    }
}
