//! Bowler action model
//!
//! Two sequential sub-phases per delivery: a linear run-up to the bowling
//! crease, then a five-pose bowling action. The release signal fired during
//! the third pose is the only trigger that hands the ball to the projectile
//! model.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// Arm angles (degrees, anticlockwise from horizontal) for the five key
/// poses: back-swing, high, release, follow-through, complete
const KEY_POSES: [f32; 5] = [45.0, 90.0, 135.0, 180.0, 225.0];

/// Index of the release pose within [`KEY_POSES`]
const RELEASE_POSE: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bowler {
    pub pos: Vec2,
    start_runup_y: f32,
    crease_y: f32,
    runup_frame: u32,
    action_frame: u32,
    /// Arm angle in degrees
    pub arm_angle: f32,
    releasing: bool,
}

impl Bowler {
    /// Bowler at the top of the run-up, `x` on the pitch centerline,
    /// delivering from `crease_y`
    pub fn new(x: f32, crease_y: f32) -> Self {
        let start_runup_y = crease_y - BOWLER_RUNUP_OFFSET;
        Self {
            pos: Vec2::new(x, start_runup_y),
            start_runup_y,
            crease_y,
            runup_frame: 0,
            action_frame: 0,
            arm_angle: 0.0,
            releasing: false,
        }
    }

    /// Back to the top of the run-up with a neutral arm
    pub fn reset(&mut self) {
        self.pos.y = self.start_runup_y;
        self.runup_frame = 0;
        self.action_frame = 0;
        self.arm_angle = 0.0;
        self.releasing = false;
    }

    /// Where the ball rests while carried (above the head)
    pub fn carry_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - PLAYER_RADIUS - BALL_RADIUS)
    }

    /// Tip of the bowling arm; the ball is released from here
    pub fn hand_pos(&self) -> Vec2 {
        let rad = self.arm_angle.to_radians();
        Vec2::new(
            self.pos.x + PLAYER_RADIUS * rad.cos(),
            self.pos.y - PLAYER_RADIUS * rad.sin(),
        )
    }

    /// One tick of the run-up toward the crease. Returns false exactly
    /// once, on budget exhaustion.
    pub fn advance_runup(&mut self) -> bool {
        if self.runup_frame < BOWLER_RUNUP_FRAMES {
            self.runup_frame += 1;
            let p = self.runup_frame as f32 / BOWLER_RUNUP_FRAMES as f32;
            self.pos.y = lerp(self.start_runup_y, self.crease_y, p);
            return true;
        }
        self.pos.y = self.crease_y;
        false
    }

    /// One tick of the bowling action. Poses are spread evenly over the
    /// budget; `is_releasing` is true only for ticks mapped to the release
    /// pose. Returns false when the action is complete.
    pub fn advance_action(&mut self) -> bool {
        if self.action_frame >= BOWLER_ACTION_FRAMES {
            self.releasing = false;
            return false;
        }
        self.action_frame += 1;

        let ticks_per_pose = BOWLER_ACTION_FRAMES / KEY_POSES.len() as u32;
        let pose = (self.action_frame / ticks_per_pose).min(KEY_POSES.len() as u32 - 1);
        self.arm_angle = KEY_POSES[pose as usize];
        self.releasing = pose == RELEASE_POSE;
        true
    }

    /// Release signal; the orchestrator's sole handoff trigger
    pub fn is_releasing(&self) -> bool {
        self.releasing
    }
}
