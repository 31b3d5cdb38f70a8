//! Fielder steering
//!
//! Fielders idle at fixed home positions and, when armed, steer straight at
//! a target point at constant speed. Movement is capped by a frame budget so
//! a fielder can never chase forever.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fielder {
    pub home: Vec2,
    pub pos: Vec2,
    target: Vec2,
    moving: bool,
    frames: u32,
}

impl Fielder {
    pub fn new(home: Vec2) -> Self {
        Self {
            home,
            pos: home,
            target: home,
            moving: false,
            frames: 0,
        }
    }

    /// Start steering toward `target` from wherever the fielder stands now
    pub fn start_move(&mut self, target: Vec2) {
        self.target = target;
        self.moving = true;
        self.frames = 0;
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Snap back to the home position and stop. Idempotent.
    pub fn reset_home(&mut self) {
        self.pos = self.home;
        self.target = self.home;
        self.moving = false;
        self.frames = 0;
    }

    /// One tick of steering. Returns true while still moving. Arrival and
    /// budget exhaustion both stop the fielder; the budget case also snaps
    /// back home so a clamped, unreachable target cannot strand anyone.
    pub fn advance(&mut self) -> bool {
        if !self.moving {
            return false;
        }
        self.frames += 1;
        if self.frames >= FIELDER_MAX_MOVE_FRAMES {
            self.reset_home();
            return false;
        }

        let delta = self.target - self.pos;
        let dist = delta.length();
        if dist < FIELDER_SPEED {
            self.pos = self.target;
            self.moving = false;
            return false;
        }
        self.pos += delta / dist * FIELDER_SPEED;
        true
    }
}

/// The nine stock home positions: keeper behind the batsman, slips and
/// point/cover either side, mid-on and mid-off up the pitch, two deep men
/// square, and a long-off behind the bowler. All clamped inside the field
/// of play.
pub fn home_positions() -> [Vec2; NUM_FIELDERS] {
    let cx = PITCH_X + PITCH_WIDTH / 2.0;
    let raw = [
        Vec2::new(cx, POPPING_CREASE_Y_BOWLER + 60.0),
        Vec2::new(PITCH_X - 100.0, PITCH_Y_BOWLER_END + 150.0),
        Vec2::new(PITCH_X + PITCH_WIDTH + 100.0, PITCH_Y_BOWLER_END + 150.0),
        Vec2::new(PITCH_X - 150.0, PITCH_Y_BATSMAN_END - 150.0),
        Vec2::new(PITCH_X + PITCH_WIDTH + 150.0, PITCH_Y_BATSMAN_END - 150.0),
        Vec2::new(SCENE_WIDTH / 2.0, PITCH_Y_BATSMAN_END + 100.0),
        Vec2::new(PITCH_X - 200.0, SCENE_HEIGHT / 2.0 + 50.0),
        Vec2::new(PITCH_X + PITCH_WIDTH + 200.0, SCENE_HEIGHT / 2.0 + 50.0),
        Vec2::new(SCENE_WIDTH / 2.0, PITCH_Y_BOWLER_END + PITCH_LENGTH + 100.0),
    ];
    raw.map(|p| {
        Vec2::new(
            p.x.clamp(FIELDER_RADIUS + 35.0, SCENE_WIDTH - FIELDER_RADIUS - 35.0),
            p.y.clamp(
                CROWD_AREA_HEIGHT + FIELDER_RADIUS + 5.0,
                SCENE_HEIGHT - FIELDER_RADIUS - 35.0,
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snaps_when_within_one_step() {
        let mut f = Fielder::new(Vec2::new(100.0, 100.0));
        f.start_move(Vec2::new(100.0 + FIELDER_SPEED * 0.5, 100.0));
        assert!(!f.advance());
        assert_eq!(f.pos, Vec2::new(100.0 + FIELDER_SPEED * 0.5, 100.0));
        assert!(!f.is_moving());
    }

    #[test]
    fn test_budget_forces_home() {
        let mut f = Fielder::new(Vec2::new(100.0, 100.0));
        // far enough that the budget expires mid-chase
        f.start_move(Vec2::new(100.0 + FIELDER_SPEED * FIELDER_MAX_MOVE_FRAMES as f32 * 4.0, 100.0));
        let mut ticks = 0;
        while f.advance() {
            ticks += 1;
        }
        assert_eq!(ticks, FIELDER_MAX_MOVE_FRAMES - 1);
        assert_eq!(f.pos, f.home);
        assert!(!f.is_moving());
    }

    #[test]
    fn test_reset_home_idempotent() {
        let mut f = Fielder::new(Vec2::new(300.0, 400.0));
        f.start_move(Vec2::new(500.0, 400.0));
        f.advance();
        f.reset_home();
        let snapshot = f.pos;
        f.reset_home();
        assert_eq!(f.pos, snapshot);
        assert_eq!(f.pos, f.home);
        assert!(!f.advance());
    }

    #[test]
    fn test_homes_inside_field() {
        for p in home_positions() {
            assert!(p.x >= FIELDER_RADIUS && p.x <= SCENE_WIDTH - FIELDER_RADIUS);
            assert!(p.y >= CROWD_AREA_HEIGHT && p.y <= SCENE_HEIGHT - FIELDER_RADIUS);
        }
    }

    proptest! {
        /// Every chase terminates within the budget, wherever the target is
        #[test]
        fn prop_chase_terminates(
            hx in 50.0f32..1200.0, hy in 150.0f32..700.0,
            tx in -500.0f32..1800.0, ty in -500.0f32..1200.0,
        ) {
            let mut f = Fielder::new(Vec2::new(hx, hy));
            f.start_move(Vec2::new(tx, ty));
            let mut ticks = 0u32;
            while f.advance() {
                ticks += 1;
                prop_assert!(ticks < FIELDER_MAX_MOVE_FRAMES);
            }
            prop_assert!(!f.is_moving());
        }
    }
}
