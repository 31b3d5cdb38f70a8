//! Pitchside - a deterministic 2D replay of cricket deliveries
//!
//! Core modules:
//! - `sim`: deterministic simulation (delivery phase machine, ball physics,
//!   actor pose clips, fielding, crowd, scoring)
//! - `scene`: per-tick drawable scene description for the rendering host
//! - `config`: match handoff data from the upstream match simulator

pub mod config;
pub mod scene;
pub mod sim;

pub use config::{Color, MatchConfig, TeamInfo};

/// Scene geometry and animation timing constants
pub mod consts {
    /// Fixed tick rate; one tick = one rendered frame
    pub const FPS: u32 = 60;

    /// Logical scene dimensions (pixels)
    pub const SCENE_WIDTH: f32 = 1280.0;
    pub const SCENE_HEIGHT: f32 = 720.0;

    /// Pitch strip, running top (bowler's end) to bottom (batsman's end)
    pub const PITCH_WIDTH: f32 = 60.0;
    pub const PITCH_LENGTH: f32 = 400.0;
    pub const PITCH_X: f32 = SCENE_WIDTH / 2.0 - PITCH_WIDTH / 2.0;
    pub const PITCH_Y_BOWLER_END: f32 = SCENE_HEIGHT * 0.25;
    pub const PITCH_Y_BATSMAN_END: f32 = PITCH_Y_BOWLER_END + PITCH_LENGTH;
    pub const CREASE_LENGTH: f32 = PITCH_WIDTH + 20.0;
    pub const POPPING_CREASE_Y_BOWLER: f32 = PITCH_Y_BOWLER_END + PITCH_LENGTH * 0.1;
    pub const POPPING_CREASE_Y_BATSMAN: f32 = PITCH_Y_BATSMAN_END - PITCH_LENGTH * 0.1;
    pub const STUMPS_LINE_Y_BOWLER: f32 = PITCH_Y_BOWLER_END + PITCH_LENGTH * 0.05;
    pub const STUMPS_LINE_Y_BATSMAN: f32 = PITCH_Y_BATSMAN_END - PITCH_LENGTH * 0.05;
    pub const STUMP_HEIGHT: f32 = 25.0;
    pub const STUMP_WIDTH: f32 = 3.0;
    pub const STUMPS_GAP: f32 = 5.0;

    /// Actor sizes
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const FIELDER_RADIUS: f32 = 12.0;
    pub const BALL_RADIUS: f32 = 5.0;

    /// Bowler animation budgets
    pub const BOWLER_RUNUP_OFFSET: f32 = 80.0;
    pub const BOWLER_RUNUP_FRAMES: u32 = 15;
    /// Five key poses, three ticks each
    pub const BOWLER_ACTION_FRAMES: u32 = 15;

    /// Ball flight
    pub const BALL_TRAVEL_FRAMES: u32 = 25;
    pub const BALL_GRAVITY: f32 = 0.3;
    /// Restitution applied to vertical velocity at the bounce plane
    pub const BALL_BOUNCE_FACTOR: f32 = -0.6;
    /// The bounce plane is met at total_frames / this (~45% of flight)
    pub const BALL_BOUNCE_TIME_DIVISOR: f32 = 2.2;
    /// Launch floor when the vertical solve degenerates to zero
    pub const BALL_MIN_LAUNCH_VY: f32 = -2.0;
    /// How far up the pitch from the batsman's stumps the ball bounces
    pub const PITCH_BOUNCE_POINT_OFFSET: f32 = PITCH_LENGTH * 0.25;

    /// Batsman swing budget
    pub const BATSMAN_ACTION_FRAMES: u32 = 15;

    /// Fielder motion
    pub const NUM_FIELDERS: usize = 9;
    pub const FIELDER_SPEED: f32 = 1.5;
    pub const FIELDER_MAX_MOVE_FRAMES: u32 = FPS / 2;
    pub const FIELDER_TARGET_JITTER: f32 = 25.0;

    /// Crowd band along the top of the scene
    pub const CROWD_AREA_HEIGHT: f32 = SCENE_HEIGHT * 0.20;
    pub const CROWD_SIZE: usize = 150;
    pub const CROWD_REACTION_FRAMES: u32 = FPS * 2;
    /// Global phase clock increment per tick
    pub const CROWD_PHASE_STEP: f32 = 0.15;

    /// Hold on the outcome caption between deliveries
    pub const INTER_BALL_PAUSE_FRAMES: u32 = FPS * 2;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
