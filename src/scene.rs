//! Drawable scene description
//!
//! `build` flattens the current match state into plain draw data: rects,
//! circles and text, all in scene pixels. The rendering host walks the
//! scene top to bottom and draws it with whatever backend it has; nothing
//! here touches a graphics API.

use glam::Vec2;
use serde::Serialize;

use crate::config::{Color, MatchConfig};
use crate::consts::*;
use crate::sim::{ExcitementLevel, MatchState, Phase, StumpScatter};

/// Shirt colors cycled through the crowd by `color_index`
pub const CROWD_PALETTE: [Color; 6] = [
    Color::rgb(0xE0, 0x5A, 0x47),
    Color::rgb(0x47, 0x6F, 0xE0),
    Color::rgb(0x4F, 0xB0, 0x6D),
    Color::rgb(0xE0, 0xC2, 0x4A),
    Color::rgb(0xEE, 0xEE, 0xEE),
    Color::rgb(0xB0, 0x62, 0xC9),
];

/// Fixed ground markings, identical every tick
#[derive(Debug, Clone, Serialize)]
pub struct StaticGeometry {
    /// Pitch strip (x, y, w, h)
    pub pitch: (f32, f32, f32, f32),
    /// Popping crease lines as ((x1, y1), (x2, y2))
    pub creases: [((f32, f32), (f32, f32)); 2],
    /// Grass / boundary rect below the crowd band
    pub field: (f32, f32, f32, f32),
    /// Crowd band along the top
    pub stands: (f32, f32, f32, f32),
}

impl StaticGeometry {
    fn new() -> Self {
        let crease_x0 = PITCH_X + PITCH_WIDTH / 2.0 - CREASE_LENGTH / 2.0;
        let crease_x1 = crease_x0 + CREASE_LENGTH;
        Self {
            pitch: (PITCH_X, PITCH_Y_BOWLER_END, PITCH_WIDTH, PITCH_LENGTH),
            creases: [
                (
                    (crease_x0, POPPING_CREASE_Y_BOWLER),
                    (crease_x1, POPPING_CREASE_Y_BOWLER),
                ),
                (
                    (crease_x0, POPPING_CREASE_Y_BATSMAN),
                    (crease_x1, POPPING_CREASE_Y_BATSMAN),
                ),
            ],
            field: (
                0.0,
                CROWD_AREA_HEIGHT,
                SCENE_WIDTH,
                SCENE_HEIGHT - CROWD_AREA_HEIGHT,
            ),
            stands: (0.0, 0.0, SCENE_WIDTH, CROWD_AREA_HEIGHT),
        }
    }
}

/// A player disc with one rotating limb (bowling arm or bat)
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Limb angle in degrees; None draws the disc alone
    pub limb_angle: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallSprite {
    pub pos: Vec2,
    pub radius: f32,
}

/// Elliptical shadow cue under the ball in flight
#[derive(Debug, Clone, Serialize)]
pub struct ShadowSprite {
    pub pos: Vec2,
    pub rx: f32,
    pub ry: f32,
    /// 0..=1
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StumpSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees; nonzero only when disturbed
    pub lean: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrowdSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Scoreboard text, preformatted so every host renders the same strings
#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardView {
    /// "India: 42 / 3"
    pub score_line: String,
    /// "Overs: 2.4 / 5"
    pub overs_line: String,
    /// "Last ball: 4"
    pub last_ball_line: String,
    /// "India (Bat) vs Australia (Bowl)"
    pub teams_line: String,
}

/// One frame of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub geometry: StaticGeometry,
    pub crowd: Vec<CrowdSprite>,
    pub bowler: PlayerSprite,
    pub batsman: PlayerSprite,
    pub fielders: Vec<PlayerSprite>,
    pub stumps_bowler_end: [StumpSprite; 3],
    pub stumps_batsman_end: [StumpSprite; 3],
    pub shadow: Option<ShadowSprite>,
    pub ball: Option<BallSprite>,
    pub scoreboard: ScoreboardView,
    pub caption: String,
}

/// Flatten `state` into a drawable scene
pub fn build(state: &MatchState, config: &MatchConfig) -> Scene {
    Scene {
        geometry: StaticGeometry::new(),
        crowd: crowd_sprites(state),
        bowler: PlayerSprite {
            pos: state.bowler.pos,
            radius: PLAYER_RADIUS,
            color: config.bowling.color,
            limb_angle: Some(state.bowler.arm_angle),
        },
        batsman: PlayerSprite {
            pos: state.batsman.pos,
            radius: PLAYER_RADIUS,
            color: config.batting.color,
            limb_angle: Some(state.batsman.bat_angle),
        },
        fielders: state
            .fielders
            .iter()
            .map(|f| PlayerSprite {
                pos: f.pos,
                radius: FIELDER_RADIUS,
                color: config.bowling.color,
                limb_angle: None,
            })
            .collect(),
        stumps_bowler_end: stumps(STUMPS_LINE_Y_BOWLER, None),
        stumps_batsman_end: stumps(
            STUMPS_LINE_Y_BATSMAN,
            state.stumps_hit.then_some(&state.stump_scatter),
        ),
        shadow: shadow_sprite(state),
        ball: state.ball.visible.then(|| BallSprite {
            pos: state.ball.pos,
            radius: BALL_RADIUS,
        }),
        scoreboard: scoreboard_view(state, config),
        caption: state.caption.clone(),
    }
}

fn crowd_sprites(state: &MatchState) -> Vec<CrowdSprite> {
    state
        .crowd
        .members
        .iter()
        .map(|m| {
            let base_y = m.y * CROWD_AREA_HEIGHT;
            CrowdSprite {
                x: m.x,
                y: base_y - m.height + state.crowd.member_offset(m),
                width: m.width,
                height: m.height,
                color: CROWD_PALETTE[m.color_index % CROWD_PALETTE.len()],
            }
        })
        .collect()
}

fn stumps(line_y: f32, scatter: Option<&[StumpScatter; 3]>) -> [StumpSprite; 3] {
    let xc = PITCH_X + PITCH_WIDTH / 2.0;
    let xs = [
        xc - STUMPS_GAP - STUMP_WIDTH / 2.0,
        xc - STUMP_WIDTH / 2.0,
        xc + STUMPS_GAP - STUMP_WIDTH / 2.0,
    ];
    let mut i = 0;
    xs.map(|x| {
        let s = match scatter {
            Some(sc) => {
                let sc = sc[i];
                StumpSprite {
                    x: x + sc.lean_x,
                    y: line_y - STUMP_HEIGHT + sc.extra_drop,
                    width: STUMP_WIDTH,
                    height: STUMP_HEIGHT,
                    lean: if sc.toppled { 75.0 } else { sc.lean_x * 4.0 },
                }
            }
            None => StumpSprite {
                x,
                y: line_y - STUMP_HEIGHT,
                width: STUMP_WIDTH,
                height: STUMP_HEIGHT,
                lean: 0.0,
            },
        };
        i += 1;
        s
    })
}

fn shadow_sprite(state: &MatchState) -> Option<ShadowSprite> {
    if !state.ball.visible || state.phase != Phase::BallTravel {
        return None;
    }
    let plane_y = STUMPS_LINE_Y_BATSMAN - 5.0;
    let height = (plane_y - state.ball.pos.y).max(0.0);
    let max_height = PITCH_LENGTH / 3.0;
    let size_scale = (1.0 - height / max_height).max(0.0);
    let rx = BALL_RADIUS * (0.8 + 0.7 * size_scale);
    let ry = (rx * 0.5).max(1.0);
    let alpha = (100.0 / 255.0) * (1.0 - height / (max_height * 1.5)).clamp(0.1, 1.0);
    Some(ShadowSprite {
        pos: Vec2::new(state.ball.pos.x, plane_y),
        rx,
        ry,
        alpha,
    })
}

fn scoreboard_view(state: &MatchState, config: &MatchConfig) -> ScoreboardView {
    let max_overs = state.log.len().div_ceil(6);
    ScoreboardView {
        score_line: format!(
            "{}: {} / {}",
            config.batting.name, state.progress.runs, state.progress.wickets
        ),
        overs_line: format!(
            "Overs: {}.{} / {}",
            state.progress.overs_completed(),
            state.progress.balls_this_over(),
            max_overs
        ),
        last_ball_line: format!("Last ball: {}", state.progress.last_ball),
        teams_line: format!(
            "{} (Bat) vs {} (Bowl)",
            config.batting.name, config.bowling.name
        ),
    }
}

/// True while the scene should pulse the caption (boundary or wicket hold)
pub fn caption_highlight(state: &MatchState) -> bool {
    state.crowd.level() == ExcitementLevel::High
}
