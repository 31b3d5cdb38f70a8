//! Deterministic replay simulation
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; every counter is a tick count, never wall time
//! - Seeded RNG only, owned by the match state
//! - No rendering or platform dependencies

pub mod ball;
pub mod batsman;
pub mod bowler;
pub mod crowd;
pub mod fielder;
pub mod outcome;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::Projectile;
pub use batsman::{Batsman, ClipKind};
pub use bowler::Bowler;
pub use crowd::{Crowd, CrowdMember, ExcitementLevel};
pub use fielder::Fielder;
pub use outcome::{generate_demo_log, DeliveryOutcome, OutcomeLog, ParseLogError};
pub use score::MatchProgress;
pub use state::{MatchState, Phase, StumpScatter};
pub use tick::tick;
