//! Scoreboard bookkeeping

use serde::{Deserialize, Serialize};

use crate::sim::outcome::DeliveryOutcome;

/// Running totals for the innings plus the last-ball caption shown on the
/// scoreboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProgress {
    pub runs: u32,
    pub wickets: u32,
    pub balls: u32,
    pub last_ball: String,
}

impl Default for MatchProgress {
    fn default() -> Self {
        Self {
            runs: 0,
            wickets: 0,
            balls: 0,
            last_ball: "-".to_string(),
        }
    }
}

impl MatchProgress {
    /// Fold one completed delivery into the totals
    pub fn record(&mut self, outcome: DeliveryOutcome) {
        self.balls += 1;
        match outcome {
            DeliveryOutcome::Runs(r) => {
                self.runs += u32::from(r);
                self.last_ball = r.to_string();
            }
            DeliveryOutcome::Wicket => {
                self.wickets += 1;
                self.last_ball = "WICKET!".to_string();
            }
        }
    }

    pub fn overs_completed(&self) -> u32 {
        self.balls / 6
    }

    pub fn balls_this_over(&self) -> u32 {
        self.balls % 6
    }

    pub fn mark_match_over(&mut self) {
        self.last_ball = "Match Over".to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_a_short_innings() {
        let mut p = MatchProgress::default();
        assert_eq!(p.last_ball, "-");

        for o in [
            DeliveryOutcome::Runs(0),
            DeliveryOutcome::Runs(1),
            DeliveryOutcome::Runs(4),
            DeliveryOutcome::Wicket,
            DeliveryOutcome::Runs(6),
        ] {
            p.record(o);
        }
        assert_eq!(p.runs, 11);
        assert_eq!(p.wickets, 1);
        assert_eq!(p.balls, 5);
        assert_eq!(p.overs_completed(), 0);
        assert_eq!(p.balls_this_over(), 5);
        assert_eq!(p.last_ball, "6");
    }

    #[test]
    fn test_over_arithmetic() {
        let mut p = MatchProgress::default();
        for _ in 0..8 {
            p.record(DeliveryOutcome::Runs(1));
        }
        assert_eq!(p.overs_completed(), 1);
        assert_eq!(p.balls_this_over(), 2);
    }

    #[test]
    fn test_wicket_caption_and_reset() {
        let mut p = MatchProgress::default();
        p.record(DeliveryOutcome::Wicket);
        assert_eq!(p.last_ball, "WICKET!");
        p.mark_match_over();
        assert_eq!(p.last_ball, "Match Over");
        p.reset();
        assert_eq!(p.balls, 0);
        assert_eq!(p.last_ball, "-");
    }
}
