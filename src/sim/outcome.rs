//! Delivery outcomes and the replay log
//!
//! The outcome type is decided once, here at the ingestion boundary. The
//! rest of the simulation matches on the tagged variant and never re-inspects
//! raw log text.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of a single delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOutcome {
    /// Runs off the bat; upstream logs carry 0-4 and 6
    Runs(u8),
    /// Batsman bowled out
    Wicket,
}

impl DeliveryOutcome {
    /// Parse one log token ("0".."6", "wicket"), case-insensitive.
    /// Returns None for anything outside the valid outcome set.
    pub fn parse(token: &str) -> Option<Self> {
        let t = token.trim().to_ascii_lowercase();
        if t == "wicket" {
            return Some(Self::Wicket);
        }
        match t.parse::<u8>().ok()? {
            r @ (0..=4 | 6) => Some(Self::Runs(r)),
            _ => None,
        }
    }

    /// Runs credited to the batting side
    pub fn runs(&self) -> u32 {
        match self {
            Self::Runs(r) => u32::from(*r),
            Self::Wicket => 0,
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, Self::Wicket)
    }

    /// True for a non-dismissal delivery; these arm the fielders
    /// (a dot ball still has the field walk in)
    pub fn sends_fielders(&self) -> bool {
        matches!(self, Self::Runs(_))
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runs(r) => write!(f, "{r}"),
            Self::Wicket => write!(f, "wicket"),
        }
    }
}

/// A log token the parser refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogError {
    pub token: String,
    pub position: usize,
}

impl fmt::Display for ParseLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid outcome {:?} at position {} (expected 0-4, 6 or \"wicket\")",
            self.token, self.position
        )
    }
}

impl std::error::Error for ParseLogError {}

/// Ordered sequence of delivery outcomes with a monotone replay cursor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutcomeLog {
    entries: Vec<DeliveryOutcome>,
    cursor: usize,
}

impl OutcomeLog {
    pub fn new(entries: Vec<DeliveryOutcome>) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Parse a comma-separated log, e.g. "0,1,wicket,4".
    /// The whole log is rejected on the first bad token.
    pub fn parse(text: &str) -> Result<Self, ParseLogError> {
        let mut entries = Vec::new();
        for (position, token) in text.split(',').enumerate() {
            match DeliveryOutcome::parse(token) {
                Some(outcome) => entries.push(outcome),
                None => {
                    return Err(ParseLogError {
                        token: token.trim().to_string(),
                        position,
                    });
                }
            }
        }
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based index of the delivery being replayed
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Outcome under the cursor; None once the log is exhausted
    pub fn current(&self) -> Option<DeliveryOutcome> {
        self.entries.get(self.cursor).copied()
    }

    /// Move to the next delivery. Saturates at one past the end.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1).min(self.entries.len());
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// Rewind to the first delivery; only a full match reset does this
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn entries(&self) -> &[DeliveryOutcome] {
        &self.entries
    }
}

/// Weighted 20-delivery sample log for demo mode.
/// Weights (percent): 0:30 1:20 2:10 3:10 4:15 6:10 wicket:5.
pub fn generate_demo_log<R: Rng>(rng: &mut R) -> OutcomeLog {
    const CHOICES: [(DeliveryOutcome, u32); 7] = [
        (DeliveryOutcome::Runs(0), 30),
        (DeliveryOutcome::Runs(1), 20),
        (DeliveryOutcome::Runs(2), 10),
        (DeliveryOutcome::Runs(3), 10),
        (DeliveryOutcome::Runs(4), 15),
        (DeliveryOutcome::Runs(6), 10),
        (DeliveryOutcome::Wicket, 5),
    ];

    let entries = (0..20)
        .map(|_| {
            let mut roll = rng.random_range(0..100u32);
            for (outcome, weight) in CHOICES {
                if roll < weight {
                    return outcome;
                }
                roll -= weight;
            }
            DeliveryOutcome::Runs(0)
        })
        .collect();
    OutcomeLog::new(entries)
}
