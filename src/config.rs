//! Match handoff configuration
//!
//! The upstream match simulator hands over team display info and a replay
//! seed as JSON. Values are validated here, at the ingestion boundary; the
//! simulation core never sees malformed input.

use serde::{Deserialize, Serialize};

/// RGB display color, serialized as "#RRGGBB"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color {s:?}, expected \"#RRGGBB\""))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_hex()
    }
}

/// Display name and shirt color for one side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub color: Color,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Everything the replay needs from the upstream simulator besides the
/// outcome log itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Side shown batting
    pub batting: TeamInfo,
    /// Side shown bowling and fielding
    pub bowling: TeamInfo,
    /// Replay seed; drives fielder choices, crowd traits and stump scatter
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    0x5eed
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Built-in pairing for the no-argument demo mode
    pub fn demo() -> Self {
        Self {
            batting: TeamInfo::new("India", Color::rgb(0, 0, 255)),
            bowling: TeamInfo::new("Australia", Color::rgb(255, 255, 0)),
            seed: default_seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_roundtrip() {
        let c = Color::from_hex("#1A2B3C").unwrap();
        assert_eq!(c, Color::rgb(0x1A, 0x2B, 0x3C));
        assert_eq!(c.to_hex(), "#1A2B3C");
        // prefix optional
        assert_eq!(Color::from_hex("1a2b3c"), Some(c));
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#1234567"), None);
    }

    #[test]
    fn test_config_from_json() {
        let json = r##"{
            "batting": { "name": "India", "color": "#0000FF" },
            "bowling": { "name": "England", "color": "#C80000" },
            "seed": 42
        }"##;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.batting.name, "India");
        assert_eq!(config.bowling.color, Color::rgb(0xC8, 0, 0));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_config_seed_defaults() {
        let json = r##"{
            "batting": { "name": "A", "color": "#000000" },
            "bowling": { "name": "B", "color": "#FFFFFF" }
        }"##;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.seed, default_seed());
    }
}
