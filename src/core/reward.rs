//! Color rewards.
//!
//! Each light event carries a color and the points it is worth when
//! hit. The standard table is a fixed ordered set of four entries;
//! games wanting different economies can supply their own table.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// The four cue colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Yellow,
}

impl ColorId {
    /// Human-readable name (for debugging/display).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Blue => "blue",
            ColorId::Yellow => "yellow",
        }
    }

    /// CSS hex value renderers may use for this color.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            ColorId::Red => "#e74c3c",
            ColorId::Green => "#2ecc71",
            ColorId::Blue => "#3498db",
            ColorId::Yellow => "#f1c40f",
        }
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A color paired with the points it scores when hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReward {
    pub color: ColorId,
    pub points: u32,
}

impl ColorReward {
    /// Create a new reward. Points must be positive.
    #[must_use]
    pub fn new(color: ColorId, points: u32) -> Self {
        assert!(points > 0, "Reward points must be positive");
        Self { color, points }
    }
}

/// Ordered set of rewards a light event picks from.
///
/// Selection is uniform and memoryless: the same entry may repeat on
/// consecutive light events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    entries: Vec<ColorReward>,
}

impl RewardTable {
    /// The standard four-entry table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            ColorReward::new(ColorId::Red, 10),
            ColorReward::new(ColorId::Green, 20),
            ColorReward::new(ColorId::Blue, 30),
            ColorReward::new(ColorId::Yellow, 50),
        ])
    }

    /// Create a custom table. Must not be empty.
    #[must_use]
    pub fn new(entries: Vec<ColorReward>) -> Self {
        assert!(!entries.is_empty(), "Reward table must not be empty");
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A table is never empty; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, in table order.
    #[must_use]
    pub fn entries(&self) -> &[ColorReward] {
        &self.entries
    }

    /// Pick an entry uniformly at random.
    #[must_use]
    pub fn pick(&self, rng: &mut dyn RandomSource) -> ColorReward {
        self.entries[rng.pick(self.entries.len())]
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}
