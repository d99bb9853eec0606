//! Keys, chord families and difficulty tiers

pub mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use tables::chords_for;

/// Tonal center a progression is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    F,
    B,
}

impl Key {
    /// All supported keys, in the order the practice form lists them.
    pub const ALL: [Key; 7] = [Key::C, Key::G, Key::D, Key::A, Key::E, Key::F, Key::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::F => "F",
            Key::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Key::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownOption(format!("key '{}'", trimmed)))
    }
}

/// Major or minor. Collected alongside the key but does not change the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            other => Err(Error::UnknownOption(format!("mode '{}'", other))),
        }
    }
}

/// Named category of chord types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordFamily {
    #[serde(rename = "Power Chords")]
    Power,
    #[serde(rename = "Seventh Chords Major")]
    SeventhMajor,
    #[serde(rename = "Extended Chords")]
    Extended,
    #[serde(rename = "Diminished & Augmented Chords")]
    DiminishedAugmented,
}

impl ChordFamily {
    pub const ALL: [ChordFamily; 4] = [
        ChordFamily::Power,
        ChordFamily::SeventhMajor,
        ChordFamily::Extended,
        ChordFamily::DiminishedAugmented,
    ];

    /// Short machine-friendly tag, accepted by `FromStr` alongside the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordFamily::Power => "power",
            ChordFamily::SeventhMajor => "seventh",
            ChordFamily::Extended => "extended",
            ChordFamily::DiminishedAugmented => "dim_aug",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChordFamily::Power => "Power Chords",
            ChordFamily::SeventhMajor => "Seventh Chords Major",
            ChordFamily::Extended => "Extended Chords",
            ChordFamily::DiminishedAugmented => "Diminished & Augmented Chords",
        }
    }
}

impl fmt::Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ChordFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ChordFamily::ALL
            .into_iter()
            .find(|family| {
                family.display_name().eq_ignore_ascii_case(trimmed)
                    || family.as_str().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| Error::UnknownOption(format!("chord family '{}'", trimmed)))
    }
}

/// Preset combination of chord families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }

    /// Families making up this tier, in concatenation order.
    pub fn families(&self) -> &'static [ChordFamily] {
        match self {
            Difficulty::Beginner => &[ChordFamily::Power],
            Difficulty::Intermediate => &[ChordFamily::Power, ChordFamily::SeventhMajor],
            Difficulty::Expert => &[
                ChordFamily::SeventhMajor,
                ChordFamily::Extended,
                ChordFamily::DiminishedAugmented,
            ],
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownOption(format!("difficulty '{}'", trimmed)))
    }
}
