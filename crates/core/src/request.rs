//! Generation requests: typed selections and their string-form boundary

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chords::{ChordFamily, Difficulty, Key, Mode};
use crate::error::{Error, Result};
use crate::progression::{self, ChordPool, Progression, TransitionMatrix};

/// Non-empty, ordered set of chord families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySelection(Vec<ChordFamily>);

impl FamilySelection {
    /// Keeps the first occurrence of each family, in the order given.
    ///
    /// # Errors
    /// Returns `InvalidSelection` if no family is given.
    pub fn new(families: impl IntoIterator<Item = ChordFamily>) -> Result<Self> {
        let mut selected: Vec<ChordFamily> = Vec::new();
        for family in families {
            if !selected.contains(&family) {
                selected.push(family);
            }
        }

        if selected.is_empty() {
            return Err(Error::InvalidSelection(
                "Please select at least one chord family.".to_string(),
            ));
        }

        Ok(Self(selected))
    }

    pub fn families(&self) -> &[ChordFamily] {
        &self.0
    }
}

/// How the chord pool is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Training {
    Difficulty(Difficulty),
    Families(FamilySelection),
}

/// Range of chord counts offered to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeLimits {
    pub min_chords: usize,
    pub max_chords: usize,
    pub default_chords: usize,
}

impl Default for PracticeLimits {
    fn default() -> Self {
        Self {
            min_chords: 4,
            max_chords: 16,
            default_chords: 8,
        }
    }
}

impl PracticeLimits {
    /// Longest progression accepted outside the practice range.
    pub const MAX_CHORDS: usize = 4096;

    /// Accepts any count from one chord up to `MAX_CHORDS`.
    pub fn unrestricted() -> Self {
        Self {
            min_chords: 1,
            max_chords: Self::MAX_CHORDS,
            default_chords: 8,
        }
    }

    pub fn check(&self, num_chords: usize) -> Result<usize> {
        if num_chords < self.min_chords.max(1) || num_chords > self.max_chords {
            return Err(Error::InvalidSelection(format!(
                "number of chords must be between {} and {}, got {}",
                self.min_chords.max(1),
                self.max_chords,
                num_chords
            )));
        }
        Ok(num_chords)
    }
}

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionRequest {
    pub key: Key,
    pub mode: Mode,
    pub num_chords: usize,
    pub training: Training,
}

impl ProgressionRequest {
    pub fn new(key: Key, num_chords: usize, training: Training) -> Self {
        Self {
            key,
            mode: Mode::default(),
            num_chords,
            training,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds a fresh pool and matrix and walks them for `num_chords` steps.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Progression> {
        let pool = ChordPool::build(self.key, &self.training)?;
        let matrix = TransitionMatrix::build(pool.chords())?;
        let chords = progression::generate(pool.chords(), &matrix, self.num_chords, rng)?;

        Ok(Progression {
            key: self.key,
            mode: self.mode,
            chords,
            pool_size: pool.len(),
        })
    }
}

/// Flat, string-typed form of a request, as submitted by a form or JSON body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub training_type: String,
    #[serde(default)]
    pub num_chords: Option<usize>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub selected_families: Vec<String>,
}

impl GenerateParams {
    /// Validates the raw selection against `limits`.
    ///
    /// A missing `num_chords` falls back to `limits.default_chords`.
    pub fn to_request(&self, limits: &PracticeLimits) -> Result<ProgressionRequest> {
        let key: Key = self.key.parse()?;
        let mode: Mode = match self.mode.as_deref() {
            Some(mode) => mode.parse()?,
            None => Mode::default(),
        };
        let num_chords = limits.check(self.num_chords.unwrap_or(limits.default_chords))?;

        let training = match self.training_type.trim().to_lowercase().as_str() {
            "difficulty" => {
                let level = self.difficulty_level.as_deref().ok_or_else(|| {
                    Error::InvalidSelection("Please select a difficulty level.".to_string())
                })?;
                Training::Difficulty(level.parse()?)
            }
            "chord_family" | "chord family" => {
                let families = self
                    .selected_families
                    .iter()
                    .map(|name| name.parse::<ChordFamily>())
                    .collect::<Result<Vec<_>>>()?;
                Training::Families(FamilySelection::new(families)?)
            }
            other => {
                return Err(Error::UnknownOption(format!("training type '{}'", other)));
            }
        };

        Ok(ProgressionRequest {
            key,
            mode,
            num_chords,
            training,
        })
    }
}

/// Validates `params` and generates a progression with any chord count of one or more.
pub fn generate_progression<R: Rng + ?Sized>(
    params: &GenerateParams,
    rng: &mut R,
) -> Result<Progression> {
    params.to_request(&PracticeLimits::unrestricted())?.generate(rng)
}
