//! Chord pool construction

use tracing::debug;

use crate::chords::{chords_for, ChordFamily, Key};
use crate::error::{Error, Result};
use crate::request::Training;

/// Chords eligible for one generation request, all drawn from a single key.
///
/// Families are concatenated in the order given. Repeated chord names are
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordPool {
    key: Key,
    chords: Vec<&'static str>,
}

impl ChordPool {
    pub fn build(key: Key, training: &Training) -> Result<Self> {
        match training {
            Training::Difficulty(difficulty) => Self::from_families(key, difficulty.families()),
            Training::Families(selection) => Self::from_families(key, selection.families()),
        }
    }

    pub fn from_families(key: Key, families: &[ChordFamily]) -> Result<Self> {
        if families.is_empty() {
            return Err(Error::InvalidSelection(
                "Please select at least one chord family.".to_string(),
            ));
        }

        let chords: Vec<&'static str> = families
            .iter()
            .flat_map(|family| chords_for(*family, key).iter().copied())
            .collect();

        if chords.is_empty() {
            return Err(Error::EmptyPool);
        }

        debug!(key = %key, families = families.len(), size = chords.len(), "built chord pool");

        Ok(Self { key, chords })
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn chords(&self) -> &[&'static str] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn contains(&self, chord: &str) -> bool {
        self.chords.iter().any(|c| *c == chord)
    }
}
