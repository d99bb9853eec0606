//! Uniform transition matrix over a chord pool

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Candidate next chord and its probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<'a> {
    pub chord: &'a str,
    pub weight: f64,
}

/// Maps each chord name in a pool to a distribution over the chords that may follow it.
///
/// # Invariants
/// - A chord never transitions to itself
/// - The weights of every row sum to 1
/// - Each occurrence of another chord in the pool carries the same weight, so a
///   name appearing twice in the pool is twice as likely as one appearing once
#[derive(Debug, Clone)]
pub struct TransitionMatrix<'a> {
    rows: HashMap<&'a str, Vec<Transition<'a>>>,
}

impl<'a> TransitionMatrix<'a> {
    /// Builds the matrix for `chords`.
    ///
    /// # Errors
    /// Returns `InvalidSelection` if the pool has fewer than two chords, or
    /// fewer than two distinct chord names.
    pub fn build(chords: &[&'a str]) -> Result<Self> {
        if chords.len() < 2 {
            return Err(Error::InvalidSelection(format!(
                "at least two chords are needed to build transitions, got {}",
                chords.len()
            )));
        }

        let mut rows: HashMap<&'a str, Vec<Transition<'a>>> = HashMap::new();

        for &source in chords {
            if rows.contains_key(source) {
                continue;
            }

            let candidates: Vec<&'a str> = chords.iter().copied().filter(|c| *c != source).collect();
            if candidates.is_empty() {
                return Err(Error::InvalidSelection(format!(
                    "'{}' has no other chord to move to",
                    source
                )));
            }

            let weight = 1.0 / candidates.len() as f64;
            let mut row: Vec<Transition<'a>> = Vec::with_capacity(candidates.len());
            for chord in candidates {
                match row.iter_mut().find(|t| t.chord == chord) {
                    Some(existing) => existing.weight += weight,
                    None => row.push(Transition { chord, weight }),
                }
            }

            rows.insert(source, row);
        }

        Ok(Self { rows })
    }

    /// Outgoing transitions of `chord`, in pool order.
    pub fn row(&self, chord: &str) -> Option<&[Transition<'a>]> {
        self.rows.get(chord).map(Vec::as_slice)
    }

    /// Number of distinct source chords.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
