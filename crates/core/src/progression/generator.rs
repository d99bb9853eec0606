//! Random walk over a transition matrix

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::matrix::TransitionMatrix;
use crate::chords::{Key, Mode};
use crate::error::{Error, Result};

/// Upper bound on the slots reserved up front for a progression.
const MAX_PREALLOCATED: usize = 1024;

/// A generated chord progression together with the selection that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub key: Key,
    pub mode: Mode,
    pub chords: Vec<&'static str>,
    pub pool_size: usize,
}

impl Progression {
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chords joined with " - ", the way they are shown to the player.
    pub fn display(&self) -> String {
        self.chords.join(" - ")
    }
}

/// Generates `length` chords from `pool`.
///
/// The first chord is drawn uniformly from the pool, every following chord
/// by weighted sampling over the previous chord's row in `matrix`.
pub fn generate<'a, R: Rng + ?Sized>(
    pool: &[&'a str],
    matrix: &TransitionMatrix<'a>,
    length: usize,
    rng: &mut R,
) -> Result<Vec<&'a str>> {
    if length == 0 {
        return Err(Error::InvalidSelection(
            "a progression needs at least one chord".to_string(),
        ));
    }

    let mut current = *pool.choose(rng).ok_or(Error::EmptyPool)?;
    let mut progression = Vec::with_capacity(length.min(MAX_PREALLOCATED));
    progression.push(current);

    for _ in 1..length {
        let row = matrix.row(current).ok_or_else(|| {
            Error::InvalidSelection(format!("no transitions recorded for '{}'", current))
        })?;
        current = row.choose_weighted(rng, |t| t.weight)?.chord;
        progression.push(current);
    }

    debug!(length = progression.len(), pool = pool.len(), "generated progression");

    Ok(progression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const C_POWER: [&str; 7] = ["C5", "D5", "E5", "F5", "G5", "A5", "B5"];

    #[test]
    fn test_length_matches_request() {
        let matrix = TransitionMatrix::build(&C_POWER).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for length in [1, 2, 4, 8, 16, 50, 2000] {
            let progression = generate(&C_POWER, &matrix, length, &mut rng).unwrap();
            assert_eq!(progression.len(), length);
        }
    }

    #[test]
    fn test_no_adjacent_repeats_and_members_of_pool() {
        let matrix = TransitionMatrix::build(&C_POWER).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let progression = generate(&C_POWER, &matrix, 16, &mut rng).unwrap();
            assert!(progression.iter().all(|c| C_POWER.contains(c)));
            assert!(progression.windows(2).all(|pair| pair[0] != pair[1]));
        }
    }

    #[test]
    fn test_two_chord_pool_alternates() {
        let pool = ["Em7", "A7"];
        let matrix = TransitionMatrix::build(&pool).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let progression = generate(&pool, &matrix, 6, &mut rng).unwrap();
        for pair in progression.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_same_seed_same_progression() {
        let matrix = TransitionMatrix::build(&C_POWER).unwrap();

        let first = generate(&C_POWER, &matrix, 12, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = generate(&C_POWER, &matrix, 12, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let matrix = TransitionMatrix::build(&C_POWER).unwrap();
        let result = generate(&C_POWER, &matrix, 0, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::InvalidSelection(_))));
    }

    #[test]
    fn test_display_joins_chords() {
        let progression = Progression {
            key: Key::G,
            mode: Mode::Major,
            chords: vec!["G5", "D5", "E5"],
            pool_size: 7,
        };
        assert_eq!(progression.display(), "G5 - D5 - E5");
    }
}
