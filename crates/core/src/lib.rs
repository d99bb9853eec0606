//! Chord Trainer Core Library
//!
//! Builds randomized chord progressions for guitar practice from fixed
//! chord-family tables and a uniform transition matrix.

pub mod chords;
pub mod error;
pub mod progression;
pub mod request;

pub use chords::{ChordFamily, Difficulty, Key, Mode};
pub use error::{Error, Result};
pub use progression::{ChordPool, Progression, TransitionMatrix};
pub use request::{
    generate_progression, FamilySelection, GenerateParams, PracticeLimits, ProgressionRequest,
    Training,
};
