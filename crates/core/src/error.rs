//! Error types for chord-trainer-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("No valid chords found for the selected inputs.")]
    EmptyPool,

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Weighted sampling failed: {0}")]
    Sampling(#[from] rand::distr::weighted::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
