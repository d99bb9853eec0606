//! Chord pool, transition matrix and progression generation

pub mod generator;
pub mod matrix;
pub mod pool;

pub use generator::{generate, Progression};
pub use matrix::{Transition, TransitionMatrix};
pub use pool::ChordPool;
