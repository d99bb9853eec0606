//! Server configuration

use std::env;

use chord_trainer_core::PracticeLimits;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub limits: PracticeLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            limits: PracticeLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Applies `CHORD_TRAINER_*` environment variables on top of `self`.
    ///
    /// Unparseable values are ignored. Limits that do not form a valid range
    /// fall back to the defaults.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = env::var("CHORD_TRAINER_ADDR") {
            self.addr = val;
        }
        if let Ok(val) = env::var("CHORD_TRAINER_MIN_CHORDS") {
            if let Ok(n) = val.parse::<usize>() {
                self.limits.min_chords = n;
            }
        }
        if let Ok(val) = env::var("CHORD_TRAINER_MAX_CHORDS") {
            if let Ok(n) = val.parse::<usize>() {
                self.limits.max_chords = n;
            }
        }
        if let Ok(val) = env::var("CHORD_TRAINER_DEFAULT_CHORDS") {
            if let Ok(n) = val.parse::<usize>() {
                self.limits.default_chords = n;
            }
        }

        if !limits_are_valid(&self.limits) {
            warn!(limits = ?self.limits, "invalid chord limits, using defaults");
            self.limits = PracticeLimits::default();
        }

        self
    }
}

fn limits_are_valid(limits: &PracticeLimits) -> bool {
    limits.min_chords >= 1
        && limits.min_chords <= limits.max_chords
        && (limits.min_chords..=limits.max_chords).contains(&limits.default_chords)
}
