//! Configuration management for the webhook functions.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value reported in the reply's `source` field
    pub response_source: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            response_source: lookup("RESPONSE_SOURCE").filter(|s| !s.trim().is_empty()),
        }
    }
}
