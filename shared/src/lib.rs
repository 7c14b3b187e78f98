//! Shared library for the tour guide assistant webhooks.
//!
//! This crate provides the webhook wire types, the assistant reply capability,
//! and the HTTP helpers used by the webhook functions.

pub mod assistant;
pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use assistant::{handle_request, ActionHandler, ActionMap, ApiAiAssistant, Responder};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{ApiAiRequest, ApiAiResponse, ApiAiResult};
