//! Core types for the Atende conversational front-end: configuration,
//! the company profile knowledge base, and per-session conversation state.

pub mod config;
pub mod profile;
pub mod session;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use profile::{CompanyProfile, ProfileMetadata, ProfileProvider, ProfileSource, Service};
pub use session::{Role, SessionStore, Turn, DEFAULT_SESSION_ID, MAX_TURNS};
