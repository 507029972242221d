//! QueryLens Core — error taxonomy, configuration.

pub mod config;
pub mod error;

pub use config::QueryLensConfig;
pub use error::{Error, Result};
