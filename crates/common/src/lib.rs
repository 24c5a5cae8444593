//! Shared config and error definitions for the Mykro impact model.

pub mod config;
pub mod error;

pub use config::ModelInputs;
pub use error::Error;

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
