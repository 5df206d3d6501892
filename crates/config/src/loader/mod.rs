//! Configuration loading.
//!
//! Responsibilities:
//! - Merge explicit values, environment tunables and the credential chain.
//! - Load `.env` files.
//!
//! Does NOT handle:
//! - Persisting configuration (see `persistence`).

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
