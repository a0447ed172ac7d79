//! Configuration loader and schema types.
//!
//! The schema drives scanning, playback defaults and storage paths; the
//! loader combines a TOML file with environment overrides.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
