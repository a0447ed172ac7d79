//! Library persistence: the storage contract and the JSON file store.

mod json;
mod types;

pub use json::*;
pub use types::*;

#[cfg(test)]
mod tests;
