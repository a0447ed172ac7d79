//! Music library: track records and the merged, ordered collection.
//!
//! `Library` in `library::model` owns the deduplicated track list;
//! `library::order` holds the composite sort it is kept in.

mod model;
mod order;

pub use model::*;
pub use order::*;
