//! Application module: the engine aggregate a host embeds.
//!
//! `App` in `app::model` ties the library, playback controller and injected
//! storage together and owns the scan lifecycle and status line.

mod model;

pub use model::*;
