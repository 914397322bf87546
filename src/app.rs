//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the track list, the
//! current index and playback/volume state.

mod model;

pub use model::*;
