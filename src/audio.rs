//! Audio playback subsystem.
//!
//! Playback runs on a dedicated thread that owns the `rodio` output
//! stream and serves commands sent from the UI. Progress is published
//! through a shared [`PlaybackInfo`] handle the UI polls every frame.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo, clamp_volume};

#[cfg(test)]
mod tests;
