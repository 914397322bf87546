//! Audio-related small types and handles.
//!
//! This module defines the command enum sent to the audio thread, the
//! playback info snapshot shared with the UI, and the volume clamp.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the track at the given index.
    Play(usize),
    /// Load the track at the given index but keep it paused.
    ///
    /// Used when navigating while paused/stopped: the duration and time
    /// labels refresh without starting playback.
    Load(usize),
    /// Toggle pause/resume.
    TogglePause,
    /// Stop playback immediately.
    Stop,
    /// Set the playback volume (clamped to [0.0, 1.0]).
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Currently loaded track index in the library (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total duration of the current track, once known.
    ///
    /// Primed from tag metadata when the track loads; backfilled from the
    /// decoder when the tags carried none. `None` means "not yet known":
    /// the progress fraction stays at zero until it resolves.
    pub duration: Option<Duration>,
    /// Whether playback is currently active.
    pub playing: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            duration: None,
            playing: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

/// Clamp a volume value to the supported [0.0, 1.0] range.
pub fn clamp_volume(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
