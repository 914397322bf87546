//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the scanned track list, the current track index
//! and the playback/volume flags used by the UI and runtime. Navigation
//! clamps at the list boundaries; there is no wraparound.

use crate::audio::{AudioCmd, PlaybackHandle, clamp_volume};
use crate::library::Track;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    /// Index of the current track. Always within `[0, tracks.len() - 1]`
    /// for a non-empty library.
    pub current: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,

    pub volume: f32,
    pub volume_step: f32,

    pub current_dir: Option<String>,
}

impl App {
    /// Create a new `App` over the provided list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            volume: 1.0,
            volume_step: 0.1,
            current_dir: None,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }
    /// Record the music directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }
    /// Return true if the library contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }
    /// The currently selected track, if the library is non-empty.
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Index of the track after the current one, or `None` when already at
    /// the end of the list (or the list is empty). No wraparound.
    pub fn next_index(&self) -> Option<usize> {
        if self.current + 1 < self.tracks.len() {
            Some(self.current + 1)
        } else {
            None
        }
    }

    /// Index of the track before the current one, or `None` when already
    /// at the start of the list (or the list is empty). No wraparound.
    pub fn prev_index(&self) -> Option<usize> {
        if self.has_tracks() && self.current > 0 {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Move to the next track. Returns the new index, or `None` when the
    /// move was a boundary no-op.
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.next_index()?;
        self.current = next;
        Some(next)
    }

    /// Move to the previous track. Returns the new index, or `None` when
    /// the move was a boundary no-op.
    pub fn retreat(&mut self) -> Option<usize> {
        let prev = self.prev_index()?;
        self.current = prev;
        Some(prev)
    }

    /// Apply the play/pause transition and return the command to send to
    /// the audio thread, if any.
    ///
    /// Stopped starts the current track; Playing and Paused toggle.
    pub fn toggle_playback(&mut self) -> Option<AudioCmd> {
        match self.playback {
            PlaybackState::Stopped => {
                if self.has_tracks() {
                    self.playback = PlaybackState::Playing;
                    Some(AudioCmd::Play(self.current))
                } else {
                    None
                }
            }
            PlaybackState::Playing => {
                self.playback = PlaybackState::Paused;
                Some(AudioCmd::TogglePause)
            }
            PlaybackState::Paused => {
                self.playback = PlaybackState::Playing;
                Some(AudioCmd::TogglePause)
            }
        }
    }

    /// Raise the volume by one step, clamped to 1.0. Returns the new value.
    pub fn volume_up(&mut self) -> f32 {
        self.volume = clamp_volume(self.volume + self.volume_step);
        self.volume
    }

    /// Lower the volume by one step, clamped to 0.0. Returns the new value.
    pub fn volume_down(&mut self) -> f32 {
        self.volume = clamp_volume(self.volume - self.volume_step);
        self.volume
    }

    /// Sync `current` and `playback` from an audio-thread snapshot, so the
    /// UI follows auto-advance and end-of-list stops.
    pub fn sync_from_playback(&mut self, index: Option<usize>, playing: bool) {
        match index {
            Some(idx) => {
                if idx < self.tracks.len() {
                    self.current = idx;
                }
                self.playback = if playing {
                    PlaybackState::Playing
                } else {
                    PlaybackState::Paused
                };
            }
            None => {
                // Nothing loaded in the audio thread: stopped. Keep
                // `current` where it was so navigation resumes from there.
                self.playback = PlaybackState::Stopped;
            }
        }
    }
}
