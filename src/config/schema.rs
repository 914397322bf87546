use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segue/config.toml` or `~/.config/segue/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGUE_`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume when the player starts, in [0.0, 1.0].
    pub initial_volume: f32,
    /// How much one volume key press changes the volume.
    pub volume_step: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_step: 0.1,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether the first track starts playing on launch.
    ///
    /// Off by default: the first track is loaded paused so the duration
    /// and time labels are primed before the user presses play.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { autoplay: false }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Show remaining time (`-MM:SS`) instead of the total duration on the
    /// right-hand time label.
    pub show_remaining: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ segue: one track after another ~ ".to_string(),
            show_remaining: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories. Off by default: the player
    /// lists a single directory.
    pub recursive: bool,
    /// Optional cap on directory recursion depth (used when `recursive`).
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: false,
            max_depth: None,
        }
    }
}
