use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Duration from tag metadata, if the tags carried one.
    pub duration: Option<Duration>,
    pub display: String,
}

/// Build the one-line display string for a track: "Artist - Title" when an
/// artist is known, plain title otherwise.
pub fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title),
        _ => title.to_string(),
    }
}
