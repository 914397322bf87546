use super::types::{PlaybackInfo, clamp_volume};
use std::time::Duration;

#[test]
fn clamp_volume_bounds() {
    assert_eq!(clamp_volume(0.5), 0.5);
    assert_eq!(clamp_volume(-0.1), 0.0);
    assert_eq!(clamp_volume(1.1), 1.0);
    assert_eq!(clamp_volume(0.0), 0.0);
    assert_eq!(clamp_volume(1.0), 1.0);
}

#[test]
fn playback_info_starts_idle() {
    let info = PlaybackInfo::default();
    assert_eq!(info.index, None);
    assert_eq!(info.elapsed, Duration::ZERO);
    assert_eq!(info.duration, None);
    assert!(!info.playing);
}
