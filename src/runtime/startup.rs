use crate::app::{App, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer, clamp_volume};
use crate::config;

pub fn apply_playback_defaults(
    app: &mut App,
    audio_player: &AudioPlayer,
    settings: &config::Settings,
) {
    app.volume = clamp_volume(settings.audio.initial_volume);
    app.volume_step = settings.audio.volume_step;
    let _ = audio_player.send(AudioCmd::SetVolume(app.volume));

    if !app.has_tracks() {
        return;
    }

    if settings.playback.autoplay {
        app.playback = PlaybackState::Playing;
        let _ = audio_player.send(AudioCmd::Play(app.current));
    } else {
        // Prime the first track paused so the duration and time labels are
        // populated before the user presses play.
        let _ = audio_player.send(AudioCmd::Load(app.current));
    }
}
