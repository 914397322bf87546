use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and sync with the
/// audio thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Sync with the audio thread so the UI follows auto-advance and
        // end-of-list stops.
        // Clone the Arc handle to avoid borrowing `app` immutably across mutations.
        if let Some(handle) = app.playback_handle.as_ref().cloned() {
            if let Ok(info) = handle.lock() {
                let idx = info.index;
                let playing = info.playing;
                drop(info);
                app.sync_from_playback(idx, playing);
            }
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,

                    KeyCode::Char(' ') | KeyCode::Char('p') => {
                        if let Some(cmd) = app.toggle_playback() {
                            let _ = audio_player.send(cmd);
                        }
                    }

                    KeyCode::Char('l') | KeyCode::Right => {
                        // Past the last track the request is a no-op: index
                        // unchanged, playback untouched.
                        let was_playing = app.playback == PlaybackState::Playing;
                        if let Some(next) = app.advance() {
                            let cmd = if was_playing {
                                AudioCmd::Play(next)
                            } else {
                                AudioCmd::Load(next)
                            };
                            let _ = audio_player.send(cmd);
                        }
                    }

                    KeyCode::Char('h') | KeyCode::Left => {
                        let was_playing = app.playback == PlaybackState::Playing;
                        if let Some(prev) = app.retreat() {
                            let cmd = if was_playing {
                                AudioCmd::Play(prev)
                            } else {
                                AudioCmd::Load(prev)
                            };
                            let _ = audio_player.send(cmd);
                        }
                    }

                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        let v = app.volume_up();
                        let _ = audio_player.send(AudioCmd::SetVolume(v));
                    }

                    KeyCode::Char('-') | KeyCode::Char('_') => {
                        let v = app.volume_down();
                        let _ = audio_player.send(AudioCmd::SetVolume(v));
                    }

                    _ => {}
                }
            }
        }
    }

    Ok(())
}
