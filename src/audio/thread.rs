use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::Track;

use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle, clamp_volume};

const TICK: Duration = Duration::from_millis(250);

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut sink: Option<Sink> = None;
        let mut volume = clamp_volume(audio_settings.initial_volume);

        // Spawn a ticker thread to update playback_info.elapsed periodically.
        // Elapsed never runs past the known duration, so the progress
        // fraction stays within [0, 1].
        let info_for_ticker = playback_info.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(TICK);
                let mut info = info_for_ticker.lock().unwrap();
                if info.playing {
                    info.elapsed += TICK;
                    if let Some(total) = info.duration {
                        if info.elapsed > total {
                            info.elapsed = total;
                        }
                    }
                }
            }
        });

        fn do_load(
            i: usize,
            start_playing: bool,
            stream: &rodio::OutputStream,
            tracks: &[Track],
            sink: &mut Option<Sink>,
            index: &mut Option<usize>,
            paused: &mut bool,
            volume: f32,
            playback_info: &PlaybackHandle,
        ) {
            if let Some(s) = sink.as_ref() {
                s.stop();
            }

            let track = &tracks[i];
            let (new_sink, decoded_duration) = match create_sink(stream, track) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("cannot load track: {e}");
                    do_stop(sink, index, paused, playback_info);
                    return;
                }
            };

            new_sink.set_volume(volume);
            if start_playing {
                new_sink.play();
            }
            *sink = Some(new_sink);
            *index = Some(i);
            *paused = !start_playing;

            // Tag duration wins; the decoder fills in when tags had none.
            let duration = track.duration.or(decoded_duration);

            if let Ok(mut info) = playback_info.lock() {
                info.index = Some(i);
                info.elapsed = Duration::ZERO;
                info.duration = duration;
                info.playing = start_playing;
            }
            log::info!(
                "loaded track {i} ({}), playing={start_playing}",
                track.path.display()
            );
        }

        fn do_stop(
            sink: &mut Option<Sink>,
            index: &mut Option<usize>,
            paused: &mut bool,
            playback_info: &PlaybackHandle,
        ) {
            if let Some(s) = sink.as_ref() {
                s.stop();
            }
            *sink = None;
            *index = None;
            *paused = true;
            if let Ok(mut info) = playback_info.lock() {
                info.index = None;
                info.elapsed = Duration::ZERO;
                info.duration = None;
                info.playing = false;
            }
        }

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            let start = sink.volume();
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(start * (1.0 - t));
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Play(i) => {
                        if i < tracks.len() {
                            do_load(
                                i,
                                true,
                                &stream,
                                &tracks,
                                &mut sink,
                                &mut index,
                                &mut paused,
                                volume,
                                &playback_info,
                            );
                        }
                    }

                    AudioCmd::Load(i) => {
                        if i < tracks.len() {
                            do_load(
                                i,
                                false,
                                &stream,
                                &tracks,
                                &mut sink,
                                &mut index,
                                &mut paused,
                                volume,
                                &playback_info,
                            );
                        }
                    }

                    AudioCmd::TogglePause => {
                        if let Some(ref s) = sink {
                            if paused {
                                s.play();
                            } else {
                                s.pause();
                            }
                            paused = !paused;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = !paused;
                            }
                        }
                    }

                    AudioCmd::Stop => {
                        do_stop(&mut sink, &mut index, &mut paused, &playback_info);
                    }

                    AudioCmd::SetVolume(v) => {
                        volume = clamp_volume(v);
                        if let Some(ref s) = sink {
                            s.set_volume(volume);
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            if !paused {
                                // Fade out gently before stopping.
                                fade_out_sink(s, fade_out_ms);
                            }
                            s.stop();
                        }
                        // Update shared state so the UI doesn't keep showing Playing.
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic check for auto-advance: when the current track
                    // drains, move to the following one; past the last track
                    // the player stops (no wraparound).
                    if let Some(ref s) = sink {
                        if !paused && s.empty() {
                            match index {
                                Some(i) if i + 1 < tracks.len() => {
                                    do_load(
                                        i + 1,
                                        true,
                                        &stream,
                                        &tracks,
                                        &mut sink,
                                        &mut index,
                                        &mut paused,
                                        volume,
                                        &playback_info,
                                    );
                                }
                                _ => {
                                    log::info!("end of track list, stopping");
                                    do_stop(&mut sink, &mut index, &mut paused, &playback_info);
                                }
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
