use std::env;
use std::path::Path;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::library::scan;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let dir_path = Path::new(&dir);
    if !dir_path.is_dir() {
        return Err(format!("not a directory: {dir}").into());
    }

    let tracks = scan(dir_path, &settings.library);
    if tracks.is_empty() {
        return Err(format!("no playable tracks in {dir}").into());
    }
    log::info!("scanned {} tracks from {dir}", tracks.len());

    let audio_player = AudioPlayer::new(tracks.clone(), settings.audio.clone());
    let mut app = App::new(tracks);
    app.set_current_dir(dir.clone());
    app.set_playback_handle(audio_player.playback_handle());

    startup::apply_playback_defaults(&mut app, &audio_player, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));

    run_result
}

/// Route `log` output to a file when `SEGUE_LOG_FILE` is set.
///
/// Logging to stderr would corrupt the TUI, so logging is off otherwise.
fn init_logging() {
    let Ok(path) = env::var("SEGUE_LOG_FILE") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(f) => {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            )
            .target(env_logger::Target::Pipe(Box::new(f)))
            .try_init();
        }
        Err(e) => eprintln!("segue: cannot open log file {path}: {e}"),
    }
}
