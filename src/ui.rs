//! UI rendering for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`,
//! plus the pure helpers for clock formatting and progress fractions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::config::UiSettings;

/// Render the controls help text for the footer.
fn controls_text() -> String {
    [
        "[space/p] play/pause",
        "[h/l] prev/next",
        "[-/+] volume",
        "[q] quit",
    ]
    .join(" | ")
}

/// Format a duration as a colon-separated clock string.
///
/// Sub-second remainders round to the nearest second, with carry into the
/// minute and hour fields. The hour field is omitted while zero:
/// `0:00`, `1:05`, `1:00:00`.
pub fn format_clock(d: Duration) -> String {
    let total_secs = ((d.as_millis() + 500) / 1000) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Fraction of the track already played, in [0.0, 1.0].
///
/// Zero while the duration is unknown or zero, so the gauge never divides
/// by a missing denominator.
pub fn progress_ratio(elapsed: Duration, duration: Option<Duration>) -> f64 {
    match duration {
        Some(total) if total > Duration::ZERO => {
            (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

fn state_text(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" segue ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track list: the current track stays centered when the list is longer
    // than the pane. Only build ListItems for the visible window.
    {
        let total = app.tracks.len();
        let list_height = chunks[1].height.saturating_sub(2) as usize;
        let sel_pos = app.current.min(total.saturating_sub(1));
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = app.tracks[start..end]
            .iter()
            .map(|t| ListItem::new(t.display.as_str()))
            .collect();

        let list_title = match &app.current_dir {
            Some(dir) => format!(" tracks: {dir} "),
            None => " tracks ".to_string(),
        };
        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(list_title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    // Player box: now-playing line, progress gauge, time labels.
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" player ")
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            });
        let inner = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        // Snapshot shared playback info once per frame.
        let (elapsed, duration) = app
            .playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok().map(|info| (info.elapsed, info.duration)))
            .unwrap_or((Duration::ZERO, None));

        let now_playing = match app.current_track() {
            Some(track) => {
                let mut line =
                    format!("{}/{}  {}", app.current + 1, app.tracks.len(), track.title);
                if let Some(album) = track
                    .album
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                {
                    line.push_str(&format!(" ({album})"));
                }
                line.push_str(&format!("  [{}]", state_text(app.playback)));
                line
            }
            None => "no tracks".to_string(),
        };
        frame.render_widget(Paragraph::new(now_playing), rows[0]);

        let gauge = Gauge::default()
            .ratio(progress_ratio(elapsed, duration))
            .label("");
        frame.render_widget(gauge, rows[1]);

        let right_label = match duration {
            Some(total) if ui_settings.show_remaining => {
                format!("-{}", format_clock(total.saturating_sub(elapsed)))
            }
            Some(total) => format_clock(total),
            None => "--:--".to_string(),
        };
        let time_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(rows[2]);
        frame.render_widget(Paragraph::new(format_clock(elapsed)), time_cols[0]);
        frame.render_widget(
            Paragraph::new(format!("vol {:.0}%", app.volume * 100.0))
                .alignment(Alignment::Center),
            time_cols[1],
        );
        frame.render_widget(
            Paragraph::new(right_label).alignment(Alignment::Right),
            time_cols[2],
        );
    }

    // Footer
    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
