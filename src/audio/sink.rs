//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`, reporting the decoder's duration when it knows one.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

use crate::library::Track;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Create a paused `Sink` for `track`.
///
/// Also returns the duration reported by the decoder, which serves as a
/// fallback when the track's tag metadata carried none.
pub(super) fn create_sink(
    handle: &OutputStream,
    track: &Track,
) -> Result<(Sink, Option<Duration>), SinkError> {
    let file = File::open(&track.path).map_err(|e| SinkError::Open {
        path: track.path.clone(),
        source: e,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| SinkError::Decode {
        path: track.path.clone(),
        source: e,
    })?;
    let decoded_duration = source.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, decoded_duration))
}
