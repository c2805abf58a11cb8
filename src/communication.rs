use std::path::PathBuf;

use thiserror::Error;

/// asks the playback thread to play one sound file, fire-and-forget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub path: PathBuf,
}

impl PlayRequest {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// sent back from the playback thread when a request couldn't be honored
#[derive(Debug)]
pub struct PlaybackFailure {
    pub path: PathBuf,
    pub error: PlaybackError,
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("couldn't open sound file: {0}")]
    Open(#[from] std::io::Error),
    #[error("couldn't decode sound file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("couldn't start playback: {0}")]
    Play(#[from] rodio::PlayError),
    #[error("no audio output device: {0}")]
    Device(String),
}
