/// Error types for the core library
///
/// Fallible operations return `MarqueeResult<T>`. Everything here is a fatal
/// startup or I/O failure; termination requests are reported as a normal
/// `DisplayOutcome`, never as an error.

use std::io;
use std::path::PathBuf;

/// Result alias used across the core library.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Unified error type for display sessions and the conversation loop.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    /// The font could not be loaded for this session.
    #[error(transparent)]
    Font(#[from] FontError),

    /// The configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output is not attached to a terminal, so it has no size to query.
    #[error("output is not a terminal; cannot query its size")]
    NotATerminal,

    /// The terminal refused to report its size.
    #[error("failed to query terminal size: {0}")]
    SizeUnavailable(#[source] io::Error),

    /// The viewport leaves no room for a font of positive pixel height.
    #[error("terminal too small: {columns}x{rows} (need more than {margin} rows)")]
    ViewportTooSmall { columns: u16, rows: u16, margin: u16 },

    /// Writing a frame to the output surface failed.
    #[error("failed to write to output: {0}")]
    Surface(#[source] io::Error),

    /// The text source failed while waiting for the next utterance.
    #[error("failed to read input text: {0}")]
    Input(#[source] io::Error),
}

impl MarqueeError {
    /// Process exit status for this failure. Every error is fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Failures while turning a font file into a usable font.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("invalid font pixel size: {0}")]
    InvalidSize(f32),
}

/// Failures while loading the TOML configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
