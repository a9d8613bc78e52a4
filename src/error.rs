use thiserror::Error;

/// Failure talking to the remote world
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Command rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Failure reading or writing persisted surface state
#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored state belongs to a different surface")]
    IdentityMismatch,
}

/// The image source could not produce a raster
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("Transport failed after {applied} of {total} commands: {source}")]
    Transport {
        applied: usize,
        total: usize,
        #[source]
        source: TransportError,
    },

    #[error("Invalid surface: {0}")]
    InvalidSurface(String),
}

impl RenderError {
    /// Commands applied before the render failed
    pub fn applied(&self) -> usize {
        match self {
            RenderError::Transport { applied, .. } => *applied,
            _ => 0,
        }
    }
}
