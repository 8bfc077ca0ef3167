//! Error type shared by loading, coloring, and rendering.

use thiserror::Error;

/// Everything that can abort a run. There are no retries: the first error
/// stops the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or degenerate polygon definition in the input.
    #[error("bad polygon `{label}`: {reason}")]
    InputShape { label: String, reason: String },

    /// Every palette color is already held by a neighbor.
    #[error("no color left for polygon `{label}`: its neighbors already use all four")]
    EmptyPalette { label: String },

    /// The renderer was handed a region without a color.
    #[error("polygon `{label}` has no color assigned")]
    Uncolored { label: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid layout yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn input_shape(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InputShape {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
