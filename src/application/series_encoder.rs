// Encoder trait for the downloadable binary artifact
use std::path::Path;

use crate::domain::series::FacSeries;

#[derive(Debug, thiserror::Error)]
#[error("could not prepare the download artifact: {0}")]
pub struct EncodeError(#[from] pub std::io::Error);

/// Serializes a fetched series into the downloadable binary format.
///
/// The encoder writes directly into the final artifact path handed to it by
/// the caller; it never creates scratch files of its own, so artifact
/// ownership and cleanup stay with the caller.
pub trait SeriesEncoder: Send + Sync {
    fn encode(&self, series: &FacSeries, path: &Path) -> Result<(), EncodeError>;
}
