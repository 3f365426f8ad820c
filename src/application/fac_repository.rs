// Repository trait for upstream FAC data access
use async_trait::async_trait;

use crate::domain::selection::Selection;
use crate::domain::series::FacSeries;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The upstream has no data for the requested window/spacecraft/grade.
    #[error("no FAC data available for {collection} in the requested window")]
    DataUnavailable { collection: String },
    /// Transport or storage failure reaching the upstream source.
    #[error("could not reach the FAC data source: {reason}")]
    Retrieval { reason: String },
}

#[async_trait]
pub trait FacRepository: Send + Sync {
    /// Fetch the precomputed FAC series matching the selection.
    async fn fetch_series(&self, selection: &Selection) -> Result<FacSeries, FetchError>;
}
