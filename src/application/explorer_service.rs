// Explorer service - coordinates the fetch / render / artifact refresh cycle
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::application::fac_repository::{FacRepository, FetchError};
use crate::application::series_encoder::{EncodeError, SeriesEncoder};
use crate::domain::selection::Selection;
use crate::domain::view::ExplorerView;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// A second trigger arrived while a refresh was still running.
    #[error("a refresh is already in progress")]
    InProgress,
}

/// One fully-committed refresh outcome. The view and the artifact were built
/// from the same selection and series snapshot, and the temp file holding the
/// artifact is deleted when this is dropped.
struct Committed {
    view: ExplorerView,
    artifact: NamedTempFile,
}

/// The data explorer controller. Owns the current view and the single live
/// download artifact; both are replaced together by `refresh` or not at all.
#[derive(Clone)]
pub struct ExplorerService {
    repository: Arc<dyn FacRepository>,
    encoder: Arc<dyn SeriesEncoder>,
    state: Arc<Mutex<Option<Committed>>>,
}

impl ExplorerService {
    pub fn new(repository: Arc<dyn FacRepository>, encoder: Arc<dyn SeriesEncoder>) -> Self {
        Self {
            repository,
            encoder,
            state: Arc::new(Mutex::new(None)),
        }
    }

    /// Run one refresh cycle for the given selection.
    ///
    /// The committed state is swapped only after the fetch, the view build
    /// and the artifact encode have all succeeded; any failure leaves the
    /// previous view and artifact untouched. The state lock is taken with
    /// `try_lock`, so a concurrent trigger is rejected instead of queued.
    pub async fn refresh(&self, selection: Selection) -> Result<ExplorerView, RefreshError> {
        let mut guard = self
            .state
            .try_lock()
            .map_err(|_| RefreshError::InProgress)?;

        let series = self.repository.fetch_series(&selection).await?;
        tracing::debug!(
            collection = %series.collection,
            points = series.points.len(),
            "fetched FAC series"
        );

        let view = ExplorerView::build(&selection, &series);

        let artifact = NamedTempFile::new().map_err(EncodeError::from)?;
        self.encoder.encode(&series, artifact.path())?;

        // Adopting the new artifact drops the previous temp file, so at most
        // one artifact is ever on disk.
        *guard = Some(Committed {
            view: view.clone(),
            artifact,
        });
        tracing::info!(title = %view.title, "refresh committed");
        Ok(view)
    }

    /// The most recently committed view, if any refresh has succeeded yet.
    pub async fn current_view(&self) -> Option<ExplorerView> {
        self.state.lock().await.as_ref().map(|c| c.view.clone())
    }

    /// The current artifact bytes together with the suggested filename.
    pub async fn current_artifact(&self) -> Option<(String, Vec<u8>)> {
        let guard = self.state.lock().await;
        let committed = guard.as_ref()?;
        let bytes = tokio::fs::read(committed.artifact.path()).await.ok()?;
        Some((committed.view.artifact_filename.clone(), bytes))
    }
}
