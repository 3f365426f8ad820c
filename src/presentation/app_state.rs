// Application state for HTTP handlers
use crate::application::explorer_service::ExplorerService;

#[derive(Clone)]
pub struct AppState {
    pub explorer: ExplorerService,
}
