// HTTP request handlers
use crate::application::explorer_service::RefreshError;
use crate::application::fac_repository::FetchError;
use crate::domain::selection::{Grade, Selection, Spacecraft};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionBody {
    pub spacecraft: Spacecraft,
    pub grade: Grade,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<Selection> for SelectionBody {
    fn from(selection: Selection) -> Self {
        Self {
            spacecraft: selection.spacecraft,
            grade: selection.grade,
            start: selection.start,
            end: selection.end,
        }
    }
}

#[derive(Serialize)]
struct OptionsBody {
    spacecraft: Vec<Spacecraft>,
    grades: Vec<Grade>,
    browse_start: DateTime<Utc>,
    browse_end: DateTime<Utc>,
    default_selection: SelectionBody,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The selectable spacecraft, grades and browsable time range, plus the
/// selection used for the first load.
pub async fn options() -> impl IntoResponse {
    let now = Utc::now();
    let (browse_start, browse_end) = Selection::browse_range(now);
    Json(OptionsBody {
        spacecraft: Spacecraft::all().to_vec(),
        grades: Grade::all().to_vec(),
        browse_start,
        browse_end,
        default_selection: Selection::default_window(now).into(),
    })
}

/// Current dashboard view (title, chart, artifact filename).
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    match state.explorer.current_view().await {
        Some(view) => Json(view).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            "no dashboard yet; trigger a refresh first",
        ),
    }
}

/// Run one refresh cycle for the posted selection.
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectionBody>,
) -> Response {
    let selection = match Selection::new(body.spacecraft, body.grade, body.start, body.end) {
        Ok(selection) => selection,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.explorer.refresh(selection).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => {
            tracing::warn!("refresh failed: {e}");
            error_response(refresh_status(&e), e.to_string())
        }
    }
}

/// Serve the current artifact as a file download.
pub async fn download_artifact(State(state): State<Arc<AppState>>) -> Response {
    match state.explorer.current_artifact().await {
        Some((filename, bytes)) => {
            let headers = [
                (
                    header::CONTENT_TYPE,
                    "application/octet-stream".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ];
            (headers, bytes).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            "no artifact yet; trigger a refresh first",
        ),
    }
}

/// Map the refresh error taxonomy onto HTTP statuses so clients can tell
/// "no data for this selection" from "could not reach data source" from
/// "could not prepare download".
fn refresh_status(err: &RefreshError) -> StatusCode {
    match err {
        RefreshError::Fetch(FetchError::DataUnavailable { .. }) => StatusCode::NOT_FOUND,
        RefreshError::Fetch(FetchError::Retrieval { .. }) => StatusCode::BAD_GATEWAY,
        RefreshError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RefreshError::InProgress => StatusCode::CONFLICT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::series_encoder::EncodeError;

    #[test]
    fn test_refresh_status_mapping() {
        let unavailable = RefreshError::Fetch(FetchError::DataUnavailable {
            collection: "SW_OPER_FACATMS_2F".to_string(),
        });
        assert_eq!(refresh_status(&unavailable), StatusCode::NOT_FOUND);

        let retrieval = RefreshError::Fetch(FetchError::Retrieval {
            reason: "timeout".to_string(),
        });
        assert_eq!(refresh_status(&retrieval), StatusCode::BAD_GATEWAY);

        let encode = RefreshError::Encode(EncodeError(std::io::Error::other("disk full")));
        assert_eq!(refresh_status(&encode), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(refresh_status(&RefreshError::InProgress), StatusCode::CONFLICT);
    }

    #[test]
    fn test_selection_body_round_trip() {
        let raw = r#"{
            "spacecraft": "Swarm-C",
            "grade": "FAST",
            "start": "2024-01-01T00:00:00Z",
            "end": "2024-01-02T00:00:00Z"
        }"#;
        let body: SelectionBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.spacecraft, Spacecraft::SwarmC);
        assert_eq!(body.grade, Grade::Fast);

        let selection = Selection::new(body.spacecraft, body.grade, body.start, body.end).unwrap();
        assert_eq!(
            selection.artifact_filename(),
            "SwarmPAL_FAC_Swarm-C_FAST_20240101T000000_20240102T000000.cdf"
        );
    }
}
