// VirES repository implementation - fetches precomputed FAC series over HTTP
use async_trait::async_trait;
use serde::Deserialize;

use crate::application::fac_repository::{FacRepository, FetchError};
use crate::domain::selection::Selection;
use crate::domain::series::{FacPoint, FacSeries};

#[derive(Debug, Clone)]
pub struct ViresRepository {
    host: String,
    token: String,
    client: reqwest::Client,
}

/// JSON payload returned by the upstream for one collection query: parallel
/// arrays of RFC 3339 timestamps and FAC values.
#[derive(Debug, Deserialize)]
struct ViresResponse {
    #[serde(default)]
    times: Vec<String>,
    #[serde(default)]
    fac: Vec<f64>,
}

impl ViresRepository {
    pub fn new(host: String, token: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn build_request_url(&self, selection: &Selection) -> String {
        let start = selection.start.to_rfc3339();
        let end = selection.end.to_rfc3339();
        format!(
            "{}/fac/{}?start={}&end={}",
            self.host,
            selection.collection(),
            urlencoding::encode(&start),
            urlencoding::encode(&end),
        )
    }

    fn decode_points(payload: ViresResponse) -> Result<Vec<FacPoint>, FetchError> {
        if payload.times.len() != payload.fac.len() {
            return Err(FetchError::Retrieval {
                reason: format!(
                    "upstream returned {} timestamps but {} values",
                    payload.times.len(),
                    payload.fac.len()
                ),
            });
        }

        let mut points = Vec::with_capacity(payload.times.len());
        for (time_str, value) in payload.times.iter().zip(payload.fac) {
            match chrono::DateTime::parse_from_rfc3339(time_str) {
                Ok(time) => points.push(FacPoint::new(time.to_utc(), value)),
                Err(_) => {
                    tracing::warn!("skipping sample with unparseable timestamp: {time_str}");
                }
            }
        }
        Ok(points)
    }
}

#[async_trait]
impl FacRepository for ViresRepository {
    async fn fetch_series(&self, selection: &Selection) -> Result<FacSeries, FetchError> {
        let collection = selection.collection();
        let url = self.build_request_url(selection);
        tracing::debug!(%url, "querying upstream FAC source");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Retrieval {
                reason: e.to_string(),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::DataUnavailable { collection });
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Retrieval {
                reason: format!("upstream returned {status}: {body}"),
            });
        }

        let payload =
            response
                .json::<ViresResponse>()
                .await
                .map_err(|e| FetchError::Retrieval {
                    reason: format!("could not parse upstream response: {e}"),
                })?;

        let points = Self::decode_points(payload)?;
        if points.is_empty() {
            return Err(FetchError::DataUnavailable { collection });
        }

        Ok(FacSeries::new(collection, points))
    }
}
