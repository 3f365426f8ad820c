// Explorer view domain model - the display surface snapshot
use serde::Serialize;

use super::selection::Selection;
use super::series::FacSeries;

/// Fixed vertical display range of the FAC chart, in uA/m^2. Samples outside
/// this range stay in the data and the artifact; only the rendering clips.
pub const FAC_DISPLAY_MIN: f64 = -30.0;
pub const FAC_DISPLAY_MAX: f64 = 30.0;

pub const FAC_UNIT: &str = "uA/m^2";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time_ms: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub unit: &'static str,
    pub y_min: f64,
    pub y_max: f64,
    pub points: Vec<ChartPoint>,
}

/// Everything the dashboard shows for one committed refresh: title, chart and
/// the suggested name of the downloadable artifact. Built from a single
/// selection + series snapshot so the pieces can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerView {
    pub title: String,
    pub chart: ChartView,
    pub artifact_filename: String,
}

impl ExplorerView {
    pub fn build(selection: &Selection, series: &FacSeries) -> Self {
        let points = series
            .points
            .iter()
            .map(|p| ChartPoint {
                time_ms: p.time.timestamp_millis(),
                value: p.value,
            })
            .collect();

        Self {
            title: selection.title(),
            chart: ChartView {
                unit: FAC_UNIT,
                y_min: FAC_DISPLAY_MIN,
                y_max: FAC_DISPLAY_MAX,
                points,
            },
            artifact_filename: selection.artifact_filename(),
        }
    }
}
