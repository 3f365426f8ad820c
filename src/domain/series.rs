// FAC series domain model
use chrono::{DateTime, Utc};

/// One timestamped sample of the field-aligned current signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl FacPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// The precomputed data series fetched for one selection. Replaced wholesale
/// on every refresh; never updated incrementally.
#[derive(Debug, Clone)]
pub struct FacSeries {
    /// Upstream collection the samples came from.
    pub collection: String,
    /// FAC samples in ascending time order.
    pub points: Vec<FacPoint>,
}

impl FacSeries {
    pub fn new(collection: String, points: Vec<FacPoint>) -> Self {
        Self { collection, points }
    }
}
