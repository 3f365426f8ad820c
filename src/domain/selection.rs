// Selection domain model - the user's choices driving a refresh
use chrono::{DateTime, Days, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the suggested download filename. Downstream tooling matches on
/// this exact convention, so it must not drift.
pub const FILENAME_PREFIX: &str = "SwarmPAL_FAC";
const FILENAME_TIMESTAMP: &str = "%Y%m%dT%H%M%S";

/// How far back from today the dashboard lets the user browse.
pub const BROWSE_WINDOW_DAYS: u64 = 28;
/// Width of the time window selected on first load.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spacecraft {
    #[serde(rename = "Swarm-A")]
    SwarmA,
    #[serde(rename = "Swarm-B")]
    SwarmB,
    #[serde(rename = "Swarm-C")]
    SwarmC,
}

impl Spacecraft {
    pub fn all() -> [Spacecraft; 3] {
        [Spacecraft::SwarmA, Spacecraft::SwarmB, Spacecraft::SwarmC]
    }

    /// Single-letter mission designator used in upstream collection ids.
    pub fn letter(&self) -> char {
        match self {
            Spacecraft::SwarmA => 'A',
            Spacecraft::SwarmB => 'B',
            Spacecraft::SwarmC => 'C',
        }
    }
}

impl fmt::Display for Spacecraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swarm-{}", self.letter())
    }
}

/// Data-processing quality tier of the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Reprocessed operational product.
    #[serde(rename = "OPER")]
    Oper,
    /// Near-real-time fast-track product.
    #[serde(rename = "FAST")]
    Fast,
}

impl Grade {
    pub fn all() -> [Grade; 2] {
        [Grade::Oper, Grade::Fast]
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Oper => write!(f, "OPER"),
            Grade::Fast => write!(f, "FAST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time range: start {start} is after end {end}")]
pub struct InvalidTimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// One immutable snapshot of the user's choices. Every derived view (title,
/// chart, filename) is computed from the same snapshot, so a refresh can
/// never mix values from two different selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub spacecraft: Spacecraft,
    pub grade: Grade,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Selection {
    pub fn new(
        spacecraft: Spacecraft,
        grade: Grade,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, InvalidTimeRange> {
        if start > end {
            return Err(InvalidTimeRange { start, end });
        }
        Ok(Self {
            spacecraft,
            grade,
            start,
            end,
        })
    }

    /// Selection used for the first load: Swarm-A OPER over the most recent
    /// 24 hours.
    pub fn default_window(now: DateTime<Utc>) -> Self {
        Self {
            spacecraft: Spacecraft::SwarmA,
            grade: Grade::Oper,
            start: now - Duration::hours(DEFAULT_WINDOW_HOURS),
            end: now,
        }
    }

    /// Browsable range offered to clients: the four weeks up to the end of
    /// the current day.
    pub fn browse_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let end_of_today = (now.date_naive() + Days::new(1))
            .and_time(NaiveTime::MIN)
            .and_utc();
        (end_of_today - Duration::days(BROWSE_WINDOW_DAYS as i64), end_of_today)
    }

    /// Upstream collection id for this spacecraft/grade pair,
    /// e.g. `SW_OPER_FACATMS_2F` for Swarm-A OPER.
    pub fn collection(&self) -> String {
        format!("SW_{}_FAC{}TMS_2F", self.grade, self.spacecraft.letter())
    }

    /// Title line shown above the chart.
    pub fn title(&self) -> String {
        format!(
            "{} FAC ({}) {} to {}",
            self.spacecraft,
            self.grade,
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S"),
        )
    }

    /// Suggested filename for the downloadable artifact.
    pub fn artifact_filename(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}.cdf",
            FILENAME_PREFIX,
            self.spacecraft,
            self.grade,
            self.start.format(FILENAME_TIMESTAMP),
            self.end.format(FILENAME_TIMESTAMP),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_artifact_filename() {
        let selection = Selection::new(
            Spacecraft::SwarmB,
            Grade::Oper,
            utc(2024, 1, 1, 0, 0, 0),
            utc(2024, 1, 2, 0, 0, 0),
        )
        .unwrap();

        assert_eq!(
            selection.artifact_filename(),
            "SwarmPAL_FAC_Swarm-B_OPER_20240101T000000_20240102T000000.cdf"
        );
    }

    #[test]
    fn test_filename_is_stable_for_equal_selections() {
        let a = Selection::new(
            Spacecraft::SwarmC,
            Grade::Fast,
            utc(2024, 6, 1, 12, 30, 15),
            utc(2024, 6, 1, 18, 0, 0),
        )
        .unwrap();
        let b = a;
        assert_eq!(a.artifact_filename(), b.artifact_filename());
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = Selection::new(
            Spacecraft::SwarmA,
            Grade::Oper,
            utc(2024, 1, 2, 0, 0, 0),
            utc(2024, 1, 1, 0, 0, 0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_collection_id() {
        let selection = Selection::new(
            Spacecraft::SwarmA,
            Grade::Oper,
            utc(2024, 1, 1, 0, 0, 0),
            utc(2024, 1, 1, 0, 0, 0),
        )
        .unwrap();
        assert_eq!(selection.collection(), "SW_OPER_FACATMS_2F");

        let selection = Selection::new(
            Spacecraft::SwarmC,
            Grade::Fast,
            utc(2024, 1, 1, 0, 0, 0),
            utc(2024, 1, 1, 0, 0, 0),
        )
        .unwrap();
        assert_eq!(selection.collection(), "SW_FAST_FACCTMS_2F");
    }

    #[test]
    fn test_default_window_spans_24_hours() {
        let now = utc(2024, 3, 10, 15, 0, 0);
        let selection = Selection::default_window(now);
        assert_eq!(selection.spacecraft, Spacecraft::SwarmA);
        assert_eq!(selection.grade, Grade::Oper);
        assert_eq!(selection.end, now);
        assert_eq!(selection.end - selection.start, Duration::hours(24));
    }

    #[test]
    fn test_browse_range_is_four_weeks_up_to_end_of_today() {
        let now = utc(2024, 3, 10, 15, 0, 0);
        let (earliest, latest) = Selection::browse_range(now);
        assert_eq!(latest, utc(2024, 3, 11, 0, 0, 0));
        assert_eq!(latest - earliest, Duration::days(28));
    }

    #[test]
    fn test_spacecraft_serde_names() {
        let sc: Spacecraft = serde_json::from_str("\"Swarm-B\"").unwrap();
        assert_eq!(sc, Spacecraft::SwarmB);
        assert_eq!(serde_json::to_string(&sc).unwrap(), "\"Swarm-B\"");

        let grade: Grade = serde_json::from_str("\"FAST\"").unwrap();
        assert_eq!(grade, Grade::Fast);
    }
}
