//! The query options a panel hands over together with the fetched records.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::record::RawRecord;

/// The visible time window of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// The start of the window, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub from: DateTime<Utc>,
    /// The end of the window, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub to: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a time range from two timestamps.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> TimeRange {
        Self { from, to }
    }

    /// Creates a time range from two epoch millisecond values.
    ///
    /// Returns `None` if either value is out of the representable range.
    pub fn from_timestamps_millis(from: i64, to: i64) -> Option<TimeRange> {
        let from = DateTime::<Utc>::from_timestamp_millis(from)?;
        let to = DateTime::<Utc>::from_timestamp_millis(to)?;

        Some(Self { from, to })
    }

    /// The start of the window in epoch milliseconds, the unit sample keys use.
    pub fn from_ms(&self) -> f64 {
        self.from.timestamp_millis() as f64
    }

    /// The end of the window in epoch milliseconds.
    pub fn to_ms(&self) -> f64 {
        self.to.timestamp_millis() as f64
    }
}

/// The records of a query together with the request parameters
/// they were fetched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    /// The fetched records.
    #[serde(default)]
    pub data_list: Vec<RawRecord>,
    /// The time window the records were fetched for.
    pub range: TimeRange,
    /// The requested sampling interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    /// The maximum number of points the panel can show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<u32>,
}

impl QueryOptions {
    /// Creates query options without request hints.
    pub fn new(data_list: Vec<RawRecord>, range: TimeRange) -> QueryOptions {
        Self {
            data_list,
            range,
            interval_ms: None,
            max_data_points: None,
        }
    }
}
