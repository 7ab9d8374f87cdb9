//! The series a chart panel draws.

use std::sync::Arc;

use plotprep_records::Point;
use plotprep_records::RawRecord;
use serde::Serialize;

use crate::config::XAxisValue;

/// A series ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSeries {
    /// The name the series is shown under.
    pub alias: String,
    /// The data of the series.
    pub points: SeriesPoints,
    /// The color the series is drawn with.
    pub color: String,
    /// The unit of the series values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Set when the last point lies well before the start of the time window.
    pub is_outside_range: bool,
}

/// The data of a [NormalizedSeries].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesPoints {
    /// The points of a record, in order.
    Samples(Vec<Point>),
    /// A category pivoted out of several records.
    NonSeries(NonSeriesPoints),
}

/// The values of one category across all records of a non-series query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonSeriesPoints {
    /// `(ordinal, value)` pairs, one per record; the ordinal starts at 1.
    pub aligned_values: Vec<(f64, f64)>,
    /// The aligned records the category was pivoted from.
    pub source_records: Arc<[RawRecord]>,
}

impl NormalizedSeries {
    /// Returns the values of the series in order.
    pub fn values(&self) -> Vec<f64> {
        match &self.points {
            SeriesPoints::Samples(points) => points.iter().filter_map(Point::value).collect(),
            SeriesPoints::NonSeries(points) => {
                points.aligned_values.iter().map(|(_, value)| *value).collect()
            }
        }
    }

    /// The number of points of the series.
    pub fn len(&self) -> usize {
        match &self.points {
            SeriesPoints::Samples(points) => points.len(),
            SeriesPoints::NonSeries(points) => points.aligned_values.len(),
        }
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Summarizes the values of the series.
    pub fn stats(&self) -> SeriesStats {
        SeriesStats::from_values(self.values())
    }
}

/// A summary of the values of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SeriesStats {
    /// The sum of the values.
    pub total: f64,
    /// The number of values.
    pub count: usize,
    /// The smallest value.
    pub min: Option<f64>,
    /// The largest value.
    pub max: Option<f64>,
}

impl SeriesStats {
    /// Summarizes `values`, skipping those that are not numbers.
    pub fn from_values<I>(values: I) -> SeriesStats
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| !value.is_nan())
            .fold(SeriesStats::default(), |stats, value| SeriesStats {
                total: stats.total + value,
                count: stats.count + 1,
                min: Some(stats.min.map_or(value, |min| min.min(value))),
                max: Some(stats.max.map_or(value, |max| max.max(value))),
            })
    }

    /// The average value, or `None` if there are no values.
    pub fn avg(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }

    /// Reduces the series to the statistic chosen by `selector`.
    pub fn value(&self, selector: XAxisValue) -> Option<f64> {
        match selector {
            XAxisValue::Avg => self.avg(),
            XAxisValue::Min => self.min,
            XAxisValue::Max => self.max,
            XAxisValue::Total => Some(self.total),
            XAxisValue::Count => Some(self.count as f64),
        }
    }
}
