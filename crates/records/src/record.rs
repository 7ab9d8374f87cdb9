//! Query records as they come back from a data source.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// The shape of the data a record carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// `[value, timestamp]` samples.
    Timeseries,
    /// Rows of a tabular result.
    Table,
    /// Free-form documents.
    Docs,
    /// The data source did not say.
    #[default]
    #[serde(other)]
    Unspecified,
}

/// The secondary value of a sample.
///
/// For time series this is the timestamp in milliseconds, for non-series
/// data it is the category the value belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// A numeric key, usually a timestamp.
    Number(f64),
    /// A textual key, usually a category label.
    Label(String),
}

impl Key {
    /// Returns the key as a number if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Key::Number(n) => Some(*n),
            Key::Label(_) => None,
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Number(n) => Display::fmt(n, f),
            Key::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Number(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Number(value as f64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Label(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Label(value)
    }
}

/// A single data point of a record.
///
/// Samples are written as the two element array `[value, key]`, where a `null`
/// value marks a gap; anything else is kept verbatim as a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Point {
    /// A `[value, key]` pair. The value is `None` for a gap.
    Sample(Option<f64>, Key),
    /// An arbitrary nested structure.
    Document(Value),
}

impl Point {
    /// Creates a `[value, key]` sample.
    pub fn sample(value: f64, key: impl Into<Key>) -> Point {
        Point::Sample(Some(value), key.into())
    }

    /// Creates a `[null, key]` sample.
    pub fn gap(key: impl Into<Key>) -> Point {
        Point::Sample(None, key.into())
    }

    /// Returns the sample value, or `None` for gaps and documents.
    pub fn value(&self) -> Option<f64> {
        match self {
            Point::Sample(value, _) => *value,
            Point::Document(_) => None,
        }
    }

    /// Returns the sample key, or `None` for documents.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Point::Sample(_, key) => Some(key),
            Point::Document(_) => None,
        }
    }

    /// Returns the sample key when it is a numeric timestamp.
    pub fn timestamp(&self) -> Option<f64> {
        self.key().and_then(Key::as_f64)
    }

    /// Returns the point as a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Point::Sample(value, key) => {
                let key = match key {
                    Key::Number(n) => Value::from(*n),
                    Key::Label(label) => Value::from(label.as_str()),
                };
                let value = value.map_or(Value::Null, Value::from);
                Value::Array(vec![value, key])
            }
            Point::Document(value) => value.clone(),
        }
    }
}

/// A named list of points produced by one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The series name, used as the alias of the rendered series.
    #[serde(alias = "target", default)]
    pub name: String,
    /// The shape of the points.
    #[serde(rename = "type", default)]
    pub record_type: RecordType,
    /// The points in the order the data source returned them.
    #[serde(alias = "datapoints", default)]
    pub points: Vec<Point>,
    /// The unit of the values, if the data source reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RawRecord {
    /// Creates a record from its parts, without a unit.
    pub fn new(name: impl Into<String>, record_type: RecordType, points: Vec<Point>) -> RawRecord {
        Self {
            name: name.into(),
            record_type,
            points,
            unit: None,
        }
    }

    /// Creates a time series record from `(value, timestamp)` pairs.
    pub fn timeseries<I>(name: impl Into<String>, samples: I) -> RawRecord
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = samples
            .into_iter()
            .map(|(value, ts)| Point::sample(value, ts))
            .collect();

        Self::new(name, RecordType::Timeseries, points)
    }

    /// Creates a document record.
    pub fn docs<I>(name: impl Into<String>, documents: I) -> RawRecord
    where
        I: IntoIterator<Item = Value>,
    {
        let points = documents.into_iter().map(Point::Document).collect();
        Self::new(name, RecordType::Docs, points)
    }

    /// Sets the unit of the record's values.
    pub fn with_unit(mut self, unit: impl Into<String>) -> RawRecord {
        self.unit = Some(unit.into());
        self
    }

    /// Returns `true` if the record has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}
