pub(crate) mod field;
pub(crate) mod histogram;
pub(crate) mod non_series;

use plotprep_records::RawRecord;

use crate::series::SeriesPoints;

/// A series that has been shaped for its x-axis mode but not yet styled.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShapedSeries {
    pub alias: String,
    pub points: SeriesPoints,
    pub unit: Option<String>,
}

impl From<&RawRecord> for ShapedSeries {
    fn from(record: &RawRecord) -> Self {
        Self {
            alias: record.name.clone(),
            points: SeriesPoints::Samples(record.points.clone()),
            unit: record.unit.clone(),
        }
    }
}
