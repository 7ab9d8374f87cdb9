use plotprep_records::RawRecord;

use crate::series::SeriesPoints;
use crate::shape::ShapedSeries;

const HISTOGRAM_ALIAS: &str = "count";

/// Concatenates the points of all records, in order, into one series
/// that the histogram buckets.
pub(crate) fn flatten(records: &[RawRecord]) -> ShapedSeries {
    let points = records
        .iter()
        .flat_map(|record| record.points.iter().cloned())
        .collect();

    ShapedSeries {
        alias: String::from(HISTOGRAM_ALIAS),
        points: SeriesPoints::Samples(points),
        unit: None,
    }
}
