use std::sync::Arc;

use indexmap::IndexMap;
use log::trace;
use plotprep_records::Key;
use plotprep_records::Point;
use plotprep_records::RawRecord;

use crate::series::NonSeriesPoints;
use crate::series::SeriesPoints;
use crate::shape::ShapedSeries;

/// The value of a category a record has no point for.
const FILL_VALUE: f64 = 0.0;

/// The distinct keys of the longest record, in the order they first appear.
///
/// Keys are compared by their display form, so the number `1` and the label
/// `"1"` name the same category. A repeated key keeps its first position and
/// the last occurrence wins.
#[derive(Debug)]
struct ColumnRelation {
    columns: IndexMap<String, Key>,
}

impl ColumnRelation {
    fn new(points: &[Point]) -> ColumnRelation {
        let mut columns = IndexMap::with_capacity(points.len());

        for key in points.iter().filter_map(Point::key) {
            columns.insert(key.to_string(), key.clone());
        }

        Self { columns }
    }

    fn rank(&self, key: &Key) -> Option<usize> {
        self.columns.get_index_of(&key.to_string())
    }

    fn label(&self, rank: usize) -> Option<&Key> {
        self.columns.get_index(rank).map(|(_, key)| key)
    }
}

/// Returns the index of the first record with the most points.
fn longest_record(records: &[RawRecord]) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .reduce(|longest, current| {
            if current.1.len() > longest.1.len() {
                current
            } else {
                longest
            }
        })
        .map(|(idx, _)| idx)
}

/// Aligns the points of every record on the categories of the longest record.
///
/// Records with as many points as the longest one are returned unchanged.
/// The points of every other record are moved to the rank of their category,
/// and ranks without a point get a zero value labelled with the category.
/// When a record repeats a category, its last point for it is kept.
pub fn align_records(records: &[RawRecord]) -> Vec<RawRecord> {
    let Some(longest_idx) = longest_record(records) else {
        return Vec::new();
    };

    let longest = &records[longest_idx];
    let max_len = longest.len();
    let relation = ColumnRelation::new(&longest.points);

    records
        .iter()
        .map(|record| {
            if record.len() == max_len {
                return record.clone();
            }

            trace!(
                "filling `{}` from {} to {max_len} points",
                record.name,
                record.len()
            );

            RawRecord {
                name: record.name.clone(),
                record_type: record.record_type,
                points: fill(&record.points, &relation, longest, max_len),
                unit: record.unit.clone(),
            }
        })
        .collect()
}

fn fill(points: &[Point], relation: &ColumnRelation, longest: &RawRecord, len: usize) -> Vec<Point> {
    let mut ranked: Vec<Option<&Point>> = vec![None; len];

    for point in points {
        let rank = point.key().and_then(|key| relation.rank(key));

        if let Some(slot) = rank.and_then(|rank| ranked.get_mut(rank)) {
            *slot = Some(point);
        }
    }

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, point)| match point {
            Some(point) => point.clone(),
            None => Point::sample(FILL_VALUE, column_label(relation, longest, rank)),
        })
        .collect()
}

/// The category at `rank`. When the longest record repeats categories the
/// relation is shorter than the record, and its own key at `rank` is used.
fn column_label(relation: &ColumnRelation, longest: &RawRecord, rank: usize) -> Key {
    relation
        .label(rank)
        .or_else(|| longest.points.get(rank).and_then(Point::key))
        .cloned()
        .unwrap_or_else(|| Key::Label(String::new()))
}

/// Pivots records of categorized values into one series per category.
///
/// Every category series holds one `(ordinal, value)` pair per record, with
/// ordinals starting at 1, and shares the aligned records it was built from.
pub(crate) fn pivot(records: &[RawRecord]) -> Vec<ShapedSeries> {
    let Some(longest_idx) = longest_record(records) else {
        return Vec::new();
    };

    let aligned: Arc<[RawRecord]> = Arc::from(align_records(records));
    let longest = &aligned[longest_idx];

    longest
        .points
        .iter()
        .enumerate()
        .map(|(rank, point)| {
            let alias = point.key().map(Key::to_string).unwrap_or_default();
            let aligned_values = aligned
                .iter()
                .enumerate()
                .map(|(idx, record)| {
                    let value = record
                        .points
                        .get(rank)
                        .and_then(Point::value)
                        .unwrap_or(FILL_VALUE);

                    ((idx + 1) as f64, value)
                })
                .collect();

            ShapedSeries {
                alias,
                points: SeriesPoints::NonSeries(NonSeriesPoints {
                    aligned_values,
                    source_records: Arc::clone(&aligned),
                }),
                unit: None,
            }
        })
        .collect()
}
