//! Shaping query records into the series of a chart panel.

use log::debug;
use log::trace;
use plotprep_records::QueryOptions;
use plotprep_records::TimeRange;

use crate::config::ViewConfiguration;
use crate::config::XAxisMode;
use crate::error::Result;
use crate::palette::Palette;
use crate::series::NormalizedSeries;
use crate::series::SeriesPoints;
use crate::shape::ShapedSeries;
use crate::shape::field;
use crate::shape::histogram;
use crate::shape::non_series;

/// How far, in milliseconds, the last point of a series may lie before the
/// start of the time window without the series being flagged.
const OUTSIDE_RANGE_SLACK_MS: f64 = 10_000.0;

/// The outcome of a transformation: the configuration for the detected
/// x-axis mode and the series to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    /// The configuration after mode detection and defaulting.
    pub config: ViewConfiguration,
    /// The series in drawing order.
    pub series: Vec<NormalizedSeries>,
}

/// Turns query records into the series of a chart panel.
#[derive(Debug, Clone, Default)]
pub struct SeriesTransformer {
    palette: Palette,
}

impl SeriesTransformer {
    /// Creates a transformer that colors series from `palette`.
    pub fn new(palette: Palette) -> SeriesTransformer {
        Self { palette }
    }

    /// Shapes the records of `options` into series.
    ///
    /// The x-axis mode is detected from the first record. If it differs from
    /// the mode of `config`, the returned configuration carries the defaults
    /// of the new mode. An empty data list yields no series and a copy of
    /// `config`. On error `config` is left for the caller to keep using.
    pub fn transform(&self, config: &ViewConfiguration, options: &QueryOptions) -> Result<Transformed> {
        let Some(first_record) = options.data_list.first() else {
            return Ok(Transformed {
                config: config.clone(),
                series: Vec::new(),
            });
        };

        let mode = XAxisMode::detect(config.x_axis_mode, first_record);
        let config = config.clone().with_mode(mode);

        debug!(
            "shaping {} records for the `{mode}` x-axis",
            options.data_list.len()
        );

        let shaped: Vec<ShapedSeries> = match mode {
            XAxisMode::Time | XAxisMode::Series => {
                options.data_list.iter().map(ShapedSeries::from).collect()
            }
            XAxisMode::NonSeries => non_series::pivot(&options.data_list),
            XAxisMode::Histogram => vec![histogram::flatten(&options.data_list)],
            XAxisMode::Field => field::shape(&config, first_record)?,
        };

        let series = shaped
            .into_iter()
            .enumerate()
            .map(|(idx, shaped)| self.normalize(idx, shaped, &config, &options.range))
            .collect();

        Ok(Transformed { config, series })
    }

    fn normalize(
        &self,
        index: usize,
        shaped: ShapedSeries,
        config: &ViewConfiguration,
        range: &TimeRange,
    ) -> NormalizedSeries {
        let color = config
            .alias_colors
            .get(&shaped.alias)
            .cloned()
            .unwrap_or_else(|| self.palette.color(index).to_owned());

        let is_outside_range = outside_range(&shaped.points, range);

        trace!(
            "series `{}` colored {color}, outside range: {is_outside_range}",
            shaped.alias
        );

        NormalizedSeries {
            alias: shaped.alias,
            points: shaped.points,
            color,
            unit: shaped.unit,
            is_outside_range,
        }
    }
}

/// Returns `true` if the last point lies more than the slack before the start
/// of `range`. Points without a numeric timestamp are never flagged.
fn outside_range(points: &SeriesPoints, range: &TimeRange) -> bool {
    match points {
        SeriesPoints::Samples(points) => points
            .last()
            .and_then(|point| point.timestamp())
            .is_some_and(|last| last - range.from_ms() < -OUTSIDE_RANGE_SLACK_MS),
        SeriesPoints::NonSeries(_) => false,
    }
}
