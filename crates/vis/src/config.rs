//! The presentation settings of a chart panel.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use log::debug;
use plotprep_records::RawRecord;
use plotprep_records::RecordType;
use serde::Deserialize;
use serde::Serialize;

/// How the records of a query are laid out on the x-axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XAxisMode {
    /// One line per record, plotted over time.
    #[default]
    Time,
    /// One bar per record, summarized by the x-axis value selector.
    Series,
    /// One bar group per category, one bar per record.
    NonSeries,
    /// The values of all records bucketed into a single series.
    Histogram,
    /// Document fields picked by name.
    Field,
}

impl XAxisMode {
    /// Detects the mode for a query from its first record.
    ///
    /// Document and table records always switch to [`XAxisMode::Field`].
    /// Otherwise an explicitly chosen `series`, `non-series` or `histogram`
    /// mode is kept, and everything else falls back to [`XAxisMode::Time`].
    pub fn detect(current: XAxisMode, first_record: &RawRecord) -> XAxisMode {
        match first_record.record_type {
            RecordType::Docs | RecordType::Table => XAxisMode::Field,
            RecordType::Timeseries | RecordType::Unspecified => match current {
                XAxisMode::Series | XAxisMode::NonSeries | XAxisMode::Histogram => current,
                XAxisMode::Time | XAxisMode::Field => XAxisMode::Time,
            },
        }
    }
}

impl Display for XAxisMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            XAxisMode::Time => "time",
            XAxisMode::Series => "series",
            XAxisMode::NonSeries => "non-series",
            XAxisMode::Histogram => "histogram",
            XAxisMode::Field => "field",
        };

        f.write_str(name)
    }
}

/// The statistic a series is reduced to when it is drawn as a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisValue {
    /// The average of the values.
    Avg,
    /// The smallest value.
    Min,
    /// The largest value.
    Max,
    /// The sum of the values.
    Total,
    /// The number of values.
    Count,
}

impl XAxisValue {
    const ALL: [XAxisValue; 5] = [
        XAxisValue::Avg,
        XAxisValue::Min,
        XAxisValue::Max,
        XAxisValue::Total,
        XAxisValue::Count,
    ];

    /// The selector name as stored in the configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            XAxisValue::Avg => "avg",
            XAxisValue::Min => "min",
            XAxisValue::Max => "max",
            XAxisValue::Total => "total",
            XAxisValue::Count => "count",
        }
    }

    /// The selector name as shown to a user.
    pub fn text(&self) -> &'static str {
        match self {
            XAxisValue::Avg => "Avg",
            XAxisValue::Min => "Min",
            XAxisValue::Max => "Max",
            XAxisValue::Total => "Total",
            XAxisValue::Count => "Count",
        }
    }
}

impl Display for XAxisValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for XAxisValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XAxisValue::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not an x-axis value"))
    }
}

/// A selectable x-axis value, in the `{ text, value }` shape option lists use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XAxisValueOption {
    /// The label shown to a user.
    pub text: &'static str,
    /// The selector stored in the configuration.
    pub value: XAxisValue,
}

/// Returns the x-axis values a user can choose from in the given mode.
///
/// Only [`XAxisMode::Series`] reduces series to single values; all other modes
/// offer no choice.
pub fn x_axis_value_options(mode: XAxisMode) -> Vec<XAxisValueOption> {
    match mode {
        XAxisMode::Series => XAxisValue::ALL
            .into_iter()
            .map(|value| XAxisValueOption {
                text: value.text(),
                value,
            })
            .collect(),
        XAxisMode::Time | XAxisMode::NonSeries | XAxisMode::Histogram | XAxisMode::Field => {
            Vec::new()
        }
    }
}

/// The presentation settings of a chart panel.
///
/// The panel owns this state. A transformation takes it by value and hands
/// back the configuration for the mode it detected, so that persisting it
/// stays with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfiguration {
    /// The active x-axis mode.
    pub x_axis_mode: XAxisMode,
    /// Draw values as bars.
    pub show_bars: bool,
    /// Draw values as connected lines.
    pub show_lines: bool,
    /// Draw values as points.
    pub show_points: bool,
    /// Stack series on top of each other.
    pub stacked: bool,
    /// Show the legend.
    pub legend_visible: bool,
    /// Show all series in one tooltip.
    pub tooltip_shared: bool,
    /// The statistics a series is reduced to, e.g. `["total"]`.
    pub x_axis_values: Vec<String>,
    /// The document field plotted on the x-axis in [`XAxisMode::Field`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_field_name: Option<String>,
    /// Colors chosen by the user, keyed by series alias.
    pub alias_colors: BTreeMap<String, String>,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            x_axis_mode: XAxisMode::Time,
            show_bars: false,
            show_lines: true,
            show_points: false,
            stacked: false,
            legend_visible: true,
            tooltip_shared: true,
            x_axis_values: Vec::new(),
            x_axis_field_name: None,
            alias_colors: BTreeMap::new(),
        }
    }
}

impl ViewConfiguration {
    const DEFAULT_SERIES_VALUE: XAxisValue = XAxisValue::Total;

    /// Switches to `mode`.
    ///
    /// The defaults of the new mode are applied only when the mode actually
    /// changes, so settings a user changed within a mode survive.
    pub fn with_mode(mut self, mode: XAxisMode) -> ViewConfiguration {
        if self.x_axis_mode == mode {
            return self;
        }

        debug!("switching the x-axis mode from `{}` to `{mode}`", self.x_axis_mode);

        self.x_axis_mode = mode;
        self.with_mode_defaults()
    }

    /// Applies the presentation defaults of the current mode.
    pub fn with_mode_defaults(mut self) -> ViewConfiguration {
        match self.x_axis_mode {
            XAxisMode::Time => {
                self.show_bars = false;
                self.show_lines = true;
                self.show_points = false;
                self.legend_visible = true;
                self.tooltip_shared = true;
                self.x_axis_values.clear();
            }
            XAxisMode::Series | XAxisMode::NonSeries => {
                self.show_bars = true;
                self.show_lines = false;
                self.show_points = false;
                self.stacked = false;
                self.legend_visible = false;
                self.tooltip_shared = false;
                self.x_axis_values = vec![Self::DEFAULT_SERIES_VALUE.to_string()];
            }
            XAxisMode::Histogram => {
                self.show_bars = true;
                self.show_lines = false;
                self.show_points = false;
                self.stacked = false;
                self.legend_visible = false;
                self.tooltip_shared = false;
            }
            XAxisMode::Field => {}
        }

        self
    }

    /// Resets the x-axis value selectors of the series mode if they are not
    /// usable: an empty list or an unknown first selector becomes `["total"]`.
    pub fn with_validated_x_axis_values(mut self) -> ViewConfiguration {
        if self.x_axis_mode != XAxisMode::Series {
            return self;
        }

        if self.x_axis_value().is_none() {
            debug!(
                "resetting the x-axis values {:?} to `{}`",
                self.x_axis_values,
                Self::DEFAULT_SERIES_VALUE
            );
            self.x_axis_values = vec![Self::DEFAULT_SERIES_VALUE.to_string()];
        }

        self
    }

    /// Returns the first x-axis value selector if it is one of the
    /// options of the current mode.
    pub fn x_axis_value(&self) -> Option<XAxisValue> {
        let selector: XAxisValue = self.x_axis_values.first()?.parse().ok()?;

        x_axis_value_options(self.x_axis_mode)
            .into_iter()
            .any(|option| option.value == selector)
            .then_some(selector)
    }

    /// Returns the configured x-axis field name, treating an empty name as unset.
    pub fn x_axis_field_name(&self) -> Option<&str> {
        self.x_axis_field_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}
