//! [plotprep]'s visualization library.
//!
//! [plotprep]: https://github.com/nelusnegur/plotprep
//!
//! Turns the records of a query into the series a chart panel draws. The
//! shape of the records decides the x-axis mode of the panel, the mode
//! decides how the records are shaped, and switching modes resets the
//! panel's presentation settings to the mode's defaults.
//!
//! **WARNING**: This library is plotprep's internal visualization library and
//! there are no plans to stabilize it. The API may break at any time without notice.

#![warn(missing_docs)]

mod shape;

pub mod config;
pub mod error;
pub mod palette;
pub mod series;
pub mod transform;

pub use crate::config::ViewConfiguration;
pub use crate::config::XAxisMode;
pub use crate::config::XAxisValue;
pub use crate::series::NormalizedSeries;
pub use crate::series::SeriesPoints;
pub use crate::shape::non_series::align_records;
pub use crate::transform::SeriesTransformer;
pub use crate::transform::Transformed;
