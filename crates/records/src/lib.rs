//! [plotprep]'s query result library.
//!
//! [plotprep]: https://github.com/nelusnegur/plotprep
//!
//! The types in this crate describe the records a query backend hands over
//! to a dashboard panel: named series of `[value, key]` samples, or free-form
//! documents. The crate also loads such records from JSON and inspects the
//! shape of document records.

#![warn(missing_docs)]

mod read;

pub mod error;
pub mod fields;
pub mod query;
pub mod record;

pub use crate::fields::discover_field_names;
pub use crate::fields::lookup_path;
pub use crate::query::QueryOptions;
pub use crate::query::TimeRange;
pub use crate::read::QueryInput;
pub use crate::record::Key;
pub use crate::record::Point;
pub use crate::record::RawRecord;
pub use crate::record::RecordType;
