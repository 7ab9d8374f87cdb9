use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::RecordError;
use crate::error::Result;
use crate::query::QueryOptions;
use crate::query::TimeRange;
use crate::record::RawRecord;

/// Query records as stored by a data source: either the bare list of records
/// or the full query options including the time window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryInput {
    /// A bare list of records.
    Records(Vec<RawRecord>),
    /// Query options carrying their own time window.
    Options(QueryOptions),
}

impl QueryInput {
    /// Reads query input from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<QueryInput> {
        let input = serde_json::from_reader(reader)?;
        Ok(input)
    }

    /// Reads query input from the JSON file at `path`.
    pub fn open(path: &Path) -> Result<QueryInput> {
        debug!("reading query records from `{}`", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the records regardless of the input shape.
    pub fn records(&self) -> &[RawRecord] {
        match self {
            QueryInput::Options(options) => &options.data_list,
            QueryInput::Records(records) => records,
        }
    }

    /// Converts the input into query options.
    ///
    /// An explicit `range` takes precedence over the one stored in the input.
    pub fn into_options(self, range: Option<TimeRange>) -> Result<QueryOptions> {
        match (self, range) {
            (QueryInput::Options(mut options), Some(range)) => {
                options.range = range;
                Ok(options)
            }
            (QueryInput::Options(options), None) => Ok(options),
            (QueryInput::Records(records), Some(range)) => Ok(QueryOptions::new(records, range)),
            (QueryInput::Records(_), None) => Err(RecordError::MissingTimeRange),
        }
    }
}
