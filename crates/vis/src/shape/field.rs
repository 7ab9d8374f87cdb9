use log::debug;
use log::warn;
use plotprep_records::RawRecord;
use plotprep_records::RecordType;

use crate::config::ViewConfiguration;
use crate::error::Result;
use crate::error::VisError;
use crate::shape::ShapedSeries;

const MISSING_FIELD_NAME: &str =
    "no field name specified to use for x-axis, check your axes settings";

/// Shapes document records by the configured x-axis field.
///
/// The field name must be configured. Values are not extracted from the
/// documents yet, so no series are produced.
pub(crate) fn shape(config: &ViewConfiguration, first_record: &RawRecord) -> Result<Vec<ShapedSeries>> {
    let field_name = config
        .x_axis_field_name()
        .ok_or_else(|| VisError::Configuration(String::from(MISSING_FIELD_NAME)))?;

    match first_record.record_type {
        RecordType::Docs if first_record.is_empty() => {
            warn!("the `{}` docs record has no points", first_record.name);
        }
        RecordType::Docs => {
            debug!(
                "the `{field_name}` field is not extracted from the `{}` docs record",
                first_record.name
            );
        }
        RecordType::Table | RecordType::Timeseries | RecordType::Unspecified => {
            debug!(
                "the field x-axis supports docs records only, `{}` is {:?}",
                first_record.name, first_record.record_type
            );
        }
    }

    Ok(Vec::new())
}
