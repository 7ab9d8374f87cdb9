use std::io;
use std::io::Write;

use log::warn;
use plotprep_records::QueryInput;
use plotprep_records::discover_field_names;
use plotprep_records::lookup_path;
use plotprep_vis::XAxisMode;
use plotprep_vis::config::x_axis_value_options;
use serde_json::Value;

use crate::cli::FieldsArgs;
use crate::cli::LookupArgs;
use crate::cli::OptionsArgs;
use crate::error::CliError;

pub(crate) fn fields(args: FieldsArgs) -> Result<(), CliError> {
    let input = QueryInput::open(&args.data)?;
    let mut output = io::stdout().lock();

    for field in discover_field_names(input.records(), args.numeric) {
        writeln!(output, "{field}")?;
    }

    Ok(())
}

/// Prints the value at `path` in the first point of the first record, or
/// `null` if the path leads nowhere.
pub(crate) fn lookup(args: LookupArgs) -> Result<(), CliError> {
    let input = QueryInput::open(&args.data)?;
    let document = input
        .records()
        .first()
        .and_then(|record| record.points.first())
        .map(|point| point.to_json())
        .unwrap_or(Value::Null);

    let value = lookup_path(&document, &args.path);

    if value.is_none() {
        warn!("the `{}` path could not be found", args.path);
    }

    let mut output = io::stdout().lock();
    serde_json::to_writer_pretty(&mut output, &value)?;
    writeln!(output)?;

    Ok(())
}

pub(crate) fn options(args: OptionsArgs) -> Result<(), CliError> {
    let options = x_axis_value_options(XAxisMode::from(args.mode));

    let mut output = io::stdout().lock();
    serde_json::to_writer_pretty(&mut output, &options)?;
    writeln!(output)?;

    Ok(())
}
