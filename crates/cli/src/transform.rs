use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use log::info;
use log::warn;
use plotprep_records::QueryInput;
use plotprep_records::TimeRange;
use plotprep_vis::NormalizedSeries;
use plotprep_vis::SeriesTransformer;
use plotprep_vis::ViewConfiguration;
use plotprep_vis::XAxisValue;
use serde::Serialize;

use crate::cli::TransformArgs;
use crate::error::CliError;

#[derive(Serialize)]
struct TransformOutput<'a> {
    config: &'a ViewConfiguration,
    series: &'a [NormalizedSeries],
}

pub(crate) fn transform(args: TransformArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    run(args, &mut output)
}

fn run<W: Write>(args: TransformArgs, output: &mut W) -> Result<(), CliError> {
    let config = match args.config {
        Some(ref path) => read_config(path)?,
        None => ViewConfiguration::default(),
    };
    let config = config.with_validated_x_axis_values();

    if args.from.is_none() && args.to.is_some() {
        warn!("ignoring the end of the time window because no start was given");
    }

    let range = args
        .from
        .map(|from| TimeRange::new(from, args.to.unwrap_or_else(Utc::now)));
    let options = QueryInput::open(&args.data)?.into_options(range)?;

    let transformed = SeriesTransformer::default().transform(&config, &options)?;

    info!(
        "shaped {} records into {} series on the `{}` x-axis",
        options.data_list.len(),
        transformed.series.len(),
        transformed.config.x_axis_mode
    );

    if let (true, Some(path)) = (args.write_config, args.config.as_ref()) {
        if transformed.config.x_axis_mode != config.x_axis_mode {
            info!(
                "writing the `{}` configuration to `{}`",
                transformed.config.x_axis_mode,
                path.display()
            );
        }

        write_config(path, &transformed.config)?;
    }

    if args.summary {
        let selector = transformed.config.x_axis_value().unwrap_or(XAxisValue::Total);

        for series in &transformed.series {
            match series.stats().value(selector) {
                Some(value) => writeln!(output, "{}\t{value}", series.alias)?,
                None => writeln!(output, "{}\t-", series.alias)?,
            }
        }

        return Ok(());
    }

    let out = TransformOutput {
        config: &transformed.config,
        series: &transformed.series,
    };

    serde_json::to_writer_pretty(&mut *output, &out)?;
    writeln!(output)?;

    Ok(())
}

fn read_config(path: &Path) -> Result<ViewConfiguration, CliError> {
    let file = File::open(path)?;
    let config = serde_json::from_reader(BufReader::new(file))?;

    Ok(config)
}

fn write_config(path: &Path, config: &ViewConfiguration) -> Result<(), CliError> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;

    Ok(())
}
