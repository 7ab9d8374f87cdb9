use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use plotprep_vis::XAxisMode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Increase the logging verbosity. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Shape query records into chart series and print them as JSON.
    Transform(TransformArgs),
    /// List the fields of the first document of a docs query.
    Fields(FieldsArgs),
    /// Look up a dot-separated path in the first document of a query.
    Lookup(LookupArgs),
    /// List the x-axis values that can be chosen in an x-axis mode.
    Options(OptionsArgs),
}

#[derive(Args)]
pub(crate) struct TransformArgs {
    /// Specify the JSON file with the query records: either a list of
    /// records or query options with a `dataList` and a `range`.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) data: PathBuf,

    /// Specify the JSON file with the panel's view configuration.
    /// If it is not specified then the default configuration is used.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) config: Option<PathBuf>,

    /// Specify the start of the time window.
    #[arg(short, long)]
    pub(crate) from: Option<DateTime<Utc>>,

    /// Specify the end of the time window.
    #[arg(short, long)]
    pub(crate) to: Option<DateTime<Utc>>,

    /// Write the configuration for the detected x-axis mode back to the
    /// configuration file.
    #[arg(short, long, requires = "config")]
    pub(crate) write_config: bool,

    /// Print one line per series with its x-axis value instead of JSON.
    #[arg(short, long)]
    pub(crate) summary: bool,
}

#[derive(Args)]
pub(crate) struct FieldsArgs {
    /// Specify the JSON file with the query records.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) data: PathBuf,

    /// List numeric fields only.
    #[arg(short, long)]
    pub(crate) numeric: bool,
}

#[derive(Args)]
pub(crate) struct LookupArgs {
    /// Specify the JSON file with the query records.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) data: PathBuf,

    /// Specify the dot-separated path, for example `cpu.user`.
    #[arg(short, long)]
    pub(crate) path: String,
}

#[derive(Args)]
pub(crate) struct OptionsArgs {
    /// Specify the x-axis mode.
    #[arg(short, long, value_enum)]
    pub(crate) mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Mode {
    Time,
    Series,
    NonSeries,
    Histogram,
    Field,
}

impl From<Mode> for XAxisMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Time => XAxisMode::Time,
            Mode::Series => XAxisMode::Series,
            Mode::NonSeries => XAxisMode::NonSeries,
            Mode::Histogram => XAxisMode::Histogram,
            Mode::Field => XAxisMode::Field,
        }
    }
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}
