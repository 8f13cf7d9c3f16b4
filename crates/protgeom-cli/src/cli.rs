use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "analyze-protein",
    version,
    about = "Computes the center of gravity, radius of gyration and maximum atom-atom distance of PDB structures.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// PDB files to analyze, processed in the order given.
    #[arg(required = true, value_name = "PDB")]
    pub files: Vec<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of decimal digits printed for each statistic.
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Override `parsing.include-hetatm` from the config file.
    #[command(flatten)]
    pub hetatm: HetatmRecords,

    /// Continue with the remaining files after a file fails.
    #[arg(long)]
    pub keep_going: bool,

    /// Write the statistics of every analyzed file to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Mutually exclusive flags deciding whether HETATM records count as atoms.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct HetatmRecords {
    /// Also read HETATM records as atoms.
    #[arg(long)]
    pub include_hetatm: bool,
    /// Ignore HETATM records even if the config file includes them.
    #[arg(long)]
    pub exclude_hetatm: bool,
}
