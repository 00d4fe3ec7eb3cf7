use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use teascore::normalize::DEFAULT_ENHANCEMENT_FACTOR;

#[derive(Parser)]
#[command(
    name = "teascore",
    version,
    about = "Tea effect scoring and growing-condition lookup CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a tea profile file or a directory of profiles
    Analyze(AnalyzeCommand),
    /// Normalize raw effect scores onto the 0-10 scale
    Normalize(NormalizeCommand),
    /// Emphasize the dominant effect of normalized scores
    Enhance(EnhanceCommand),
    /// Show growing-condition descriptors for the given readings
    Describe(DescribeCommand),
    /// Validate configuration and descriptor tables
    Check(CheckCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Method {
    Statistical,
    Logistic,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Directory holding teascore.toml (defaults to the current directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct NormalizeCommand {
    /// Effect score as name=value; repeat for each effect
    #[arg(short, long = "score", value_parser = parse_score, required = true)]
    pub scores: Vec<(String, f64)>,
    #[arg(long, value_enum, default_value = "statistical")]
    pub method: Method,
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct EnhanceCommand {
    #[arg(short, long = "score", value_parser = parse_score, required = true)]
    pub scores: Vec<(String, f64)>,
    /// Effect to enhance (defaults to the highest score)
    #[arg(long)]
    pub dominant: Option<String>,
    #[arg(long, default_value_t = DEFAULT_ENHANCEMENT_FACTOR)]
    pub factor: f64,
}

#[derive(Args)]
pub struct DescribeCommand {
    /// Elevation in metres
    #[arg(long, allow_hyphen_values = true)]
    pub elevation: Option<f64>,
    /// Latitude in degrees, negative for the southern hemisphere
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    /// Relative humidity in percent
    #[arg(long)]
    pub humidity: Option<f64>,
    /// Mean growing temperature in Celsius
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,
    /// Solar radiation in kWh/m2/day
    #[arg(long)]
    pub solar_radiation: Option<f64>,
    /// Harvest month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

#[derive(Args)]
pub struct CheckCommand {
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_score(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing effect name in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid score for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}
