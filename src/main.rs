mod cli;

use clap::Parser;
use std::path::{Path, PathBuf};
use teascore::descriptors::{Axis, GeographicalDescriptors, Season, SeasonalFactors};
use teascore::error::TeaError;
use teascore::types::config::TeaConfig;
use teascore::types::scoring::EffectScores;
use teascore::{analyze, catalog, config, normalize, report};
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_root(config_dir: Option<PathBuf>) -> Result<PathBuf, TeaError> {
    match config_dir {
        Some(dir) => {
            if !dir.exists() {
                return Err(TeaError::PathNotFound(dir.display().to_string()));
            }
            Ok(dir)
        }
        None => Ok(std::env::current_dir()?),
    }
}

fn load_validated_config(root: &Path) -> Result<TeaConfig, TeaError> {
    let cfg = config::load_config(root)?.unwrap_or_default();
    cfg.validate()?;
    Ok(cfg)
}

fn collect_scores(pairs: Vec<(String, f64)>) -> EffectScores {
    let mut scores = EffectScores::new();
    for (effect, value) in pairs {
        if let Some(previous) = scores.insert(effect.clone(), value) {
            warn!(effect = %effect, previous, value, "duplicate --score, keeping the last value");
        }
    }
    scores
}

fn describe_tags(label: &str, tags: &[&str]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("\n  {label}: {}", tags.join(", "))
    }
}

fn run() -> Result<i32, TeaError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let root = config_root(cmd.config_dir)?;
            let cfg = load_validated_config(&root)?;
            let catalog = catalog::load_catalog(&cmd.path)?;
            let tea_report = analyze::analyze_catalog(&catalog, &cfg);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&tea_report, output_format)?;
            println!("{rendered}");

            if !tea_report.skipped.is_empty() {
                eprintln!(
                    "warning: skipped {} unreadable profile file(s)",
                    tea_report.skipped.len()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Normalize(cmd) => {
            let scores = collect_scores(cmd.scores);
            let normalized = match cmd.method {
                cli::Method::Statistical => normalize::normalize_scores(&scores),
                cli::Method::Logistic => {
                    let root = config_root(cmd.config_dir)?;
                    let cfg = load_validated_config(&root)?;
                    cfg.score_normalizer().normalize_each(&scores)
                }
            };
            println!("{}", report::json::scores_to_json(&normalized)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Enhance(cmd) => {
            let scores = collect_scores(cmd.scores);
            let dominant = cmd
                .dominant
                .or_else(|| normalize::dominant_effect(&scores).map(str::to_string));
            let enhanced =
                normalize::enhance_dominant_effect(&scores, dominant.as_deref(), cmd.factor);
            println!("{}", report::json::scores_to_json(&enhanced)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Describe(cmd) => {
            let readings = [
                (Axis::Elevation, cmd.elevation),
                (Axis::Latitude, cmd.latitude),
                (Axis::Humidity, cmd.humidity),
                (Axis::Temperature, cmd.temperature),
                (Axis::SolarRadiation, cmd.solar_radiation),
            ];
            let mut described = 0;
            for (axis, value) in readings {
                let Some(value) = value else { continue };
                described += 1;
                match GeographicalDescriptors::lookup(axis, value) {
                    Some(bucket) => println!(
                        "{axis} {value} {}: {}{}{}{}",
                        axis.unit(),
                        bucket.description,
                        describe_tags("flavor", bucket.flavor_influence),
                        describe_tags("mouthfeel", bucket.mouth_feel_influence),
                        describe_tags("compounds", bucket.compound_tendency)
                    ),
                    None => println!("{axis} {value} {}: no descriptor", axis.unit()),
                }
            }
            if let Some(season) = cmd
                .month
                .and_then(|month| Season::from_month(month, cmd.latitude))
            {
                described += 1;
                let factor = SeasonalFactors::factor(season);
                println!(
                    "season {season}: {}{}{}",
                    factor.description,
                    describe_tags("flavor", factor.flavor_influence),
                    describe_tags("compounds", factor.compound_tendency)
                );
            }
            if described == 0 {
                println!("describe: no readings given");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let root = config_root(cmd.config_dir)?;
            let mut problems = Vec::new();

            match config::load_config(&root) {
                Ok(Some(cfg)) => {
                    if let Err(e) = cfg.validate() {
                        problems.push(e.to_string());
                    }
                }
                Ok(None) => {
                    eprintln!("warning: no teascore.toml found in {}", root.display());
                }
                Err(e @ TeaError::ConfigParse(_)) => problems.push(e.to_string()),
                Err(e) => return Err(e),
            }
            for table in GeographicalDescriptors::tables() {
                if let Err(e) = table.validate() {
                    problems.push(e.to_string());
                }
            }

            if problems.is_empty() {
                println!("check: ok");
                return Ok(exit_code::SUCCESS);
            }
            for problem in &problems {
                println!("[INVALID] {problem}");
            }
            Ok(exit_code::INVALID_CONFIG)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                TeaError::ConfigParse(_) => exit_code::INVALID_CONFIG,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
