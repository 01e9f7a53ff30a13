mod catalog;
mod cli;
mod config;
mod engine;
mod error;
mod forecast;
mod report;
mod soil;
mod types;

use crate::error::{AdvisorError, Result};
use crate::types::config::AdvisorConfig;
use crate::types::crop::CropProfile;
use crate::types::soil::SoilType;
use clap::Parser;
use std::borrow::Cow;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn output_format(
    flag: Option<cli::ReportFormat>,
    cfg: &AdvisorConfig,
) -> Result<report::OutputFormat> {
    match flag {
        Some(cli::ReportFormat::Json) => Ok(report::OutputFormat::Json),
        Some(cli::ReportFormat::Md) => Ok(report::OutputFormat::Md),
        None => cfg.format().parse(),
    }
}

fn resolve_catalog<'a>(
    flag: Option<&'a Path>,
    cfg: &'a AdvisorConfig,
) -> Result<Cow<'static, [CropProfile]>> {
    match flag.or(cfg.catalog_path().map(|path| path.as_path())) {
        Some(path) => Ok(Cow::Owned(catalog::load_catalog(path)?)),
        None => Ok(Cow::Borrowed(catalog::builtin())),
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd)?;

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            let soil_tag = cmd
                .soil
                .as_deref()
                .or(cfg.default_soil())
                .ok_or_else(|| {
                    AdvisorError::InvalidInput(
                        "no soil type given; pass --soil or set recommend.soil".to_string(),
                    )
                })?;
            let soil_type: SoilType = soil_tag.parse()?;
            let soil = soil::preset(soil_type).classification();

            let weather = forecast::read_forecast(&cmd.forecast)?;
            let crops = resolve_catalog(cmd.catalog.as_deref(), &cfg)?;
            let recommendation = engine::score(&weather, &soil, &crops)?;

            let top = cmd.top.map(usize::from).unwrap_or_else(|| cfg.top());
            let format = output_format(cmd.format, &cfg)?;
            let rendered = report::render(&recommendation, top, format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let crops = resolve_catalog(cmd.catalog.as_deref(), &cfg)?;
            let format = output_format(cmd.format, &cfg)?;
            println!("{}", report::render_catalog(&crops, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Soils(cmd) => {
            let format = output_format(cmd.format, &cfg)?;
            println!("{}", report::render_soils(&soil::PRESETS, format)?);
            Ok(exit_code::SUCCESS)
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
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
