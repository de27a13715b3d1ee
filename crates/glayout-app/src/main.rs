mod cli;
mod controller;
mod input;
mod sim;

use std::io;
use std::process::ExitCode;

use glayout_common::{GlayoutError, Rect};
use glayout_config::GlayoutConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::controller::TilingController;
use crate::sim::Simulator;

fn load_config(args: &cli::Args) -> Result<GlayoutConfig, GlayoutError> {
    let config = match &args.config {
        Some(path) => glayout_config::load_config_from(path)?,
        None => glayout_config::load_config()?,
    };
    Ok(config)
}

/// `--log-level` wins, then the config file, then `info`.
fn init_logging(override_directive: Option<&str>, config: Option<&GlayoutConfig>) {
    let directive = override_directive
        .or_else(|| config.map(|c| c.logging.level.as_directive()))
        .unwrap_or("info");
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive '{directive}': {e}; using info");
        LevelFilter::INFO.into()
    });

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn run(args: &cli::Args, config: &GlayoutConfig) -> Result<(), GlayoutError> {
    if args.print_config {
        println!("{}", glayout_config::config_to_json(config));
        return Ok(());
    }

    let controller = TilingController::from_config(config)?;
    let work_area = Rect::new(0, 0, args.width, args.height);
    tracing::info!(%work_area, "starting simulated host");

    let mut sim = Simulator::new(controller, work_area);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    sim.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logging depends on the config, so load first and report afterwards.
    let config = load_config(&args);
    init_logging(args.log_level.as_deref(), config.as_ref().ok());

    tracing::info!("glayout v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("config load failed: {e}");
            eprintln!("glayout: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = &args.config {
        tracing::info!("using config override: {}", path.display());
    }

    match run(&args, &config) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("glayout: {e}");
            ExitCode::FAILURE
        }
    }
}
