use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sim::{build_sim_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg);
    cfg.validate().context("invalid command-line override")?;
    info!(?cfg, "Sim config loaded");

    let mut app = build_sim_app(cfg)?;
    app.insert_resource(args);
    app.run();
    Ok(())
}
