use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

use crate::Config;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "ocean-sim")]
#[command(about = "Headless ocean and vessel simulation", long_about = None)]
pub struct Args {
    /// TOML config file; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Stop after this many simulated seconds (0 runs forever)
    #[arg(long)]
    pub duration: Option<f32>,
    /// Fixed physics rate in Hz
    #[arg(long)]
    pub tick_hz: Option<u32>,
}

impl Args {
    /// Command-line values win over the file.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(duration) = self.duration {
            cfg.sim.duration_secs = duration;
        }
        if let Some(hz) = self.tick_hz {
            cfg.sim.tick_hz = hz;
        }
    }
}
