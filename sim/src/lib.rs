//! Headless host for the `ocean` crate: config, a fixed-step Bevy app, a
//! rigid-body integrator and scripted crew input.

use std::time::Duration;

use anyhow::{Context, Result};
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

use ocean::OceanField;

pub mod args;
pub mod body;
pub mod config;
pub mod crew;
pub mod scene;
pub mod simulation;

pub use args::Args;
pub use body::RigidBodyState;
pub use config::{load_config, Config, CrewSection, ScriptAction, ScriptStep, SimSection, MAX_TICK_HZ};
pub use crew::{drive_controls, InputScript};
pub use scene::{
    spawn_scene, CrewController, PawnControl, Vessel, VesselControls, VesselHull, VesselSeat,
    VesselTelemetry, Walker,
};
pub use simulation::{
    report_vessels, simulate_ocean, stop_after_duration, MissingBodies, OceanState, ReportTimer,
    SimClock, MIN_STEP_DT,
};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimSet;

/// Builds the app from an already validated config. The ocean and hull are
/// constructed here so a bad spec fails before the first frame.
pub fn build_sim_app(cfg: Config) -> Result<App> {
    let ocean = OceanField::from_spec(&cfg.ocean).context("building ocean field")?;
    let hull = cfg.vessel.hull().context("building vessel hull")?;

    let mut app = App::new();
    let frame = Duration::from_secs_f64(1.0 / f64::from(cfg.sim.tick_hz.max(1)));
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)));

    app.insert_resource(SimClock::new(cfg.sim.tick_hz))
        .insert_resource(OceanState(ocean))
        .insert_resource(InputScript::new(cfg.script.clone()))
        .insert_resource(ReportTimer::new(cfg.sim.report_interval_secs));
    spawn_scene(app.world_mut(), &cfg, hull);
    app.insert_resource(cfg);

    app.add_systems(
        Update,
        (drive_controls, simulate_ocean, report_vessels, stop_after_duration)
            .chain()
            .in_set(SimSet),
    );
    Ok(app)
}
