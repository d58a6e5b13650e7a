use std::path::Path;

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use ocean::{OceanField, OceanSpec, Vec3f, VesselSpec};

/// Highest accepted physics rate; the fixed step never gets shorter than its inverse.
pub const MAX_TICK_HZ: u32 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct Config {
    pub sim: SimSection,
    pub ocean: OceanSpec,
    pub vessel: VesselSpec,
    pub crew: CrewSection,
    pub script: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSection {
    pub tick_hz: u32,
    /// Simulated seconds before the app exits; 0 runs until killed.
    pub duration_secs: f32,
    pub report_interval_secs: f32,
    /// m/s², pulls along world -Z.
    pub gravity: f32,
    pub vessel_spawn: Vec3f,
}

impl Default for SimSection {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            duration_secs: 0.0,
            report_interval_secs: 1.0,
            gravity: 9.81,
            vessel_spawn: Vec3f::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewSection {
    pub spawn: Vec3f,
    /// Reach for boarding a vessel.
    pub interact_range: f32,
    /// Beyond `interact_range` but within this, a "move closer" hint is logged.
    pub hint_range: f32,
}

impl Default for CrewSection {
    fn default() -> Self {
        Self { spawn: Vec3f::new(3.0, 0.0, 0.5), interact_range: 6.0, hint_range: 12.0 }
    }
}

/// One scripted input, fired once the sim clock reaches `at`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at: f32,
    pub action: ScriptAction,
    /// Axis value for `throttle` and `steering`; ignored otherwise.
    #[serde(default)]
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    Throttle,
    Steering,
    ReleaseThrottle,
    ReleaseSteering,
    Interact,
    Exit,
}

impl Default for Config {
    fn default() -> Self {
        let step = |at, action, value| ScriptStep { at, action, value };
        Self {
            sim: SimSection::default(),
            ocean: OceanSpec::default(),
            vessel: VesselSpec::default(),
            crew: CrewSection::default(),
            // Walk up, board, motor ahead for a while, then step off
            script: vec![
                step(0.5, ScriptAction::Interact, 0.0),
                step(1.0, ScriptAction::Throttle, 1.0),
                step(8.0, ScriptAction::ReleaseThrottle, 0.0),
                step(9.0, ScriptAction::Exit, 0.0),
            ],
        }
    }
}

impl Config {
    /// Rejects anything that would otherwise fail at tick time.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.sim;
        ensure!(
            (1..=MAX_TICK_HZ).contains(&sim.tick_hz),
            "sim.tick_hz must be in 1..={MAX_TICK_HZ}, got {}",
            sim.tick_hz
        );
        ensure!(
            sim.duration_secs.is_finite() && sim.duration_secs >= 0.0,
            "sim.duration_secs must be >= 0, got {}",
            sim.duration_secs
        );
        ensure!(
            sim.report_interval_secs.is_finite() && sim.report_interval_secs > 0.0,
            "sim.report_interval_secs must be positive, got {}",
            sim.report_interval_secs
        );
        ensure!(sim.gravity.is_finite(), "sim.gravity must be finite");
        ensure!(sim.vessel_spawn.is_finite(), "sim.vessel_spawn must be finite");

        OceanField::from_spec(&self.ocean).context("invalid [ocean] section")?;
        self.vessel.validate().context("invalid [vessel] section")?;

        let crew = &self.crew;
        ensure!(crew.spawn.is_finite(), "crew.spawn must be finite");
        ensure!(
            crew.interact_range.is_finite() && crew.interact_range > 0.0,
            "crew.interact_range must be positive, got {}",
            crew.interact_range
        );
        ensure!(
            crew.hint_range.is_finite() && crew.hint_range >= crew.interact_range,
            "crew.hint_range ({}) must be at least crew.interact_range ({})",
            crew.hint_range,
            crew.interact_range
        );

        for (i, step) in self.script.iter().enumerate() {
            ensure!(step.at.is_finite() && step.at >= 0.0, "script[{i}].at must be >= 0, got {}", step.at);
            ensure!(step.value.is_finite(), "script[{i}].value must be finite");
        }
        Ok(())
    }
}

/// Reads and validates a config file. `None` yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<Config>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    cfg.validate()
        .with_context(|| format!("validating config {}", path.map_or("<defaults>".into(), |p| p.display().to_string())))?;
    Ok(cfg)
}
