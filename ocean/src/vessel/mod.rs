mod types;
mod buoyancy;
mod propulsion;
mod step;

pub use types::{BuoyancyBody, BuoyancyReport, PropulsionOutput, SamplePoint, SampleReading, VesselStepDebug, VesselTick};
pub use buoyancy::solve_buoyancy;
pub use propulsion::apply_propulsion;
pub use step::{step_vessel, step_vessel_dbg};
