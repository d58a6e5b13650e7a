//! Ocean surface, buoyancy and vessel propulsion shared by hosts and tests.
//!
//! This crate intentionally avoids any engine types beyond `bevy_math`. Rigid
//! bodies are reached through the [`RigidBody`] capability trait; the host owns
//! integration, collision and input binding.

pub mod math;
pub use math::{Quatf, Vec2f, Vec3f};

mod error;
pub use error::{OceanError, PossessionError};

mod wave;
pub use wave::WaveLayer;
mod field;
pub use field::{OceanField, SEA_LEVEL};

mod spec;
pub use spec::{BuoyancySpec, OceanSpec, PropulsionSpec, RigidBodySpec, SamplePointSpec, VesselSpec, WaveLayerSpec};

pub mod builtins;

mod rigid_body;
pub use rigid_body::{Pose, RigidBody};

mod controls;
pub use controls::{ButtonEdge, ControlEvent, ControlInputs};

pub mod vessel;
pub use vessel::{
    apply_propulsion, solve_buoyancy, step_vessel, step_vessel_dbg, BuoyancyBody, BuoyancyReport,
    PropulsionOutput, SamplePoint, SampleReading, VesselStepDebug, VesselTick,
};

mod possession;
pub use possession::{Controller, ControllerId, PawnInput, Possession, PossessionState};

pub mod interaction;
pub use interaction::{Interactable, InteractionZone, InteractOutcome};
