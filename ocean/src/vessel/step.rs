use crate::{ControlInputs, OceanField, RigidBody, VesselSpec};

use super::buoyancy::solve_buoyancy;
use super::propulsion::apply_propulsion;
use super::types::{BuoyancyBody, VesselStepDebug, VesselTick};

/// One tick of a floating vessel: buoyancy first, then propulsion gated on
/// that same pass. The caller sets `ocean`'s clock beforehand and integrates
/// `body` afterwards.
pub fn step_vessel<B: RigidBody + ?Sized>(
    ocean: &OceanField,
    hull: &BuoyancyBody,
    spec: &VesselSpec,
    inputs: ControlInputs,
    body: &mut B,
) -> VesselTick {
    step_vessel_dbg(ocean, hull, spec, inputs, body, None)
}

/// Variant of `step_vessel` that fills out an optional telemetry struct.
pub fn step_vessel_dbg<B: RigidBody + ?Sized>(
    ocean: &OceanField,
    hull: &BuoyancyBody,
    spec: &VesselSpec,
    inputs: ControlInputs,
    body: &mut B,
    dbg: Option<&mut VesselStepDebug>,
) -> VesselTick {
    let pose = body.world_pose();
    let buoyancy = solve_buoyancy(ocean, hull, &spec.buoyancy, body);
    let propulsion = apply_propulsion(&spec.propulsion, inputs, buoyancy.submerged_count, body);

    if let Some(d) = dbg {
        d.time = ocean.time();
        d.inputs = inputs;
        d.position = pose.position;
        d.forward = pose.forward();
        d.up = pose.up();
        d.samples = buoyancy.samples.clone();
        d.submerged_count = buoyancy.submerged_count;
        d.net_buoyant_force = buoyancy.net_buoyant_force();
        d.net_drag_force = buoyancy.net_drag_force();
        d.gated = propulsion.gated;
        d.forward_force = propulsion.forward_force;
        d.yaw_torque = propulsion.yaw_torque;
        d.surface_gradient = ocean.gradient_at(pose.position.truncate());
    }

    VesselTick { buoyancy, propulsion }
}
