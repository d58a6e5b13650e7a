use crate::{ControlInputs, PropulsionSpec, RigidBody};

use super::types::PropulsionOutput;

/// Engine and rudder for one tick.
///
/// `submerged_count` must come from this tick's buoyancy pass. With no point in
/// the water nothing is applied, so a hull launched off a crest cannot keep
/// accelerating in the air. Otherwise forward force goes in at the center of
/// mass and yaw torque about the body's up axis, both linear in the inputs.
pub fn apply_propulsion<B: RigidBody + ?Sized>(
    spec: &PropulsionSpec,
    inputs: ControlInputs,
    submerged_count: usize,
    body: &mut B,
) -> PropulsionOutput {
    if submerged_count == 0 {
        return PropulsionOutput { gated: true, ..Default::default() };
    }

    let pose = body.world_pose();
    let forward_force = pose.forward() * (spec.engine_power * inputs.throttle());
    let yaw_torque = pose.up() * (spec.turn_speed * inputs.steering());
    body.apply_force(forward_force);
    body.apply_torque(yaw_torque);

    PropulsionOutput { gated: false, forward_force, yaw_torque }
}
