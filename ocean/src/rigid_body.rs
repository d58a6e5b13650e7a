use crate::math::{Quatf, Vec3f, BODY_FWD, BODY_UP};

/// Body-to-world transform of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3f,
    /// Body→world rotation.
    pub rotation: Quatf,
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: Vec3f::ZERO, rotation: Quatf::IDENTITY }
    }
}

impl Pose {
    pub fn new(position: Vec3f, rotation: Quatf) -> Self {
        Self { position, rotation }
    }

    /// World position of a body-space offset.
    #[inline]
    pub fn transform_point(&self, offset: Vec3f) -> Vec3f {
        self.position + self.rotation * offset
    }

    #[inline]
    pub fn forward(&self) -> Vec3f {
        self.rotation * BODY_FWD
    }

    #[inline]
    pub fn up(&self) -> Vec3f {
        self.rotation * BODY_UP
    }
}

/// Capabilities the ocean solvers need from the host's rigid-body integrator.
///
/// All vectors are in world space. Forces are accumulated by the host and
/// consumed by its next integration step; this crate never integrates.
pub trait RigidBody {
    fn world_pose(&self) -> Pose;

    /// Linear velocity of the material point at `world_point`, including the
    /// contribution of the body's angular velocity.
    fn velocity_at_point(&self, world_point: Vec3f) -> Vec3f;

    /// Force applied at a point; induces torque about the center of mass.
    fn apply_force_at_point(&mut self, force: Vec3f, world_point: Vec3f);

    /// Force applied at the center of mass.
    fn apply_force(&mut self, force: Vec3f);

    fn apply_torque(&mut self, torque: Vec3f);
}
