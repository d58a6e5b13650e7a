use serde::{Deserialize, Serialize};

use crate::math::{Vec2f, Vec3f};
use crate::{BuoyancyBody, OceanError, SamplePoint};

/// Raw parameters of one wave layer, as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveLayerSpec {
    pub wavelength: f32,
    pub amplitude: f32,
    pub speed: f32,
    /// Propagation direction in the XY plane; need not be normalized, must be non-zero.
    pub direction: Vec2f,
    pub steepness: f32,
}

/// Ordered wave layers making up an ocean profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanSpec {
    pub layers: Vec<WaveLayerSpec>,
}

impl Default for OceanSpec {
    fn default() -> Self {
        crate::builtins::default_ocean_spec()
    }
}

/// Mass properties handed to the host's rigid-body integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodySpec {
    /// kg
    pub mass: f32,
    /// Principal moments about body X (roll), Y (pitch), Z (yaw), kg·m².
    pub inertia: Vec3f,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePointSpec {
    pub name: String,
    /// Offset from the body origin in body space (+X forward, +Y left, +Z up).
    pub offset: Vec3f,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuoyancySpec {
    /// Upward force per unit of submersion depth at one sample point (N/m).
    pub float_force_coefficient: f32,
    /// Drag force per unit of point velocity at one submerged sample point (N·s/m).
    pub drag_coefficient: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropulsionSpec {
    /// Forward force at full throttle (N).
    pub engine_power: f32,
    /// Yaw torque at full steering (N·m).
    pub turn_speed: f32,
}

/// Everything needed to float and drive one vessel class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselSpec {
    pub body: RigidBodySpec,
    pub sample_points: Vec<SamplePointSpec>,
    pub buoyancy: BuoyancySpec,
    pub propulsion: PropulsionSpec,
}

impl Default for VesselSpec {
    fn default() -> Self {
        crate::builtins::rowboat_spec()
    }
}

impl VesselSpec {
    /// Checks tuning values so bad configuration fails at startup, not mid-tick.
    pub fn validate(&self) -> Result<(), OceanError> {
        let checks = [
            ("body.mass", self.body.mass),
            ("body.inertia.x", self.body.inertia.x),
            ("body.inertia.y", self.body.inertia.y),
            ("body.inertia.z", self.body.inertia.z),
            ("body.linear_damping", self.body.linear_damping),
            ("body.angular_damping", self.body.angular_damping),
            ("buoyancy.float_force_coefficient", self.buoyancy.float_force_coefficient),
            ("buoyancy.drag_coefficient", self.buoyancy.drag_coefficient),
            ("propulsion.engine_power", self.propulsion.engine_power),
            ("propulsion.turn_speed", self.propulsion.turn_speed),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(OceanError::InvalidCoefficient { name, value });
            }
        }
        if self.body.mass <= 0.0 {
            return Err(OceanError::InvalidCoefficient { name: "body.mass", value: self.body.mass });
        }
        self.hull().map(|_| ())
    }

    /// Builds the sample-point hull described by this spec.
    pub fn hull(&self) -> Result<BuoyancyBody, OceanError> {
        BuoyancyBody::new(
            self.sample_points
                .iter()
                .map(|p| SamplePoint::new(p.name.clone(), p.offset))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vessel_is_valid() {
        let spec = VesselSpec::default();
        spec.validate().unwrap();
        assert_eq!(spec.hull().unwrap().sample_points().len(), 4);
    }

    #[test]
    fn negative_drag_is_rejected() {
        let mut spec = VesselSpec::default();
        spec.buoyancy.drag_coefficient = -1.0;
        assert_eq!(
            spec.validate(),
            Err(OceanError::InvalidCoefficient { name: "buoyancy.drag_coefficient", value: -1.0 })
        );
    }

    #[test]
    fn empty_hull_is_rejected() {
        let mut spec = VesselSpec::default();
        spec.sample_points.clear();
        assert_eq!(spec.validate(), Err(OceanError::NoSamplePoints));
    }
}
