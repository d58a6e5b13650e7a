use crate::{ControlInputs, OceanError, Vec2f, Vec3f};

/// A fixed offset on a hull where submersion and force are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    pub name: String,
    /// Body-space offset (+X forward, +Y left, +Z up).
    pub offset: Vec3f,
}

impl SamplePoint {
    pub fn new(name: impl Into<String>, offset: Vec3f) -> Self {
        Self { name: name.into(), offset }
    }
}

/// The sample points of a floating body. Fixed at construction; never empty.
///
/// Mass, damping and velocity live with the host's integrator, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct BuoyancyBody {
    sample_points: Vec<SamplePoint>,
}

impl BuoyancyBody {
    pub fn new(sample_points: Vec<SamplePoint>) -> Result<Self, OceanError> {
        if sample_points.is_empty() {
            return Err(OceanError::NoSamplePoints);
        }
        Ok(Self { sample_points })
    }

    pub fn sample_points(&self) -> &[SamplePoint] {
        &self.sample_points
    }
}

/// Per-point result of one buoyancy pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReading {
    pub name: String,
    pub world_position: Vec3f,
    pub wave_height: f32,
    pub submerged: bool,
    /// `wave_height - z` when submerged, else 0.
    pub depth: f32,
    /// Zero when not submerged.
    pub buoyant_force: Vec3f,
    /// Zero when not submerged.
    pub drag_force: Vec3f,
}

/// Transient result of one buoyancy pass; discarded after the tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuoyancyReport {
    pub samples: Vec<SampleReading>,
    pub submerged_count: usize,
}

impl BuoyancyReport {
    /// Sum of upward forces over all points.
    pub fn net_buoyant_force(&self) -> Vec3f {
        self.samples.iter().map(|s| s.buoyant_force).sum()
    }

    pub fn net_drag_force(&self) -> Vec3f {
        self.samples.iter().map(|s| s.drag_force).sum()
    }
}

/// What the propulsion step handed to the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropulsionOutput {
    /// True when thrust was withheld because no sample point was submerged.
    pub gated: bool,
    pub forward_force: Vec3f,
    pub yaw_torque: Vec3f,
}

/// Result of `step_vessel` for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselTick {
    pub buoyancy: BuoyancyReport,
    pub propulsion: PropulsionOutput,
}

#[derive(Debug, Clone, Default)]
pub struct VesselStepDebug {
    pub time: f32,
    pub inputs: ControlInputs,
    // Pose at the start of the tick
    pub position: Vec3f,
    pub forward: Vec3f,
    pub up: Vec3f,
    // Buoyancy
    pub samples: Vec<SampleReading>,
    pub submerged_count: usize,
    pub net_buoyant_force: Vec3f,
    pub net_drag_force: Vec3f,
    // Propulsion
    pub gated: bool,
    pub forward_force: Vec3f,
    pub yaw_torque: Vec3f,
    /// Surface slope under the body origin.
    pub surface_gradient: Vec2f,
}
