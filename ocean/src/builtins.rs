use crate::math::{BODY_FWD, BODY_LEFT};
use crate::{
    BuoyancySpec, OceanSpec, PropulsionSpec, RigidBodySpec, SamplePointSpec, Vec2f, Vec3f,
    VesselSpec, WaveLayer, WaveLayerSpec,
};

// (wavelength m, amplitude m, speed m/s, direction, steepness)
const SWELL: (f32, f32, f32, [f32; 2], f32) = (60.0, 0.6, 4.0, [1.0, 0.2], 0.4);
const CHOP: (f32, f32, f32, [f32; 2], f32) = (35.0, 0.35, 2.5, [0.7, 0.7], 0.6);
const DETAIL: (f32, f32, f32, [f32; 2], f32) = (15.0, 0.2, 3.5, [0.2, 1.0], 0.8);

/// Default three-layer profile: a long swell, a medium chop and short detail waves.
pub fn default_ocean_spec() -> OceanSpec {
    let layer = |(wavelength, amplitude, speed, dir, steepness): (f32, f32, f32, [f32; 2], f32)| {
        WaveLayerSpec { wavelength, amplitude, speed, direction: Vec2f::from_array(dir), steepness }
    };
    OceanSpec { layers: vec![layer(SWELL), layer(CHOP), layer(DETAIL)] }
}

pub(crate) fn default_wave_layers() -> Vec<WaveLayer> {
    [SWELL, CHOP, DETAIL]
        .into_iter()
        .map(|(wavelength, amplitude, speed, dir, steepness)| {
            WaveLayer::builtin(wavelength, amplitude, speed, Vec2f::from_array(dir), steepness)
        })
        .collect()
}

/// Four pontoons on a rectangle around the body origin, level with it.
pub fn rectangle_sample_points(half_length: f32, half_width: f32) -> Vec<SamplePointSpec> {
    [
        ("front_left", half_length, half_width),
        ("front_right", half_length, -half_width),
        ("back_left", -half_length, half_width),
        ("back_right", -half_length, -half_width),
    ]
    .into_iter()
    .map(|(name, fwd, left)| SamplePointSpec {
        name: name.to_string(),
        offset: BODY_FWD * fwd + BODY_LEFT * left,
    })
    .collect()
}

/// Small open boat (prototype scale, SI units).
pub fn rowboat_spec() -> VesselSpec {
    // Hull box estimate for inertia
    let length = 4.0;
    let width = 3.0;
    let height = 1.0;
    let mass = 1000.0;
    let ixx = mass / 12.0 * (width * width + height * height); // roll
    let iyy = mass / 12.0 * (length * length + height * height); // pitch
    let izz = mass / 12.0 * (length * length + width * width); // yaw

    VesselSpec {
        body: RigidBodySpec {
            mass,
            inertia: Vec3f::new(ixx, iyy, izz),
            linear_damping: 0.1,
            angular_damping: 0.5,
        },
        sample_points: rectangle_sample_points(length * 0.5, width * 0.5),
        buoyancy: BuoyancySpec {
            // Four pontoons at 40 kN/m float 1000 kg at ~6 cm draft
            float_force_coefficient: 40_000.0,
            drag_coefficient: 500.0,
        },
        propulsion: PropulsionSpec { engine_power: 5_000.0, turn_speed: 3_000.0 },
    }
}
