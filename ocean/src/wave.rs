use std::f32::consts::TAU;

use crate::{OceanError, Vec2f};

/// One traveling sine component of the ocean surface.
///
/// Long wavelength with large amplitude reads as swell; short wavelength with
/// small amplitude reads as surface chop. Layers are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayer {
    wavelength: f32,
    amplitude: f32,
    speed: f32,
    direction: Vec2f,
    steepness: f32,
}

impl WaveLayer {
    /// Builds a layer, normalizing `direction`.
    ///
    /// Rejects a zero-length direction instead of letting NaN leak into height
    /// queries. Errors carry layer index 0; list builders re-label them.
    pub fn new(
        wavelength: f32,
        amplitude: f32,
        speed: f32,
        direction: Vec2f,
        steepness: f32,
    ) -> Result<Self, OceanError> {
        let layer = 0;
        for (field, value) in [
            ("wavelength", wavelength),
            ("amplitude", amplitude),
            ("speed", speed),
            ("steepness", steepness),
        ] {
            if !value.is_finite() {
                return Err(OceanError::NonFinite { layer, field });
            }
        }
        if wavelength <= 0.0 {
            return Err(OceanError::NonPositiveWavelength { layer, value: wavelength });
        }
        if amplitude < 0.0 {
            return Err(OceanError::NegativeAmplitude { layer, value: amplitude });
        }
        if !(0.0..=1.0).contains(&steepness) {
            return Err(OceanError::SteepnessOutOfRange { layer, value: steepness });
        }
        let direction = direction
            .try_normalize()
            .ok_or(OceanError::ZeroDirection { layer })?;

        Ok(Self { wavelength, amplitude, speed, direction, steepness })
    }

    /// Unchecked constructor for compiled-in profiles with known-good literals.
    pub(crate) fn builtin(
        wavelength: f32,
        amplitude: f32,
        speed: f32,
        direction: Vec2f,
        steepness: f32,
    ) -> Self {
        debug_assert!(wavelength > 0.0 && direction.length_squared() > 0.0);
        Self { wavelength, amplitude, speed, direction: direction.normalize(), steepness }
    }

    pub fn wavelength(&self) -> f32 { self.wavelength }
    pub fn amplitude(&self) -> f32 { self.amplitude }
    pub fn speed(&self) -> f32 { self.speed }
    /// Unit propagation direction in the horizontal plane.
    pub fn direction(&self) -> Vec2f { self.direction }
    pub fn steepness(&self) -> f32 { self.steepness }

    /// Spatial frequency `k = 2π / wavelength`.
    #[inline]
    pub fn angular_frequency(&self) -> f32 {
        TAU / self.wavelength
    }

    /// Temporal phase rate `speed * k`.
    #[inline]
    pub fn phase_constant(&self) -> f32 {
        self.speed * self.angular_frequency()
    }

    /// Amplitude after steepness scaling; the crest height this layer contributes.
    #[inline]
    pub fn effective_amplitude(&self) -> f32 {
        self.amplitude * self.steepness
    }

    /// Sine argument at a horizontal point and time. Not reduced modulo 2π.
    #[inline]
    pub fn phase_at(&self, point: Vec2f, time: f32) -> f32 {
        let projected = point.dot(self.direction);
        self.angular_frequency() * projected + self.phase_constant() * time
    }

    /// Vertical offset this layer contributes at `point`.
    #[inline]
    pub fn offset_at(&self, point: Vec2f, time: f32) -> f32 {
        self.effective_amplitude() * self.phase_at(point, time).sin()
    }

    /// Horizontal derivative of `offset_at`.
    #[inline]
    pub fn slope_at(&self, point: Vec2f, time: f32) -> Vec2f {
        let c = self.effective_amplitude() * self.angular_frequency() * self.phase_at(point, time).cos();
        self.direction * c
    }
}
