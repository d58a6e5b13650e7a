use crate::{OceanError, OceanSpec, Vec2f, Vec3f, WaveLayer};

/// Still-water height. Wave offsets are added to this.
pub const SEA_LEVEL: f32 = 0.0;

/// CPU-side ocean surface: a fixed stack of wave layers and the simulation clock.
///
/// The clock is written by the tick driver once per tick (`set_time`) before any
/// queries; every query is a pure function of `(time, layers, point)` and can be
/// called any number of times per tick.
///
/// The height is a sum of sines. True Gerstner waves also displace points
/// horizontally; for buoyancy the vertical-only sum is close enough and avoids
/// an iterative solve per sample point.
#[derive(Debug, Clone, PartialEq)]
pub struct OceanField {
    time: f32,
    layers: Vec<WaveLayer>,
}

impl Default for OceanField {
    /// Swell, chop and detail layers of the builtin profile.
    fn default() -> Self {
        Self::new(crate::builtins::default_wave_layers())
    }
}

impl OceanField {
    pub fn new(layers: Vec<WaveLayer>) -> Self {
        Self { time: 0.0, layers }
    }

    /// Flat sea: no layers, height is `SEA_LEVEL` everywhere.
    pub fn calm() -> Self {
        Self::new(Vec::new())
    }

    /// Builds the field from serialized layer parameters, validating each layer.
    pub fn from_spec(spec: &OceanSpec) -> Result<Self, OceanError> {
        let layers = spec
            .layers
            .iter()
            .enumerate()
            .map(|(i, l)| {
                WaveLayer::new(l.wavelength, l.amplitude, l.speed, l.direction, l.steepness)
                    .map_err(|e| e.at_layer(i))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(layers))
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Sets the clock for the current tick. Only the tick driver calls this.
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn layers(&self) -> &[WaveLayer] {
        &self.layers
    }

    /// Absolute surface height at a horizontal point.
    pub fn height_at(&self, point: Vec2f) -> f32 {
        let offset = self
            .layers
            .iter()
            .fold(0.0, |acc, layer| acc + layer.offset_at(point, self.time));
        SEA_LEVEL + offset
    }

    /// Surface height under a world point (its Z is ignored).
    #[inline]
    pub fn height_at_world(&self, point: Vec3f) -> f32 {
        self.height_at(point.truncate())
    }

    /// Depth of `point` below the surface, or `None` when it is at or above it.
    pub fn depth_below_surface(&self, point: Vec3f) -> Option<f32> {
        submersion_depth(point.z, self.height_at_world(point))
    }

    /// True when `point` sits more than `margin` below the surface.
    pub fn is_underwater(&self, point: Vec3f, margin: f32) -> bool {
        point.z < self.height_at_world(point) - margin
    }

    /// Horizontal gradient of the surface height at `point`.
    pub fn gradient_at(&self, point: Vec2f) -> Vec2f {
        self.layers
            .iter()
            .fold(Vec2f::ZERO, |acc, layer| acc + layer.slope_at(point, self.time))
    }
}

/// Depth of height `z` under a surface at `surface`. Strict: a point exactly on
/// the surface is dry.
#[inline]
pub(crate) fn submersion_depth(z: f32, surface: f32) -> Option<f32> {
    (z < surface).then(|| surface - z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaveLayerSpec;

    #[test]
    fn default_has_three_layers() {
        let ocean = OceanField::default();
        assert_eq!(ocean.layers().len(), 3);
        assert_eq!(ocean.time(), 0.0);
    }

    #[test]
    fn from_spec_reports_failing_layer_index() {
        let mut spec = crate::builtins::default_ocean_spec();
        spec.layers.push(WaveLayerSpec {
            wavelength: 10.0,
            amplitude: 0.1,
            speed: 1.0,
            direction: Vec2f::ZERO,
            steepness: 0.5,
        });
        let err = OceanField::from_spec(&spec).unwrap_err();
        assert_eq!(err, OceanError::ZeroDirection { layer: 3 });
    }

    #[test]
    fn depth_is_strict() {
        let ocean = OceanField::calm();
        assert_eq!(ocean.depth_below_surface(Vec3f::new(3.0, 4.0, 0.0)), None);
        assert_eq!(ocean.depth_below_surface(Vec3f::new(3.0, 4.0, -0.25)), Some(0.25));
        assert!(ocean.is_underwater(Vec3f::new(0.0, 0.0, -0.2), 0.1));
        assert!(!ocean.is_underwater(Vec3f::new(0.0, 0.0, -0.05), 0.1));
    }

    #[test]
    fn calm_sea_has_no_slope() {
        let ocean = OceanField::calm();
        assert_eq!(ocean.gradient_at(Vec2f::new(12.0, -7.0)), Vec2f::ZERO);
    }
}
