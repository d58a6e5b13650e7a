/// Configuration errors raised while building an ocean or a hull.
///
/// These are only produced at construction time; height and force queries on a
/// successfully built field are total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OceanError {
    #[error("wave layer {layer}: direction vector has zero length (no propagation direction)")]
    ZeroDirection { layer: usize },

    #[error("wave layer {layer}: wavelength must be positive, got {value}")]
    NonPositiveWavelength { layer: usize, value: f32 },

    #[error("wave layer {layer}: amplitude must be non-negative, got {value}")]
    NegativeAmplitude { layer: usize, value: f32 },

    #[error("wave layer {layer}: steepness must lie in [0, 1], got {value}")]
    SteepnessOutOfRange { layer: usize, value: f32 },

    #[error("wave layer {layer}: {field} is not finite")]
    NonFinite { layer: usize, field: &'static str },

    #[error("a buoyancy body needs at least one sample point")]
    NoSamplePoints,

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidCoefficient { name: &'static str, value: f32 },
}

impl OceanError {
    /// Re-labels a layer error with its position in a layer list.
    pub(crate) fn at_layer(self, index: usize) -> Self {
        match self {
            Self::ZeroDirection { .. } => Self::ZeroDirection { layer: index },
            Self::NonPositiveWavelength { value, .. } => Self::NonPositiveWavelength { layer: index, value },
            Self::NegativeAmplitude { value, .. } => Self::NegativeAmplitude { layer: index, value },
            Self::SteepnessOutOfRange { value, .. } => Self::SteepnessOutOfRange { layer: index, value },
            Self::NonFinite { field, .. } => Self::NonFinite { layer: index, field },
            other => other,
        }
    }
}

/// Rejected possession transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PossessionError {
    #[error("vehicle is already possessed by controller {occupant}")]
    AlreadyPossessed { occupant: crate::ControllerId },

    #[error("vehicle is not possessed")]
    NotPossessed,

    #[error("controller {requester} is not the occupant of this vehicle")]
    NotOccupant { requester: crate::ControllerId },
}
