use serde::{Deserialize, Serialize};

/// Current throttle and steering, each held in [-1, 1] until changed.
///
/// Conventions: throttle +1 is full ahead; steering +1 turns the nose left
/// (positive yaw about world +Z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    throttle: f32,
    steering: f32,
}

impl ControlInputs {
    pub fn new(throttle: f32, steering: f32) -> Self {
        Self { throttle: normalize_axis(throttle), steering: normalize_axis(steering) }
    }

    pub fn throttle(&self) -> f32 { self.throttle }
    pub fn steering(&self) -> f32 { self.steering }

    pub fn set_throttle(&mut self, value: f32) {
        self.throttle = normalize_axis(value);
    }

    pub fn set_steering(&mut self, value: f32) {
        self.steering = normalize_axis(value);
    }

    /// Applies one input-layer event. Releases write an explicit 0.0 so a
    /// released key never leaves the last value latched.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Throttle(v) => self.set_throttle(v),
            ControlEvent::Steering(v) => self.set_steering(v),
            ControlEvent::ReleaseThrottle => self.throttle = 0.0,
            ControlEvent::ReleaseSteering => self.steering = 0.0,
        }
    }
}

#[inline]
fn normalize_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Axis updates from the input layer (already debounced and normalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    Throttle(f32),
    Steering(f32),
    ReleaseThrottle,
    ReleaseSteering,
}

/// Edge of a discrete button such as interact or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

impl ButtonEdge {
    #[inline]
    pub fn is_press(self) -> bool {
        matches!(self, ButtonEdge::Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let c = ControlInputs::new(3.0, -7.5);
        assert_eq!(c.throttle(), 1.0);
        assert_eq!(c.steering(), -1.0);
    }

    #[test]
    fn non_finite_input_is_zeroed() {
        let mut c = ControlInputs::new(0.5, 0.5);
        c.set_throttle(f32::NAN);
        c.set_steering(f32::INFINITY);
        assert_eq!(c, ControlInputs::default());
    }

    #[test]
    fn release_sets_exact_zero() {
        let mut c = ControlInputs::default();
        c.apply(ControlEvent::Throttle(0.8));
        c.apply(ControlEvent::Steering(-0.3));
        c.apply(ControlEvent::ReleaseThrottle);
        assert_eq!(c.throttle(), 0.0);
        assert_eq!(c.steering(), -0.3);
        c.apply(ControlEvent::ReleaseSteering);
        assert_eq!(c.steering(), 0.0);
    }
}
