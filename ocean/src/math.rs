// Shared math types are Bevy's (re-exported from bevy_math) so hosts can pass
// their transforms through without conversion.
pub use bevy_math::{Quat as Quatf, Vec2 as Vec2f, Vec3 as Vec3f};

// Basis: right-handed, +Z up. Body axes are +X forward, +Y left, +Z up.
pub const BODY_FWD: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
pub const BODY_LEFT: Vec3f = Vec3f::new(0.0, 1.0, 0.0);
pub const BODY_UP: Vec3f = Vec3f::new(0.0, 0.0, 1.0);

/// Heading of a body-to-world rotation, measured in the XY plane from +X.
/// Positive values mean the nose has turned left (counter-clockwise seen from above).
#[inline]
pub fn heading_of(q: Quatf) -> f32 {
    let fwd = q * BODY_FWD;
    fwd.y.atan2(fwd.x)
}
