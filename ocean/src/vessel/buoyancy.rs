use crate::field::submersion_depth;
use crate::{BuoyancySpec, OceanField, RigidBody, Vec3f};

use super::types::{BuoyancyBody, BuoyancyReport, SampleReading};

/// Floats `body` on `ocean` for one tick.
///
/// Each sample point is tested against the wave height directly above it and,
/// when strictly below the surface, receives an upward force proportional to its
/// depth plus drag opposing its own velocity. Forces go in at the point, so
/// corners at different depths produce pitch and roll through the integrator.
/// A point exactly at the surface counts as out of the water.
pub fn solve_buoyancy<B: RigidBody + ?Sized>(
    ocean: &OceanField,
    hull: &BuoyancyBody,
    spec: &BuoyancySpec,
    body: &mut B,
) -> BuoyancyReport {
    let pose = body.world_pose();
    let mut report = BuoyancyReport {
        samples: Vec::with_capacity(hull.sample_points().len()),
        submerged_count: 0,
    };

    for point in hull.sample_points() {
        let world = pose.transform_point(point.offset);
        let wave_height = ocean.height_at_world(world);
        let depth = submersion_depth(world.z, wave_height);

        let mut reading = SampleReading {
            name: point.name.clone(),
            world_position: world,
            wave_height,
            submerged: depth.is_some(),
            depth: 0.0,
            buoyant_force: Vec3f::ZERO,
            drag_force: Vec3f::ZERO,
        };

        if let Some(depth) = depth {
            let upward = Vec3f::new(0.0, 0.0, depth * spec.float_force_coefficient);
            // Velocity at the corner, so spin is damped as well as bobbing
            let drag = -body.velocity_at_point(world) * spec.drag_coefficient;
            body.apply_force_at_point(upward, world);
            body.apply_force_at_point(drag, world);

            reading.depth = depth;
            reading.buoyant_force = upward;
            reading.drag_force = drag;
            report.submerged_count += 1;
        }
        report.samples.push(reading);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pose, SamplePoint};

    #[derive(Default)]
    struct StillBody {
        pose: Pose,
        at_point: Vec<(Vec3f, Vec3f)>,
    }

    impl RigidBody for StillBody {
        fn world_pose(&self) -> Pose { self.pose }
        fn velocity_at_point(&self, _p: Vec3f) -> Vec3f { Vec3f::ZERO }
        fn apply_force_at_point(&mut self, f: Vec3f, p: Vec3f) { self.at_point.push((f, p)); }
        fn apply_force(&mut self, _f: Vec3f) {}
        fn apply_torque(&mut self, _t: Vec3f) {}
    }

    fn spec() -> BuoyancySpec {
        BuoyancySpec { float_force_coefficient: 100.0, drag_coefficient: 2.0 }
    }

    #[test]
    fn dry_points_apply_nothing() {
        let hull = BuoyancyBody::new(vec![SamplePoint::new("keel", Vec3f::ZERO)]).unwrap();
        let mut body = StillBody { pose: Pose::new(Vec3f::new(0.0, 0.0, 1.0), Default::default()), ..Default::default() };
        let report = solve_buoyancy(&OceanField::calm(), &hull, &spec(), &mut body);
        assert_eq!(report.submerged_count, 0);
        assert!(body.at_point.is_empty());
        assert!(!report.samples[0].submerged);
        assert_eq!(report.samples[0].depth, 0.0);
    }

    #[test]
    fn submerged_point_gets_force_at_its_world_position() {
        let hull = BuoyancyBody::new(vec![SamplePoint::new("bow", Vec3f::new(1.0, 0.0, 0.0))]).unwrap();
        let mut body = StillBody { pose: Pose::new(Vec3f::new(5.0, 0.0, -0.5), Default::default()), ..Default::default() };
        let report = solve_buoyancy(&OceanField::calm(), &hull, &spec(), &mut body);
        assert_eq!(report.submerged_count, 1);
        assert_eq!(body.at_point.len(), 2, "buoyancy and drag both applied at the point");
        let (upward, at) = body.at_point[0];
        assert_eq!(at, Vec3f::new(6.0, 0.0, -0.5));
        assert_eq!(upward, Vec3f::new(0.0, 0.0, 50.0));
        assert_eq!(report.net_buoyant_force(), upward);
    }
}
