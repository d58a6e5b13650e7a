use ocean::{
    builtins::rowboat_spec, step_vessel_dbg, BuoyancyBody, ControlInputs, OceanField, Pose, Quatf,
    RigidBody, SamplePoint, Vec3f, VesselStepDebug,
};

/// Body parked at a fixed pose that only counts what it receives.
struct ParkedBody {
    pose: Pose,
    net_force: Vec3f,
    applications: usize,
}

impl ParkedBody {
    fn at(position: Vec3f) -> Self {
        Self { pose: Pose::new(position, Quatf::IDENTITY), net_force: Vec3f::ZERO, applications: 0 }
    }
}

impl RigidBody for ParkedBody {
    fn world_pose(&self) -> Pose {
        self.pose
    }
    fn velocity_at_point(&self, _p: Vec3f) -> Vec3f {
        Vec3f::ZERO
    }
    fn apply_force_at_point(&mut self, force: Vec3f, _p: Vec3f) {
        self.net_force += force;
        self.applications += 1;
    }
    fn apply_force(&mut self, force: Vec3f) {
        self.net_force += force;
        self.applications += 1;
    }
    fn apply_torque(&mut self, _torque: Vec3f) {
        self.applications += 1;
    }
}

#[test]
fn points_at_origin_sit_exactly_on_the_surface() {
    // Every default layer passes through zero at the origin at t = 0
    let ocean = OceanField::default();
    assert_eq!(ocean.time(), 0.0);
    let hull = BuoyancyBody::new(
        ["a", "b", "c", "d"].into_iter().map(|n| SamplePoint::new(n, Vec3f::ZERO)).collect(),
    )
    .unwrap();
    let spec = rowboat_spec();
    let mut body = ParkedBody::at(Vec3f::ZERO);
    let mut dbg = VesselStepDebug::default();

    let tick = step_vessel_dbg(&ocean, &hull, &spec, ControlInputs::new(1.0, 0.0), &mut body, Some(&mut dbg));

    assert_eq!(tick.buoyancy.submerged_count, 0);
    assert!(tick.propulsion.gated);
    assert_eq!(body.net_force, Vec3f::ZERO);
    assert_eq!(body.applications, 0);
    assert!(dbg.samples.iter().all(|s| s.wave_height == 0.0 && !s.submerged), "{:?}", dbg.samples);
}

#[test]
fn rowboat_on_default_waves_floats_on_the_left_pontoons() {
    let ocean = OceanField::default();
    let spec = rowboat_spec();
    let hull = spec.hull().unwrap();
    let mut body = ParkedBody::at(Vec3f::ZERO);
    let mut dbg = VesselStepDebug::default();

    let tick = step_vessel_dbg(&ocean, &hull, &spec, ControlInputs::default(), &mut body, Some(&mut dbg));

    let submerged: Vec<&str> = dbg.samples.iter().filter(|s| s.submerged).map(|s| s.name.as_str()).collect();
    assert_eq!(submerged, ["front_left", "back_left"]);
    assert_eq!(tick.buoyancy.submerged_count, 2);
    assert!(!tick.propulsion.gated);

    // Heights at the two wet corners: +0.25899 and +0.01485
    let expected = (0.258_990_4 + 0.014_853_26) * spec.buoyancy.float_force_coefficient;
    let got = dbg.net_buoyant_force.z;
    assert!((got - expected).abs() < 0.5, "net buoyancy {got} N, expected ~{expected} N");
    assert_eq!(dbg.net_buoyant_force.x, 0.0);
    assert_eq!(dbg.net_drag_force, Vec3f::ZERO);
    assert!((body.net_force.z - expected).abs() < 0.5);

    // The dry corners sit in troughs
    for s in dbg.samples.iter().filter(|s| !s.submerged) {
        assert!(s.wave_height < 0.0, "{} at {}", s.name, s.wave_height);
        assert_eq!(s.depth, 0.0);
    }
}
