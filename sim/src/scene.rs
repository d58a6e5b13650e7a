use bevy::prelude::*;

use ocean::{
    BuoyancyBody, ControlInputs, Controller, ControllerId, Pose, Possession, Quatf, Vec3f,
    VesselSpec, VesselStepDebug,
};

use crate::body::RigidBodyState;
use crate::Config;

#[derive(Component)]
pub struct Vessel;

/// On-foot crew member. Not simulated; it only stands somewhere.
#[derive(Component, Debug, Clone, Copy)]
pub struct Walker {
    pub position: Vec3f,
}

/// Whether a pawn currently reacts to its own input.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PawnControl {
    pub enabled: bool,
}

#[derive(Component, Debug, Clone)]
pub struct VesselHull {
    pub hull: BuoyancyBody,
    pub spec: VesselSpec,
}

#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct VesselControls(pub ControlInputs);

#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct VesselSeat(pub Possession<Entity>);

/// Last step's diagnostics for a vessel.
#[derive(Component, Debug, Clone, Default)]
pub struct VesselTelemetry(pub VesselStepDebug);

/// The single local controller and the pawn it drives.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CrewController(pub Controller<Entity>);

/// Spawns the vessel and the crew member; returns the crew member.
pub fn spawn_scene(world: &mut World, cfg: &Config, hull: BuoyancyBody) -> Entity {
    let pose = Pose::new(cfg.sim.vessel_spawn, Quatf::IDENTITY);
    let vessel = world
        .spawn((
            Vessel,
            RigidBodyState::from_spec(&cfg.vessel.body, pose),
            VesselHull { hull, spec: cfg.vessel.clone() },
            VesselControls::default(),
            VesselTelemetry::default(),
            PawnControl { enabled: false },
        ))
        .id();
    world.entity_mut(vessel).insert(VesselSeat(Possession::new(vessel)));

    let walker = world
        .spawn((Walker { position: cfg.crew.spawn }, PawnControl { enabled: true }))
        .id();
    world.insert_resource(CrewController(Controller { id: ControllerId::new_v4(), pawn: walker }));
    walker
}
