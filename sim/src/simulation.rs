use std::collections::HashSet;

use bevy::prelude::*;
use tracing::{debug, info, warn};

use ocean::math::heading_of;
use ocean::{step_vessel_dbg, ControlInputs, OceanField, VesselStepDebug};

use crate::body::RigidBodyState;
use crate::scene::{PawnControl, Vessel, VesselControls, VesselHull, VesselSeat, VesselTelemetry};
use crate::config::MAX_TICK_HZ;
use crate::Config;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct OceanState(pub OceanField);

/// Shortest fixed step the clock will take.
pub const MIN_STEP_DT: f32 = 1.0 / MAX_TICK_HZ as f32;

/// Fixed-step accumulator. `time` is the sim clock handed to the ocean.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimClock {
    pub acc: f32,
    pub dt: f32,
    pub time: f32,
    /// Fixed steps taken so far; `time` is derived from it.
    pub steps: u64,
}

impl SimClock {
    pub fn new(tick_hz: u32) -> Self {
        let dt = (1.0 / tick_hz.max(1) as f32).max(MIN_STEP_DT);
        Self { acc: 0.0, dt, time: 0.0, steps: 0 }
    }

    /// Banks a frame's worth of time and returns how many fixed steps are due.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt <= 0.0 {
            return 0;
        }
        self.acc += frame_dt;
        let mut steps = 0;
        while self.acc >= self.dt {
            self.acc -= self.dt;
            steps += 1;
        }
        steps
    }

    /// Ends one fixed step. Time is recomputed from the step count in f64 so
    /// it does not drift over long sessions.
    pub fn tick(&mut self) {
        self.steps += 1;
        self.time = (self.steps as f64 * f64::from(self.dt)) as f32;
    }
}

/// Vessels already warned about for lacking a rigid body.
#[derive(Debug, Default)]
pub struct MissingBodies(HashSet<Entity>);

impl MissingBodies {
    /// True the first time `entity` is seen.
    pub fn first_sighting(&mut self, entity: Entity) -> bool {
        self.0.insert(entity)
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct ReportTimer {
    pub interval: f32,
    pub next: f32,
}

impl ReportTimer {
    pub fn new(interval: f32) -> Self {
        Self { interval, next: 0.0 }
    }
}

#[allow(clippy::type_complexity)]
pub fn simulate_ocean(
    time: Res<Time>,
    cfg: Res<Config>,
    mut clock: ResMut<SimClock>,
    mut ocean: ResMut<OceanState>,
    mut missing: Local<MissingBodies>,
    mut vessels: Query<
        (
            Entity,
            Option<&mut RigidBodyState>,
            &VesselHull,
            &VesselControls,
            &PawnControl,
            &mut VesselTelemetry,
        ),
        With<Vessel>,
    >,
) {
    let steps = clock.advance(time.delta_secs());
    for _ in 0..steps {
        ocean.set_time(clock.time);
        for (entity, body, hull, controls, pawn, mut telemetry) in &mut vessels {
            let Some(mut body) = body else {
                if missing.first_sighting(entity) {
                    warn!(?entity, "vessel has no rigid body, skipping it");
                } else {
                    debug!(?entity, "vessel still has no rigid body");
                }
                continue;
            };
            // An unmanned helm does nothing
            let inputs = if pawn.enabled { controls.0 } else { ControlInputs::default() };
            let mut dbg = VesselStepDebug::default();
            step_vessel_dbg(&ocean, &hull.hull, &hull.spec, inputs, &mut *body, Some(&mut dbg));
            body.integrate(cfg.sim.gravity, clock.dt);
            telemetry.0 = dbg;
        }
        clock.tick();
    }
}

pub fn report_vessels(
    clock: Res<SimClock>,
    mut timer: ResMut<ReportTimer>,
    vessels: Query<(Entity, &RigidBodyState, &VesselTelemetry, &VesselSeat), With<Vessel>>,
) {
    if clock.time < timer.next {
        return;
    }
    while timer.next <= clock.time {
        timer.next += timer.interval;
    }
    for (entity, body, telemetry, seat) in &vessels {
        let t = &telemetry.0;
        info!(
            ?entity,
            time = clock.time,
            x = body.position.x,
            y = body.position.y,
            z = body.position.z,
            heading_deg = heading_of(body.orientation).to_degrees(),
            speed = body.velocity.length(),
            submerged = t.submerged_count,
            occupied = seat.occupant().is_some(),
            "vessel report"
        );
        debug!(
            ?entity,
            throttle = t.inputs.throttle(),
            steering = t.inputs.steering(),
            gated = t.gated,
            buoyancy = ?t.net_buoyant_force,
            drag = ?t.net_drag_force,
            thrust = ?t.forward_force,
            yaw_torque = ?t.yaw_torque,
            slope = ?t.surface_gradient,
            "vessel forces"
        );
    }
}

pub fn stop_after_duration(
    clock: Res<SimClock>,
    cfg: Res<Config>,
    mut exit: EventWriter<AppExit>,
    mut sent: Local<bool>,
) {
    let limit = cfg.sim.duration_secs;
    if limit <= 0.0 || *sent || clock.time < limit {
        return;
    }
    *sent = true;
    info!(time = clock.time, "duration reached, stopping");
    exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_banks_partial_frames() {
        let mut clock = SimClock::new(60);
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert!((clock.acc - (0.02 - 1.0 / 60.0)).abs() < 1e-6);
        assert_eq!(clock.advance(0.05), 3);
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        let clock = SimClock::new(0);
        assert_eq!(clock.dt, 1.0);
    }

    #[test]
    fn long_sessions_do_not_drift() {
        let mut clock = SimClock::new(60);
        let steps = 1_000_000u64;
        for _ in 0..steps {
            clock.tick();
        }
        let exact = steps as f64 * f64::from(clock.dt);
        assert_eq!(clock.steps, steps);
        assert!(
            (f64::from(clock.time) - exact).abs() < 2e-3,
            "clock {} vs exact {exact}",
            clock.time
        );
    }

    #[test]
    fn extreme_rate_steps_and_time_agree() {
        let mut clock = SimClock::new(MAX_TICK_HZ * 2);
        assert_eq!(clock.dt, MIN_STEP_DT);
        let steps = clock.advance(0.01);
        for _ in 0..steps {
            clock.tick();
        }
        // Every counted step moves the clock by exactly the step it was counted with
        let banked = clock.time + clock.acc;
        assert!((banked - 0.01).abs() < 1e-5, "time {} + acc {} != 0.01", clock.time, clock.acc);
    }

    #[test]
    fn missing_body_is_reported_once() {
        let mut missing = MissingBodies::default();
        let a = Entity::from_raw(7);
        let b = Entity::from_raw(8);
        assert!(missing.first_sighting(a));
        assert!(!missing.first_sighting(a));
        assert!(missing.first_sighting(b));
    }
}
