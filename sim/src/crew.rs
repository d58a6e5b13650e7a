use bevy::prelude::*;
use tracing::{debug, info, warn};

use ocean::interaction::{nearest_in_range, nearest_out_of_range};
use ocean::{
    ButtonEdge, ControlEvent, ControlInputs, Interactable, InteractOutcome, InteractionZone,
    PawnInput,
};

use crate::body::RigidBodyState;
use crate::config::{ScriptAction, ScriptStep};
use crate::scene::{CrewController, PawnControl, Vessel, VesselControls, VesselSeat, Walker};
use crate::simulation::SimClock;
use crate::Config;

/// Scripted inputs ordered by time; each fires once.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
    next: usize,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { steps, next: 0 }
    }

    /// Pops the next step whose time has come.
    pub fn next_due(&mut self, time: f32) -> Option<ScriptStep> {
        let step = *self.steps.get(self.next)?;
        if step.at > time {
            return None;
        }
        self.next += 1;
        Some(step)
    }

    pub fn finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}

/// Routes pawn input toggles onto `PawnControl` components.
struct PawnSwitches<'a, 'w, 's, 'c>(&'a mut Query<'w, 's, &'c mut PawnControl>);

impl PawnInput<Entity> for PawnSwitches<'_, '_, '_, '_> {
    fn set_input_enabled(&mut self, pawn: Entity, enabled: bool) {
        match self.0.get_mut(pawn) {
            Ok(mut control) => control.enabled = enabled,
            Err(err) => warn!(?pawn, ?err, "pawn has no input switch"),
        }
    }
}

type SeatQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, &'static RigidBodyState, &'static mut VesselSeat, &'static mut VesselControls),
    With<Vessel>,
>;

pub fn drive_controls(
    clock: Res<SimClock>,
    cfg: Res<Config>,
    mut script: ResMut<InputScript>,
    mut crew: ResMut<CrewController>,
    mut seats: SeatQuery,
    mut pawns: Query<&mut PawnControl>,
    mut walkers: Query<&mut Walker>,
) {
    while let Some(step) = script.next_due(clock.time) {
        debug!(time = clock.time, ?step, "scripted input");
        match step.action {
            ScriptAction::Throttle => steer(&crew, &mut seats, ControlEvent::Throttle(step.value)),
            ScriptAction::Steering => steer(&crew, &mut seats, ControlEvent::Steering(step.value)),
            ScriptAction::ReleaseThrottle => steer(&crew, &mut seats, ControlEvent::ReleaseThrottle),
            ScriptAction::ReleaseSteering => steer(&crew, &mut seats, ControlEvent::ReleaseSteering),
            ScriptAction::Interact => {
                let Ok(walker) = walkers.get(crew.0.pawn) else {
                    warn!("interact ignored: controller is not on foot");
                    continue;
                };
                let here = walker.position;
                let zone = InteractionZone { range: cfg.crew.interact_range };
                let nearest = nearest_in_range(here, seats.iter().map(|(e, body, ..)| (e, body.position, zone)));
                let Some((vessel, d_sq)) = nearest else {
                    let far = nearest_out_of_range(
                        here,
                        cfg.crew.interact_range,
                        cfg.crew.hint_range,
                        seats.iter().map(|(_, body, ..)| body.position),
                    );
                    match far {
                        Some(d_sq) => debug!(distance = d_sq.sqrt(), "move closer to board"),
                        None => debug!("nothing to interact with"),
                    }
                    continue;
                };
                let Ok((_, _, mut seat, _)) = seats.get_mut(vessel) else {
                    continue;
                };
                let seat: &mut dyn Interactable<Entity> = &mut seat.0;
                debug!(prompt = %seat.prompt(), ?vessel, "interactable in reach");
                match seat.interact(&mut crew.0, &mut PawnSwitches(&mut pawns)) {
                    Ok(InteractOutcome::Boarded { vehicle }) => {
                        info!(?vehicle, controller = %crew.0.id, distance = d_sq.sqrt(), "boarded vessel");
                    }
                    Err(err) => warn!(%err, ?vessel, "boarding rejected"),
                }
            }
            ScriptAction::Exit => {
                let vessel = crew.0.pawn;
                let Ok((_, body, mut seat, mut controls)) = seats.get_mut(vessel) else {
                    warn!("exit ignored: controller is not aboard a vessel");
                    continue;
                };
                match seat.exit(ButtonEdge::Pressed, &mut crew.0, &mut PawnSwitches(&mut pawns)) {
                    Ok(Some(pawn)) => {
                        // Nobody at the helm
                        **controls = ControlInputs::default();
                        if let Ok(mut walker) = walkers.get_mut(pawn) {
                            walker.position = body.position;
                        }
                        info!(?vessel, ?pawn, controller = %crew.0.id, "left vessel");
                    }
                    Ok(None) => {}
                    Err(err) => warn!(%err, ?vessel, "exit rejected"),
                }
            }
        }
    }
}

/// Applies an axis event to whatever vessel the crew currently drives.
fn steer(crew: &CrewController, seats: &mut SeatQuery, event: ControlEvent) {
    match seats.get_mut(crew.0.pawn) {
        Ok((_, _, _, mut controls)) => controls.apply(event),
        Err(_) => debug!(?event, "control input ignored on foot"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(at: f32, action: ScriptAction) -> ScriptStep {
        ScriptStep { at, action, value: 0.0 }
    }

    #[test]
    fn steps_fire_in_time_order_once() {
        let mut script = InputScript::new(vec![
            step(2.0, ScriptAction::Exit),
            step(0.5, ScriptAction::Interact),
            step(1.0, ScriptAction::Throttle),
        ]);
        assert_eq!(script.next_due(0.4), None);
        assert_eq!(script.next_due(1.5).map(|s| s.action), Some(ScriptAction::Interact));
        assert_eq!(script.next_due(1.5).map(|s| s.action), Some(ScriptAction::Throttle));
        assert_eq!(script.next_due(1.5), None);
        assert!(!script.finished());
        assert_eq!(script.next_due(10.0).map(|s| s.action), Some(ScriptAction::Exit));
        assert_eq!(script.next_due(10.0), None);
        assert!(script.finished());
    }
}
