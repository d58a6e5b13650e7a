use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ButtonEdge, PossessionError};

/// Identity of whoever is issuing input (a local player, a script, a bot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerId(pub Uuid);

impl ControllerId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A controller and the pawn it currently drives. `P` is the host's handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller<P> {
    pub id: ControllerId,
    pub pawn: P,
}

/// Host-side switch for a pawn's own input handling.
pub trait PawnInput<P> {
    fn set_input_enabled(&mut self, pawn: P, enabled: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PossessionState<P> {
    #[default]
    Unpossessed,
    Possessed { controller: ControllerId, previous_pawn: P },
}

/// Possession slot of a vehicle.
///
/// Boarding remembers the pawn the controller came from and hands it back on
/// exit. A second controller cannot board an occupied vehicle; without that
/// guard the first occupant's body would be lost with no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Possession<P> {
    vehicle: P,
    state: PossessionState<P>,
}

impl<P: Copy + PartialEq> Possession<P> {
    pub fn new(vehicle: P) -> Self {
        Self { vehicle, state: PossessionState::Unpossessed }
    }

    pub fn vehicle(&self) -> P {
        self.vehicle
    }

    pub fn state(&self) -> &PossessionState<P> {
        &self.state
    }

    pub fn occupant(&self) -> Option<ControllerId> {
        match self.state {
            PossessionState::Unpossessed => None,
            PossessionState::Possessed { controller, .. } => Some(controller),
        }
    }

    /// Moves `controller` into the vehicle, parking its previous pawn with input off.
    pub fn possess(
        &mut self,
        controller: &mut Controller<P>,
        input: &mut dyn PawnInput<P>,
    ) -> Result<(), PossessionError> {
        if let PossessionState::Possessed { controller: occupant, .. } = self.state {
            return Err(PossessionError::AlreadyPossessed { occupant });
        }
        let previous_pawn = controller.pawn;
        input.set_input_enabled(previous_pawn, false);
        input.set_input_enabled(self.vehicle, true);
        controller.pawn = self.vehicle;
        self.state = PossessionState::Possessed { controller: controller.id, previous_pawn };
        Ok(())
    }

    /// Handles the exit button. Acts on the press edge only; a release returns
    /// `Ok(None)` with nothing changed. On success returns the restored pawn.
    pub fn exit(
        &mut self,
        edge: ButtonEdge,
        controller: &mut Controller<P>,
        input: &mut dyn PawnInput<P>,
    ) -> Result<Option<P>, PossessionError> {
        if !edge.is_press() {
            return Ok(None);
        }
        let PossessionState::Possessed { controller: occupant, previous_pawn } = self.state else {
            return Err(PossessionError::NotPossessed);
        };
        if occupant != controller.id {
            return Err(PossessionError::NotOccupant { requester: controller.id });
        }
        input.set_input_enabled(self.vehicle, false);
        input.set_input_enabled(previous_pawn, true);
        controller.pawn = previous_pawn;
        self.state = PossessionState::Unpossessed;
        Ok(Some(previous_pawn))
    }
}
