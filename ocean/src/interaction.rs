//! Interaction lookup: press a button near something to use it.
//!
//! Candidates carry an [`InteractionZone`]; hosts gather `(id, position, zone)`
//! triples from their spatial index and ask for the nearest one in reach. Only
//! entities that are [`Interactable`] are ever offered, so dispatch needs no
//! runtime capability probing.

use crate::{Controller, PawnInput, Possession, PossessionError, Vec3f};

/// Reach of an interactable, measured from its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionZone {
    pub range: f32,
}

/// What happened when an interactable was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome<P> {
    /// The instigator now drives this pawn.
    Boarded { vehicle: P },
}

/// Something a controller can use by pressing interact next to it.
pub trait Interactable<P> {
    /// On-screen hint shown while in range.
    fn prompt(&self) -> String;

    fn interact(
        &mut self,
        instigator: &mut Controller<P>,
        input: &mut dyn PawnInput<P>,
    ) -> Result<InteractOutcome<P>, PossessionError>;
}

/// A vehicle seat is interactable: using it boards the vehicle.
impl<P: Copy + PartialEq> Interactable<P> for Possession<P> {
    fn prompt(&self) -> String {
        match self.occupant() {
            None => "Press E to board".into(),
            Some(_) => "Occupied".into(),
        }
    }

    fn interact(
        &mut self,
        instigator: &mut Controller<P>,
        input: &mut dyn PawnInput<P>,
    ) -> Result<InteractOutcome<P>, PossessionError> {
        self.possess(instigator, input)?;
        Ok(InteractOutcome::Boarded { vehicle: self.vehicle() })
    }
}

/// Nearest candidate within its own range of `pos`. Returns `(id, distance²)`.
/// On equal distances the earlier candidate wins.
pub fn nearest_in_range<I>(pos: Vec3f, candidates: impl IntoIterator<Item = (I, Vec3f, InteractionZone)>) -> Option<(I, f32)> {
    let mut nearest: Option<(I, f32)> = None;
    for (id, at, zone) in candidates {
        let d_sq = (at - pos).length_squared();
        if d_sq > zone.range * zone.range {
            continue;
        }
        if nearest.as_ref().map_or(true, |(_, best)| d_sq < *best) {
            nearest = Some((id, d_sq));
        }
    }
    nearest
}

/// Squared distance to the nearest candidate beyond `interact_range` but within
/// `hint_range`, for a "move closer" hint.
pub fn nearest_out_of_range(
    pos: Vec3f,
    interact_range: f32,
    hint_range: f32,
    candidates: impl IntoIterator<Item = Vec3f>,
) -> Option<f32> {
    let range_sq = interact_range * interact_range;
    let hint_sq = hint_range * hint_range;
    candidates
        .into_iter()
        .map(|at| (at - pos).length_squared())
        .filter(|d_sq| *d_sq > range_sq && *d_sq < hint_sq)
        .min_by(|a, b| a.total_cmp(b))
}
