use itertools::Itertools;
use log::trace;

use super::{PhaseReport, TurnAction};
use crate::life::{
    animal::SexSource,
    board::{Board, Field},
};

/// Every animal steps to the first empty field in its species' movement
/// order. Animals are visited top to bottom, left to right, and each move
/// lands before the next animal looks around.
pub struct Movement;

impl TurnAction for Movement {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn execute(
        &self,
        board: &mut Board,
        _sex_source: &mut dyn SexSource,
    ) -> PhaseReport {
        let mut report = PhaseReport::default();

        let positions = board
            .animal_fields()
            .iter()
            .map(Field::position)
            .sorted_by_key(|position| (position.y, position.x))
            .collect_vec();

        for from in positions {
            let Some(animal) = board.animal_at(from) else {
                continue;
            };

            let Some(to) = board
                .first_relative_field_where(
                    from,
                    animal.movement_order(),
                    Field::is_empty,
                )
                .map(Field::position)
            else {
                trace!("{animal} at {from} has nowhere to go");
                continue;
            };

            if board.relocate(from, to) {
                trace!("{animal} moves {from} -> {to}");
                report.moved += 1;
            }
        }

        report
    }
}
