use std::collections::HashMap;

use log::trace;

use super::{PhaseReport, TurnAction};
use crate::life::{
    animal::{Animal, SexSource},
    board::{Board, Field},
    types::Vector2,
};

const MALE_PRIORITY: [Vector2; 4] =
    [Vector2::UP, Vector2::RIGHT, Vector2::LEFT, Vector2::DOWN];

const OFFSPRING_DIRECTIONS: [Vector2; 4] =
    [Vector2::UP, Vector2::DOWN, Vector2::LEFT, Vector2::RIGHT];

/// Each female tries the first male next to her, at most once per turn.
/// Offspring go to the first empty field around the mother; with no room
/// they are lost. Animals born this phase take no part until next turn.
pub struct Breeding;

impl TurnAction for Breeding {
    fn name(&self) -> &'static str {
        "breeding"
    }

    fn execute(
        &self,
        board: &mut Board,
        sex_source: &mut dyn SexSource,
    ) -> PhaseReport {
        let mut report = PhaseReport::default();

        let females = board.female_animal_fields();
        let males: HashMap<Vector2, Animal> = board
            .male_animal_fields()
            .iter()
            .filter_map(|field| {
                field
                    .occupying_animal()
                    .map(|animal| (field.position(), animal))
            })
            .collect();

        for female_field in females {
            let Some(female) = female_field.occupying_animal() else {
                continue;
            };
            let mother = female_field.position();

            let Some(male) = board
                .first_relative_field_where(mother, &MALE_PRIORITY, |field| {
                    males.contains_key(&field.position())
                })
                .and_then(|field| males.get(&field.position()).copied())
            else {
                continue;
            };

            let Some(child) = female.breed_with(&male, sex_source) else {
                trace!("{female} at {mother} cannot breed with {male}");
                report.failed_matings += 1;
                continue;
            };

            let Some(nursery) = board
                .first_relative_field_where(
                    mother,
                    &OFFSPRING_DIRECTIONS,
                    Field::is_empty,
                )
                .map(Field::position)
            else {
                trace!("no room for {child} next to {mother}");
                report.lost_offspring += 1;
                continue;
            };

            if board.place(nursery, child) {
                trace!("{child} born at {nursery}");
                report.born += 1;
            }
        }

        report
    }
}
