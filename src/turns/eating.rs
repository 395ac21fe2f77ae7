use log::trace;

use super::{PhaseReport, TurnAction};
use crate::life::{
    animal::SexSource,
    board::{Board, Field},
    types::Vector2,
};

const EATING_DIRECTIONS: [Vector2; 4] =
    [Vector2::UP, Vector2::RIGHT, Vector2::DOWN, Vector2::LEFT];

/// Every edible animal with a predator next to it is removed. Predators do
/// not move and may eat any number of neighbours in one turn.
pub struct Eating;

impl TurnAction for Eating {
    fn name(&self) -> &'static str {
        "eating"
    }

    fn execute(
        &self,
        board: &mut Board,
        _sex_source: &mut dyn SexSource,
    ) -> PhaseReport {
        let mut report = PhaseReport::default();

        for edible_field in board.edible_animal_fields() {
            let Some(edible) = edible_field.occupying_animal() else {
                continue;
            };
            let position = edible_field.position();

            let predator = board
                .first_relative_field_where(
                    position,
                    &EATING_DIRECTIONS,
                    |field| {
                        field
                            .occupying_animal()
                            .is_some_and(|other| edible.can_be_eaten_by(&other))
                    },
                )
                .map(Field::position);

            if let Some(predator) = predator {
                board.vacate(position);
                trace!("{edible} at {position} eaten by predator at {predator}");
                report.eaten += 1;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::{
        animal::FixedSex,
        display::board_rows,
        legend::Legend,
        parser::BoardParser,
        types::Sex,
    };

    fn run(rows: &[&str]) -> (Vec<String>, PhaseReport) {
        let legend = Legend::default();
        let mut board = BoardParser::new(&legend).parse(rows).unwrap();
        let report = Eating.execute(&mut board, &mut FixedSex(Sex::Male));
        (board_rows(&board, &legend).unwrap(), report)
    }

    #[test]
    fn antelope_next_to_a_predator_is_eaten() {
        for rows in [
            [".L.", ".a.", "..."],
            ["...", ".aK", "..."],
            ["...", ".A.", ".l."],
            ["...", "kA.", "..."],
        ] {
            let (rows, report) = run(&rows);
            assert_eq!(report.eaten, 1);
            assert!(!rows.concat().contains(|c: char| matches!(c, 'a' | 'A')));
        }
    }

    #[test]
    fn predator_stays_where_it_is() {
        let (rows, _) = run(&["La"]);
        assert_eq!(rows, ["L."]);
    }

    #[test]
    fn diagonal_and_distant_predators_do_not_eat() {
        let (rows, report) = run(&["L..", ".a.", "..."]);
        assert_eq!(report.eaten, 0);
        assert_eq!(rows, ["L..", ".a.", "..."]);

        let (rows, report) = run(&["L.a"]);
        assert_eq!(report.eaten, 0);
        assert_eq!(rows, ["L.a"]);
    }

    #[test]
    fn elephants_and_antelopes_do_not_eat() {
        let (rows, report) = run(&["SaA"]);
        assert_eq!(report.eaten, 0);
        assert_eq!(rows, ["SaA"]);
    }

    #[test]
    fn one_predator_can_eat_several_neighbours() {
        let (rows, report) = run(&[".a.", "aKA", ".A."]);
        assert_eq!(report.eaten, 4);
        assert_eq!(rows, ["...", ".K.", "..."]);
    }

    #[test]
    fn edible_count_never_grows() {
        let legend = Legend::default();
        let mut board = BoardParser::new(&legend)
            .parse(&crate::life::input::DEFAULT_BOARD)
            .unwrap();
        let before = board.edible_animal_fields().len();

        let report = Eating.execute(&mut board, &mut FixedSex(Sex::Male));
        assert_eq!(board.edible_animal_fields().len(), before - report.eaten);
    }
}
