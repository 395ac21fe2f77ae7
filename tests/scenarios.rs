//! End-to-end turns on small boards.

use ecosystem_life::{
    life::{
        display::{board_rows, render},
        input::DEFAULT_BOARD,
    },
    turns::{Breeding, Eating, Movement, TurnAction},
    AlternatingSex, Board, BoardParser, FixedSex, Game, Legend, Sex, Species,
};

fn parse(rows: &[&str]) -> Board {
    BoardParser::new(&Legend::default()).parse(rows).unwrap()
}

fn rows(game: &Game) -> Vec<String> {
    board_rows(game.board(), &Legend::default()).unwrap()
}

#[test]
fn lion_eats_the_antelope_beside_it() {
    let mut game = Game::new(parse(&["LaA"]), Box::new(FixedSex(Sex::Male)));
    let summary = game.next_turn();

    // nobody can move: the lion is boxed in by the edge and the antelope,
    // the antelopes by each other and the edge
    assert_eq!(summary.movement.moved, 0);
    assert_eq!(summary.eating.eaten, 1);
    assert_eq!(rows(&game), ["L.A"]);
}

#[test]
fn lone_antelope_pair_never_changes() {
    let mut game = Game::new(parse(&["Aa"]), Box::new(FixedSex(Sex::Female)));

    let summaries = game.run(10);

    assert_eq!(game.current_turn_number(), 10);
    assert_eq!(rows(&game), ["Aa"]);
    assert!(summaries.iter().all(|summary| summary.breeding.born == 0));
    assert!(summaries
        .iter()
        .all(|summary| summary.breeding.lost_offspring == 1));
}

#[test]
fn lion_pair_has_one_cub_below_the_mother() {
    let mut game = Game::new(parse(&["Ll", ".."]), Box::new(FixedSex(Sex::Male)));
    let summary = game.next_turn();

    assert_eq!(summary.movement.moved, 0);
    assert_eq!(summary.breeding.born, 1);
    assert_eq!(rows(&game), ["Ll", ".L"]);

    let census = game.board().census();
    assert_eq!(census.get(&(Species::Lion, Sex::Male)), Some(&2));
    assert_eq!(census.get(&(Species::Lion, Sex::Female)), Some(&1));
}

#[test]
fn phase_invariants_hold_on_the_reference_board() {
    let mut board = parse(&DEFAULT_BOARD);
    let mut sex_source = AlternatingSex::starting_with(Sex::Female);

    for _ in 0..10 {
        let before = board.population();
        let moved = Movement.execute(&mut board, &mut sex_source);
        assert_eq!(board.population(), before);
        assert!(moved.moved <= before);

        let edible_before = board.edible_animal_fields().len();
        let population_before = board.population();
        let eaten = Eating.execute(&mut board, &mut sex_source);
        assert!(board.edible_animal_fields().len() <= edible_before);
        assert_eq!(board.population(), population_before - eaten.eaten);

        let females = board.female_animal_fields().len();
        let population_before = board.population();
        let bred = Breeding.execute(&mut board, &mut sex_source);
        assert!(bred.born <= females);
        assert_eq!(board.population(), population_before + bred.born);
    }
}

#[test]
fn fixed_sex_runs_are_identical() {
    let play = || {
        let mut game =
            Game::new(parse(&DEFAULT_BOARD), Box::new(FixedSex(Sex::Male)));
        let summaries = game.run(10);
        (summaries, rows(&game))
    };

    assert_eq!(play(), play());
}

#[test]
fn rendering_tracks_turns() {
    let legend = Legend::default();
    let mut game = Game::with_seed(parse(&DEFAULT_BOARD), 7);

    let first = render(&game, &legend).unwrap();
    assert!(first.starts_with("Turn 0\n"));
    assert_eq!(first.lines().count(), 9);
    assert!(first.lines().skip(1).eq(DEFAULT_BOARD.iter().copied()));

    game.next_turn();
    let second = render(&game, &legend).unwrap();
    assert!(second.starts_with("Turn 1\n"));
    assert!(second.lines().skip(1).all(|row| row.chars().count() == 16));
}
