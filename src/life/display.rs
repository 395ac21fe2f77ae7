use std::fmt::Write;

use super::{
    board::{Board, Field},
    error::{LifeError, Result},
    legend::Legend,
};
use crate::game::Game;

fn field_symbol(field: &Field, legend: &Legend) -> Result<char> {
    field.occupying_animal().map_or(
        Ok(legend.empty_field_symbol()),
        |animal| {
            legend.key_for(&animal).map(|key| key.symbol).ok_or(
                LifeError::MissingLegendKey {
                    species: animal.species(),
                    sex:     animal.sex(),
                },
            )
        },
    )
}

/// One string per row, top row first.
///
/// # Errors
///
/// Fails if the legend has no symbol for an animal on the board.
pub fn board_rows(board: &Board, legend: &Legend) -> Result<Vec<String>> {
    let width = usize::try_from(board.width()).unwrap_or_default();
    if width == 0 {
        return Ok(Vec::new());
    }

    board
        .all_fields()
        .chunks(width)
        .map(|row| row.iter().map(|field| field_symbol(field, legend)).collect())
        .collect()
}

/// `Turn N` followed by the board.
///
/// # Errors
///
/// Fails if the legend has no symbol for an animal on the board.
pub fn render(game: &Game, legend: &Legend) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Turn {}", game.current_turn_number())?;
    for row in board_rows(game.board(), legend)? {
        writeln!(out, "{row}")?;
    }
    Ok(out)
}
