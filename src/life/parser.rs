use log::debug;

use super::{
    animal::Animal,
    board::Board,
    error::{LifeError, Result},
    legend::Legend,
    types::Vector2,
};

pub struct BoardParser<'a> {
    legend: &'a Legend,
}

impl<'a> BoardParser<'a> {
    #[must_use]
    pub const fn new(legend: &'a Legend) -> Self {
        Self { legend }
    }

    /// Builds a board from equal-width text rows.
    ///
    /// # Errors
    ///
    /// Fails on empty input, on a row whose width differs from the first
    /// row, and on any symbol the legend does not know.
    pub fn parse<S: AsRef<str>>(&self, input: &[S]) -> Result<Board> {
        let first = input.first().ok_or(LifeError::EmptyInput)?;
        let width = first.as_ref().chars().count();

        if let Some((row, actual)) = input
            .iter()
            .map(|row| row.as_ref().chars().count())
            .enumerate()
            .find(|&(_, actual)| actual != width)
        {
            return Err(LifeError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }

        let mut board = Board::new(width, input.len());

        for (y, row) in input.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if symbol == self.legend.empty_field_symbol() {
                    continue;
                }

                let key = self.legend.key_from_symbol(symbol).ok_or(
                    LifeError::UnknownSymbol {
                        symbol,
                        row: y,
                        column: x,
                    },
                )?;

                #[allow(clippy::cast_possible_wrap)]
                let position = Vector2::new(x as i64, y as i64);
                board.place(position, Animal::new(key.species, key.sex));
            }
        }

        debug!(
            "parsed {}x{} board with {} animals",
            board.width(),
            board.height(),
            board.population()
        );

        Ok(board)
    }
}
