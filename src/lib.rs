#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // `life::LifeError` reads fine
)]
pub mod game;
pub mod life;
pub mod turns;

pub use game::{Game, TurnSummary};
pub use life::{
    animal::{Animal, AlternatingSex, FixedSex, RandomSex, SexSource},
    board::{Board, Field},
    error::{LifeError, Result},
    legend::Legend,
    parser::BoardParser,
    types::{Sex, Species, Vector2},
};
