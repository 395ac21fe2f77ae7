mod breeding;
mod eating;
mod movement;

pub use breeding::Breeding;
pub use eating::Eating;
pub use movement::Movement;
use serde::Serialize;

use crate::life::{animal::SexSource, board::Board};

/// What one phase did to the board.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    pub moved:          usize,
    pub eaten:          usize,
    pub born:           usize,
    pub lost_offspring: usize,
    pub failed_matings: usize,
}

pub trait TurnAction {
    fn name(&self) -> &'static str;

    /// Runs the phase to completion, mutating `board` in place. Phases never
    /// fail: an animal with no target is simply skipped.
    fn execute(
        &self,
        board: &mut Board,
        sex_source: &mut dyn SexSource,
    ) -> PhaseReport;
}
