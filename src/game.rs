use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::{
    life::{
        animal::{RandomSex, SexSource},
        board::Board,
    },
    turns::{Breeding, Eating, Movement, PhaseReport, TurnAction},
};

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    pub turn:     u64,
    pub movement: PhaseReport,
    pub eating:   PhaseReport,
    pub breeding: PhaseReport,
}

pub struct Game {
    board:               Board,
    current_turn_number: u64,
    sex_source:          Box<dyn SexSource>,
}

impl Game {
    #[must_use]
    pub fn new(board: Board, sex_source: Box<dyn SexSource>) -> Self {
        Self {
            board,
            current_turn_number: 0,
            sex_source,
        }
    }

    /// Offspring sexes drawn from a generator seeded with `seed`.
    #[must_use]
    pub fn with_seed(board: Board, seed: u64) -> Self {
        Self::new(
            board,
            Box::new(RandomSex::new(StdRng::seed_from_u64(seed))),
        )
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn current_turn_number(&self) -> u64 {
        self.current_turn_number
    }

    /// Movement, then eating, then breeding, each run to completion.
    pub fn next_turn(&mut self) -> TurnSummary {
        let movement = self.run_phase(&Movement);
        let eating = self.run_phase(&Eating);
        let breeding = self.run_phase(&Breeding);

        self.current_turn_number += 1;

        TurnSummary {
            turn: self.current_turn_number,
            movement,
            eating,
            breeding,
        }
    }

    pub fn run(&mut self, turns: u64) -> Vec<TurnSummary> {
        (0..turns).map(|_| self.next_turn()).collect()
    }

    fn run_phase(&mut self, action: &dyn TurnAction) -> PhaseReport {
        let report = action.execute(&mut self.board, self.sex_source.as_mut());
        debug!(
            "turn {} {}: {:?}",
            self.current_turn_number + 1,
            action.name(),
            report
        );
        report
    }
}
