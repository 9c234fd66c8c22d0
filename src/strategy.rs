//! Interchangeable move-selection strategies for the computer player

use tracing::debug;

use crate::{
    board::{Board, Side},
    error::EmptyMoveSetError,
    greedy::pick_best_move,
    search::Searcher,
    DEFAULT_DEPTH,
};

/// Anything that can pick a column for a side to play
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Chooses a valid column for `side`, failing only when the board has no valid column
    fn choose_move(&self, board: &Board, side: Side) -> Result<usize, EmptyMoveSetError>;
}

/// Alpha-beta minimax search to a fixed depth
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Minimax {
    pub depth: usize,
    /// search top-level moves on separate threads
    pub parallel: bool,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(&self, board: &Board, side: Side) -> Result<usize, EmptyMoveSetError> {
        let valid_moves = board.valid_moves();
        let first = *valid_moves.first().ok_or(EmptyMoveSetError)?;

        let mut searcher = Searcher::new(self.depth);
        let result = if self.parallel {
            searcher.search_parallel(board, side)
        } else {
            searcher.search(board, side)
        };

        // no column comes back at depth 0 or once the game is decided
        let column = result.column.unwrap_or(first);
        debug!(strategy = self.name(), ?side, column, score = result.score, "move chosen");
        Ok(column)
    }
}

/// Best immediate heuristic score, one ply deep
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_move(&self, board: &Board, side: Side) -> Result<usize, EmptyMoveSetError> {
        let column = pick_best_move(board, side)?;
        debug!(strategy = self.name(), ?side, column, "move chosen");
        Ok(column)
    }
}

/// Selects a [`Strategy`] implementation by name
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    Minimax,
    Greedy,
}

impl StrategyKind {
    pub fn build(self, depth: usize, parallel: bool) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Minimax => Box::new(Minimax::new(depth).parallel(parallel)),
            StrategyKind::Greedy => Box::new(Greedy),
        }
    }
}
