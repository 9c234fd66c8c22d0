//! An adversarial search agent for Connect 4

use rayon::prelude::*;
use tracing::debug;

use std::time::Instant;

use crate::{
    board::{Board, Side},
    evaluation::score_position,
};

/// Score type used by the search; wide enough for the terminal constants
pub type Score = i64;

/// Score of a position the computer has won
pub const WIN_SCORE: Score = 100_000_000_000_000;
/// Score of a position the human has won
pub const LOSS_SCORE: Score = -WIN_SCORE;

/// The outcome of a search: the chosen column and the value of the position
///
/// `column` is `None` when no move was searched, i.e. at a depth of 0 or on a
/// board where the game is already over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

/// Depth-limited minimax search
///
/// # Notes
/// Positions are always scored from the computer's point of view: the computer
/// is the maximizing side and the human the minimizing side. Moves are tried in
/// ascending column order and a later column only replaces the current best when
/// it scores strictly better, so equal scores keep the lower column.
///
/// # Position Scoring
/// A position where the computer has four in a row scores [`WIN_SCORE`], one the
/// human has won scores [`LOSS_SCORE`] and a full board with no winner scores 0.
/// Positions reached when the depth budget runs out are scored with
/// [`score_position`] for the computer.
#[derive(Clone, Debug)]
pub struct Searcher {
    depth: usize,
    pruning: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new alpha-beta `Searcher` looking `depth` plies ahead
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            pruning: true,
            node_count: 0,
        }
    }

    /// Disables alpha-beta pruning, searching the full game tree to the same depth
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Searches for the best move of `side` on `board`
    pub fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        let start = Instant::now();
        let result = self.minimax(
            board,
            self.depth,
            Score::MIN,
            Score::MAX,
            side == Side::Computer,
        );
        self.log_result(&result, start);
        result
    }

    /// Searches for the best move of `side`, exploring each top-level move on its own thread
    ///
    /// Produces the same result as [`Searcher::search`].
    pub fn search_parallel(&mut self, board: &Board, side: Side) -> SearchResult {
        if self.depth == 0 || board.is_terminal() {
            return self.search(board, side);
        }

        let start = Instant::now();
        let maximizing = side == Side::Computer;
        let depth = self.depth;
        let template = Self {
            node_count: 0,
            ..self.clone()
        };
        self.node_count += 1;

        // collect preserves the ascending column order for the tie-break below
        let children: Vec<(usize, Score, usize)> = board
            .valid_moves()
            .into_par_iter()
            .map(|column| {
                let mut next = template.clone();
                let mut child = board.clone();
                child.play(column, side);
                let result = next.minimax(&child, depth - 1, Score::MIN, Score::MAX, !maximizing);
                (column, result.score, next.node_count)
            })
            .collect();

        let mut best: Option<(usize, Score)> = None;
        for (column, score, nodes) in children {
            self.node_count += nodes;
            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((column, score));
            }
        }

        let result = match best {
            Some((column, score)) => SearchResult {
                column: Some(column),
                score,
            },
            None => SearchResult {
                column: None,
                score: 0,
            },
        };
        self.log_result(&result, start);
        result
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move and the score of the position
    /// (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let valid_moves = board.valid_moves();
        if depth == 0 || board.is_terminal() {
            return SearchResult {
                column: None,
                score: Self::leaf_score(board),
            };
        }

        let side = if maximizing { Side::Computer } else { Side::Human };
        // the first valid column stands until a strictly better one is found
        let mut column = valid_moves[0];
        let mut value = if maximizing { Score::MIN } else { Score::MAX };

        for &candidate in valid_moves.iter() {
            let mut next = board.clone();
            next.play(candidate, side);
            let score = self
                .minimax(&next, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > value {
                    value = score;
                    column = candidate;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = candidate;
                }
                beta = beta.min(value);
            }

            // the opponent will never allow this line, stop exploring it
            if self.pruning && alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(column),
            score: value,
        }
    }

    fn leaf_score(board: &Board) -> Score {
        if board.has_won(Side::Computer) {
            WIN_SCORE
        } else if board.has_won(Side::Human) {
            LOSS_SCORE
        } else if board.valid_moves().is_empty() {
            0
        } else {
            score_position(board, Side::Computer) as Score
        }
    }

    fn log_result(&self, result: &SearchResult, start: Instant) {
        debug!(
            column = ?result.column,
            score = result.score,
            depth = self.depth,
            nodes = self.node_count,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "search complete"
        );
    }
}

/// Chooses a move for `side` with an alpha-beta search `depth` plies deep
pub fn choose_move(board: &Board, side: Side, depth: usize) -> SearchResult {
    Searcher::new(depth).search(board, side)
}
