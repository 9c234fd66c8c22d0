//! A single-ply move picker
//!
//! Plays whichever move gives the best immediate [`score_position`] for the
//! moving side, without looking at the opponent's replies.

use crate::{
    board::{Board, Side},
    error::EmptyMoveSetError,
    evaluation::score_position,
};

/// Returns the column whose resulting position scores highest for `side`,
/// keeping the lowest column among equal scores
pub fn pick_best_move(board: &Board, side: Side) -> Result<usize, EmptyMoveSetError> {
    let mut best: Option<(usize, i32)> = None;

    for column in board.valid_moves() {
        let mut next = board.clone();
        next.play(column, side);
        let score = score_position(&next, side);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((column, score)),
        }
    }

    best.map(|(column, _)| column).ok_or(EmptyMoveSetError)
}
