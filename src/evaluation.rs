//! Static scoring of Connect 4 positions
//!
//! A position is scored from one side's point of view by summing a bonus for
//! every piece that side holds in the center column and a score for every
//! line of [`WINDOW_LENGTH`] cells on the board (see [`evaluate_window`]).

use crate::{
    board::{Board, Cell, Side},
    CENTER_COLUMN, HEIGHT, WINDOW_LENGTH,
};

/// Score of a completed alignment
pub const FOUR_SCORE: i32 = 100;
/// Score of three pieces and one empty cell
pub const THREE_SCORE: i32 = 5;
/// Score of two pieces and two empty cells
pub const TWO_SCORE: i32 = 2;
/// Penalty applied when the opponent has three pieces and one empty cell
pub const OPPONENT_THREE_PENALTY: i32 = 4;
/// Bonus for each piece in the center column
pub const CENTER_WEIGHT: i32 = 3;

/// Scores a single line of cells from `side`'s perspective
pub fn evaluate_window(window: &[Cell; WINDOW_LENGTH], side: Side) -> i32 {
    let piece = Cell::from(side);
    let opponent_piece = Cell::from(side.opponent());

    let count = |target: Cell| window.iter().filter(|&&cell| cell == target).count();
    let (own, opponent, empty) = (count(piece), count(opponent_piece), count(Cell::Empty));

    let mut score = 0;
    if own == 4 {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if opponent == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }

    score
}

/// Heuristic value of the whole board for `side`
pub fn score_position(board: &Board, side: Side) -> i32 {
    let piece = Cell::from(side);

    let center_count = (0..HEIGHT)
        .filter(|&row| board.cell(row, CENTER_COLUMN) == piece)
        .count() as i32;

    let windows: i32 = board
        .windows()
        .map(|window| evaluate_window(&window, side))
        .sum();

    center_count * CENTER_WEIGHT + windows
}
