use anyhow::{anyhow, Result};

use std::fmt;

use crate::{error::InvalidMoveError, HEIGHT, WIDTH, WINDOW_LENGTH};

/// One of the two players
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Computer => 'C',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Cell::Human,
            Side::Computer => Cell::Computer,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

// (row step, column step) of the four line orientations: horizontal, vertical, diagonal / and diagonal \
static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A Connect 4 grid
///
/// Row 0 is the bottom row. Pieces in a column always form a contiguous run
/// starting at row 0; every mutation goes through [`Board::drop`] or
/// [`Board::play`], which only ever fill the lowest empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT], // cells are stored bottom-to-top, left-to-right
    heights: [usize; WIDTH],
    num_moves: usize,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
        }
    }

    /// Builds a position from a string of 1-indexed column numbers, with the
    /// sides alternating and `first` placing the first piece
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Side) -> Result<Self> {
        let mut board = Self::new();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.has_won(side.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.drop(column - 1, side)?;
                    side = side.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a position from text rows listed top row first, using `.` for
    /// an empty cell, `H` for a human piece and `C` for a computer piece
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, found {}", HEIGHT, rows.len()));
        }

        let mut board = Self::new();
        for (i, text) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let text = text.as_ref().trim();
            if text.chars().count() != WIDTH {
                return Err(anyhow!("row '{}' must have exactly {} cells", text, WIDTH));
            }
            for (column, cell_char) in text.chars().enumerate() {
                board.cells[row][column] = match cell_char {
                    '.' => Cell::Empty,
                    'H' | 'h' => Cell::Human,
                    'C' | 'c' => Cell::Computer,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", cell_char)),
                };
            }
        }

        for column in 0..WIDTH {
            let height = (0..HEIGHT)
                .take_while(|&row| !board.cells[row][column].is_empty())
                .count();
            if (height..HEIGHT).any(|row| !board.cells[row][column].is_empty()) {
                return Err(anyhow!("Invalid position, floating piece in column {}", column));
            }
            board.heights[column] = height;
            board.num_moves += height;
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Returns the lowest empty row of a column, or `None` if it is full
    pub fn next_available_row(&self, column: usize) -> Option<usize> {
        match self.heights.get(column) {
            Some(&height) if height < HEIGHT => Some(height),
            _ => None,
        }
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[HEIGHT - 1][column].is_empty()
    }

    /// The playable columns in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.is_valid_move(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    /// Drops a piece for `side` into `column`, returning the row it landed in
    pub fn drop(&mut self, column: usize, side: Side) -> Result<usize, InvalidMoveError> {
        if column >= WIDTH {
            return Err(InvalidMoveError::OutOfRange { column });
        }
        let row = self
            .next_available_row(column)
            .ok_or(InvalidMoveError::ColumnFull { column })?;
        self.play(column, side);
        Ok(row)
    }

    /// Drops a piece without checking the column, which must be valid
    pub fn play(&mut self, column: usize, side: Side) {
        debug_assert!(self.is_valid_move(column));
        self.cells[self.heights[column]][column] = side.into();
        self.heights[column] += 1;
        self.num_moves += 1;
    }

    /// Iterates over every line of [`WINDOW_LENGTH`] cells in all four orientations
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(row_step, column_step)| {
            (0..HEIGHT).flat_map(move |row| {
                (0..WIDTH).filter_map(move |column| self.window(row, column, row_step, column_step))
            })
        })
    }

    fn window(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
    ) -> Option<[Cell; WINDOW_LENGTH]> {
        let span = WINDOW_LENGTH as isize - 1;
        let end_row = row as isize + row_step * span;
        let end_column = column as isize + column_step * span;
        if end_row < 0 || end_row >= HEIGHT as isize || end_column >= WIDTH as isize {
            return None;
        }

        let mut window = [Cell::Empty; WINDOW_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = row as isize + row_step * i as isize;
            let c = column as isize + column_step * i as isize;
            *cell = self.cells[r as usize][c as usize];
        }
        Some(window)
    }

    /// Whether `side` has four in a row anywhere on the board
    pub fn has_won(&self, side: Side) -> bool {
        let piece = Cell::from(side);
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == piece))
    }

    /// Whether the game has ended, by a win for either side or a full board
    pub fn is_terminal(&self) -> bool {
        self.has_won(Side::Human) || self.has_won(Side::Computer) || self.valid_moves().is_empty()
    }

    pub fn state(&self) -> GameState {
        if self.has_won(Side::Human) {
            GameState::HumanWin
        } else if self.has_won(Side::Computer) {
            GameState::ComputerWin
        } else if self.valid_moves().is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
