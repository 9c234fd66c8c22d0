use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use tracing::info;

use std::io::{stdout, Write};

use connect4_engine::{
    board::{Board, Cell, GameState, Side},
    HEIGHT, WIDTH,
};

/// A game in progress between the human and the computer
pub struct Game {
    board: Board,
    pub turn: Side,
    // 1-indexed columns played so far
    pub moves: String,
    pub state: GameState,
}

impl Game {
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            moves: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays a 1-indexed column for the side whose turn it is
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_valid_move(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.board.drop(column, self.turn)?;
        self.moves.push_str(&column_one_indexed.to_string());
        info!(side = ?self.turn, column = column_one_indexed, "move played");

        self.state = self.board.state();
        self.turn = self.turn.opponent();
        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.cell(row, column) {
                                Cell::Human => Color::Red,
                                Cell::Computer => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
