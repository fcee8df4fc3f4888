use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::board::{Board, Cell};
use connect4_engine::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// Turn state of one console game
pub struct GameSession {
    pub board: Board,
    pub player_one: bool,
    pub state: GameState,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player_one: true,
            state: GameState::Playing,
        }
    }

    pub fn to_move(&self) -> Cell {
        if self.player_one {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        }
    }

    /// Plays a 1-indexed column for the side to move, validating the move
    /// and advancing the game state
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        let row = self
            .board
            .next_open_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column_one_indexed))?;

        let piece = self.to_move();
        self.board.place(row, column, piece);

        self.state = if self.board.has_four(piece) {
            if self.player_one {
                GameState::PlayerOneWin
            } else {
                GameState::PlayerTwoWin
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.player_one = !self.player_one;

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, col) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
