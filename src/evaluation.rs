//! Windowed position scoring
//!
//! Every window of 4 tiles is scored for one side, rewarding partial
//! alignments and penalising the opponent's open threes, with a flat bonus
//! per piece in the centre column. The asymmetric weights are deliberate
//! play-strength tuning and part of the engine's observable behaviour.

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH};

/// Score for a completed window of 4
pub const WINDOW_FOUR: i32 = 100;
/// Score for 3 own pieces and an empty tile in a window
pub const WINDOW_THREE: i32 = 10;
/// Score for 2 own pieces and 2 empty tiles in a window
pub const WINDOW_TWO: i32 = 4;
/// Penalty for an opponent window of 3 with an empty tile
pub const OPPONENT_THREE_PENALTY: i32 = -8;
/// Bonus per own piece in the centre column
pub const CENTER_BONUS: i32 = 6;

/// The middle column of the board
pub const CENTER_COLUMN: usize = WIDTH / 2;

fn score_window(window: [Cell; 4], piece: Cell) -> i32 {
    let opponent = piece.opponent();

    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = 0;
    if own == 4 {
        score += WINDOW_FOUR;
    } else if own == 3 && empty == 1 {
        score += WINDOW_THREE;
    } else if own == 2 && empty == 2 {
        score += WINDOW_TWO;
    }
    if theirs == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }
    score
}

/// Scores the whole position from the perspective of `piece`
///
/// Sums the window scores over every horizontal, vertical and diagonal
/// window of 4, plus the centre-column bonus.
pub fn score_position(board: &Board, piece: Cell) -> i32 {
    let mut score = 0;

    // centre column
    for row in 0..HEIGHT {
        if board.get(row, CENTER_COLUMN) == piece {
            score += CENTER_BONUS;
        }
    }

    // horizontal
    for row in 0..HEIGHT {
        for col in 0..=WIDTH - 4 {
            let window = [
                board.get(row, col),
                board.get(row, col + 1),
                board.get(row, col + 2),
                board.get(row, col + 3),
            ];
            score += score_window(window, piece);
        }
    }

    // vertical
    for col in 0..WIDTH {
        for row in 0..=HEIGHT - 4 {
            let window = [
                board.get(row, col),
                board.get(row + 1, col),
                board.get(row + 2, col),
                board.get(row + 3, col),
            ];
            score += score_window(window, piece);
        }
    }

    // diagonal \
    for row in 0..=HEIGHT - 4 {
        for col in 0..=WIDTH - 4 {
            let window = [
                board.get(row, col),
                board.get(row + 1, col + 1),
                board.get(row + 2, col + 2),
                board.get(row + 3, col + 3),
            ];
            score += score_window(window, piece);
        }
    }

    // diagonal /
    for row in 0..=HEIGHT - 4 {
        for col in 0..=WIDTH - 4 {
            let window = [
                board.get(row + 3, col),
                board.get(row + 2, col + 1),
                board.get(row + 1, col + 2),
                board.get(row, col + 3),
            ];
            score += score_window(window, piece);
        }
    }

    score
}
