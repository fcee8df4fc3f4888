//! An agent to play the game of Connect 4

use crate::board::{Board, Cell};
use crate::evaluation::{score_position, CENTER_COLUMN};
use crate::transposition_table::TranspositionTable;
use crate::WIDTH;

/// Score of a position the agent has won
pub const WIN_SCORE: i32 = i32::MAX;
/// Score of a position the opponent has won
pub const LOSS_SCORE: i32 = i32::MIN;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// Default look-ahead depth in plies
pub const DEFAULT_DEPTH: u8 = 7;

/// Fixed column preferences for the first two plies of a game, middle
/// columns first
pub const OPENING_BOOK: [usize; WIDTH] = [3, 2, 4, 1, 5, 0, 6];

/// Returns the playable columns sorted by distance from the centre column,
/// nearest first; ties keep their ascending column order
fn ordered_columns(board: &Board) -> Vec<usize> {
    let mut columns = board.valid_columns();
    columns.sort_by_key(|&column| (CENTER_COLUMN as i32 - column as i32).abs());
    columns
}

/// An agent to play Connect 4 positions
///
/// # Notes
/// The agent looks ahead a fixed number of plies with minimax and
/// alpha-beta pruning. Leaf positions are scored with the windowed
/// heuristic and every interior result is memoised by exact position and
/// remaining depth.
///
/// # Position Scoring
/// A position the agent has won scores [`WIN_SCORE`], a lost one
/// [`LOSS_SCORE`] and a draw scores 0; anything else takes a bounded
/// heuristic value. Scores always refer to the agent's own side, no matter
/// whose turn it is at the node being scored.
#[derive(Clone)]
pub struct Solver {
    piece: Cell,
    depth: u8,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
    transposition_table: TranspositionTable,
}

impl Solver {
    /// Creates a new `Solver` playing `piece`
    pub fn new(piece: Cell) -> Self {
        Self {
            piece,
            depth: DEFAULT_DEPTH,
            node_count: 0,
            transposition_table: TranspositionTable::new(),
        }
    }

    /// Creates a new `Solver` playing `piece` with a given transposition table
    pub fn new_with_transposition_table(
        piece: Cell,
        transposition_table: TranspositionTable,
    ) -> Self {
        Self {
            piece,
            depth: DEFAULT_DEPTH,
            node_count: 0,
            transposition_table,
        }
    }

    /// Sets the look-ahead depth of an existing `Solver`
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Forgets all cached positions, to be called between games
    pub fn new_game(&mut self) {
        self.transposition_table.clear();
        self.node_count = 0;
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    /// Picks a column for the agent to play in the given position
    ///
    /// The first two plies of a game are answered from the opening book
    /// without searching; afterwards the position is searched at the
    /// configured depth. Returns `None` only for terminal positions.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        if board.num_pieces() < 2 {
            return OPENING_BOOK
                .iter()
                .copied()
                .find(|&column| board.is_valid_move(column));
        }

        let (column, _score) = self.search(board, self.depth, LOSS_SCORE, WIN_SCORE, true);
        column
    }

    /// Performs the game tree search
    ///
    /// Returns the chosen column and its score. The column is `None` when
    /// the position is terminal or the depth is exhausted, so nothing was
    /// left to choose.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        if let Some(entry) = self.transposition_table.get(board, depth) {
            return (entry.column, entry.score);
        }

        let columns = ordered_columns(board);

        if depth == 0 || board.is_terminal() {
            if board.has_four(self.piece) {
                return (None, WIN_SCORE);
            }
            if board.has_four(self.piece.opponent()) {
                return (None, LOSS_SCORE);
            }
            if columns.is_empty() {
                return (None, DRAW_SCORE);
            }
            // depth exhausted on a live position
            return (None, score_position(board, self.piece));
        }

        let acting = if maximizing {
            self.piece
        } else {
            self.piece.opponent()
        };

        // the first ordered column stands in until a child improves on it
        let mut column = columns.first().copied();
        let mut best = if maximizing { LOSS_SCORE } else { WIN_SCORE };

        for &candidate in &columns {
            let row = board.next_open_row(candidate).unwrap();
            let mut child = *board;
            child.place(row, candidate, acting);

            let (_, score) = self.search(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best {
                    best = score;
                    column = Some(candidate);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    column = Some(candidate);
                }
                beta = beta.min(best);
            }
            // a perfect opponent will never let play reach the remaining
            // columns
            if alpha >= beta {
                break;
            }
        }

        self.transposition_table.set(board, depth, column, best);
        (column, best)
    }
}
