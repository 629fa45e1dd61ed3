use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Player, Position};

pub const WIN_SCORE: i32 = 10;

/// A mark placed for the duration of one search branch. The cell is cleared
/// when the guard drops, whatever path leaves the branch.
struct TentativeMark<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TentativeMark<'a> {
    fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        board.place(position, player);
        Self { board, position }
    }
}

impl Deref for TentativeMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TentativeMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TentativeMark<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Exhaustive minimax value of `board` from Second's point of view.
///
/// Second maximizes, First minimizes. Wins are worth `10 - depth` and losses
/// `depth - 10`, so faster wins and slower losses rank higher. The board is
/// explored in place and comes back unchanged.
pub fn score(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if board.has_won(Player::Second) {
        return WIN_SCORE - depth;
    }
    if board.has_won(Player::First) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing {
        Player::Second
    } else {
        Player::First
    };

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for position in board.available_moves() {
        let mut branch = TentativeMark::place(board, position, mover);
        let child_score = score(&mut branch, depth + 1, !maximizing);
        best_score = if maximizing {
            best_score.max(child_score)
        } else {
            best_score.min(child_score)
        };
    }

    best_score
}

/// Best cell for Second, or `None` when the board has no free cell.
///
/// Ties keep the first cell in row-major order.
pub fn best_move(board: &Board) -> Option<Position> {
    best_move_with_score(board).map(|(position, _)| position)
}

pub fn best_move_with_score(board: &Board) -> Option<(Position, i32)> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for position in available_moves {
        let mut branch = TentativeMark::place(&mut scratch, position, Player::Second);
        let move_score = score(&mut branch, 0, false);
        drop(branch);

        if best.is_none_or(|(_, best_score)| move_score > best_score) {
            best = Some((position, move_score));
        }
    }

    best
}
