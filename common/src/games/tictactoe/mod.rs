mod board;
mod bot_controller;
mod game_state;
mod types;

pub use board::Board;
pub use bot_controller::{WIN_SCORE, best_move, best_move_with_score, score};
pub use game_state::{Scoreboard, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, FirstPlayerMode, GameMode, Mark, Outcome, Player, Position, WinningLine,
};
