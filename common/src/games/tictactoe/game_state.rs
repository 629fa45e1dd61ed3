use rand::Rng;

use super::board::Board;
use super::bot_controller::best_move_with_score;
use super::types::{FirstPlayerMode, GameMode, Outcome, Player, Position, WinningLine};
use crate::debug_log;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::First) => self.first_wins += 1,
            Outcome::Win(Player::Second) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

/// One board plus the turn, outcome and score bookkeeping around it.
///
/// In [`GameMode::VsComputer`] the computer always plays [`Player::Second`].
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    first_player_mode: FirstPlayerMode,
    current_player: Player,
    outcome: Outcome,
    last_move: Option<Position>,
    scoreboard: Scoreboard,
}

impl TicTacToeGameState {
    pub fn new<R: Rng + ?Sized>(
        mode: GameMode,
        first_player_mode: FirstPlayerMode,
        rng: &mut R,
    ) -> Self {
        Self {
            board: Board::new(),
            mode,
            first_player_mode,
            current_player: first_player_mode.pick(rng),
            outcome: Outcome::Ongoing,
            last_move: None,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Outcome::Win(player) => self.board.winning_line(player),
            _ => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.outcome == Outcome::Ongoing
            && self.current_player == Player::Second
    }

    /// Places the current human player's mark.
    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.is_computer_turn() {
            return Err("Not your turn".to_string());
        }

        if Position::try_new(position.row, position.col).is_none() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_free(position) {
            return Err("Cell is already marked".to_string());
        }

        self.apply_move(position);
        Ok(())
    }

    /// Plays the computer's reply if it is the computer's turn.
    pub fn play_computer_turn(&mut self) -> Option<Position> {
        if !self.is_computer_turn() {
            return None;
        }

        let (position, score) = best_move_with_score(&self.board)?;
        debug_log!("Computer plays {} with score {}", position, score);
        self.apply_move(position);
        Some(position)
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.reset();
        self.current_player = self.first_player_mode.pick(rng);
        self.outcome = Outcome::Ongoing;
        self.last_move = None;
    }

    fn apply_move(&mut self, position: Position) {
        self.board.place(position, self.current_player);
        self.last_move = Some(position);
        self.outcome = self.board.evaluate_outcome();

        if self.outcome.is_over() {
            self.scoreboard.record(self.outcome);
        } else {
            self.current_player = self.current_player.opponent();
        }
    }
}
