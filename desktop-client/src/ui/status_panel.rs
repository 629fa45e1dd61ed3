use crate::config::RestartKey;
use common::games::tictactoe::{GameMode, Outcome, Player, TicTacToeGameState};
use eframe::egui;

fn player_name(mode: GameMode, player: Player) -> String {
    match (mode, player) {
        (GameMode::VsComputer, Player::First) => format!("You ({})", player.symbol()),
        (GameMode::VsComputer, Player::Second) => format!("Computer ({})", player.symbol()),
        (GameMode::TwoPlayer, _) => player.to_string(),
    }
}

pub fn status_text(state: &TicTacToeGameState) -> String {
    let mode = state.mode();
    match state.outcome() {
        Outcome::Ongoing if state.is_computer_turn() => "Computer is thinking...".to_string(),
        Outcome::Ongoing => format!("{} to move", player_name(mode, state.current_player())),
        Outcome::Win(player) => format!("{} won!", player_name(mode, player)),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}

pub fn render_status_panel(
    ui: &mut egui::Ui,
    state: &TicTacToeGameState,
    restart_key: RestartKey,
    last_error: Option<&str>,
) {
    ui.vertical_centered(|ui| {
        let text = egui::RichText::new(status_text(state)).size(16.0).strong();
        match state.outcome() {
            Outcome::Ongoing => ui.label(text),
            _ => ui.colored_label(egui::Color32::GREEN, text),
        };

        let scores = state.scoreboard();
        let mode = state.mode();
        ui.label(format!(
            "{}: {}   {}: {}   Draws: {}",
            player_name(mode, Player::First),
            scores.first_wins,
            player_name(mode, Player::Second),
            scores.second_wins,
            scores.draws
        ));

        if let Some(error) = last_error {
            ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
        } else {
            ui.weak(format!("Press {} to restart", restart_key.label()));
        }
    });
}
