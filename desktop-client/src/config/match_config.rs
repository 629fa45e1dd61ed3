use common::games::tictactoe::FirstPlayerMode;
use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RestartKey {
    Space,
    R,
    Enter,
}

impl RestartKey {
    pub fn to_egui_key(self) -> egui::Key {
        match self {
            RestartKey::Space => egui::Key::Space,
            RestartKey::R => egui::Key::R,
            RestartKey::Enter => egui::Key::Enter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RestartKey::Space => "Space",
            RestartKey::R => "R",
            RestartKey::Enter => "Enter",
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct MatchConfig {
    pub first_player: FirstPlayerMode,
    pub restart_key: RestartKey,
}

impl MatchConfig {
    pub fn two_player() -> Self {
        Self {
            first_player: FirstPlayerMode::First,
            restart_key: RestartKey::Space,
        }
    }

    pub fn vs_computer() -> Self {
        Self {
            first_player: FirstPlayerMode::First,
            restart_key: RestartKey::R,
        }
    }
}
