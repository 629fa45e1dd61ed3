use crate::colors::Palette;
use crate::config::{MatchConfig, RestartKey};
use crate::ui::{BoardUi, render_status_panel};
use common::games::tictactoe::{GameMode, Outcome, Position, TicTacToeGameState};
use common::{debug_log, log};
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct TicTacToeApp {
    state: TicTacToeGameState,
    board_ui: BoardUi,
    palette: Palette,
    restart_key: RestartKey,
    status_height: f32,
    rng: StdRng,
    last_error: Option<String>,
}

impl TicTacToeApp {
    pub fn new(mode: GameMode, match_config: &MatchConfig, status_height: f32) -> Self {
        let mut rng = StdRng::from_os_rng();
        let state = TicTacToeGameState::new(mode, match_config.first_player, &mut rng);
        log!("New game, {} moves first", state.current_player());

        Self {
            state,
            board_ui: BoardUi::new(),
            palette: Palette::for_mode(mode),
            restart_key: match_config.restart_key,
            status_height,
            rng,
            last_error: None,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let restart_key = self.restart_key.to_egui_key();
        let over = self.state.is_over();
        let restart = ctx.input(|i| {
            i.key_pressed(restart_key) || (over && i.key_pressed(egui::Key::Space))
        });

        if restart {
            self.state.restart(&mut self.rng);
            self.last_error = None;
            log!("Board reset, {} moves first", self.state.current_player());
        }
    }

    fn handle_click(&mut self, position: Position) {
        let player = self.state.current_player();
        match self.state.place_mark(position) {
            Ok(()) => {
                self.last_error = None;
                debug_log!("{} played {}", player, position);
                self.log_if_over();
            }
            Err(e) => {
                debug_log!("Rejected click on {}: {}", position, e);
                self.last_error = Some(e);
            }
        }
    }

    fn play_computer_turn(&mut self) {
        if let Some(position) = self.state.play_computer_turn() {
            log!("Computer played {}", position);
            self.log_if_over();
        }
    }

    fn log_if_over(&self) {
        match self.state.outcome() {
            Outcome::Ongoing => {}
            Outcome::Win(player) => log!("{} won", player),
            Outcome::Draw => log!("Draw"),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        if self.state.is_computer_turn() {
            self.play_computer_turn();
        }

        egui::TopBottomPanel::bottom("status")
            .exact_height(self.status_height)
            .show(ctx, |ui| {
                render_status_panel(ui, &self.state, self.restart_key, self.last_error.as_deref());
            });

        let clicked = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.palette.background))
            .show(ctx, |ui| self.board_ui.render(ui, &self.state, &self.palette))
            .inner;

        if let Some(position) = clicked {
            self.handle_click(position);
            if self.state.is_computer_turn() {
                self.play_computer_turn();
            }
            ctx.request_repaint();
        }
    }
}
