use crate::colors::Palette;
use common::games::tictactoe::{
    BOARD_SIZE, Outcome, Player, Position, TicTacToeGameState, WinningLine,
};
use eframe::egui;

/// Maps a pointer position to the cell under it. Points on the right or
/// bottom border belong to the last row or column.
pub fn cell_at(board_rect: egui::Rect, pointer: egui::Pos2) -> Option<Position> {
    if !board_rect.contains(pointer) {
        return None;
    }

    let cell_size = board_rect.width() / BOARD_SIZE as f32;
    let col = ((pointer.x - board_rect.left()) / cell_size) as usize;
    let row = ((pointer.y - board_rect.top()) / cell_size) as usize;
    Position::try_new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1))
}

pub fn cell_rect(board_rect: egui::Rect, position: Position) -> egui::Rect {
    let cell_size = board_rect.width() / BOARD_SIZE as f32;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + position.col as f32 * cell_size,
            board_rect.top() + position.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

/// Endpoints of the overlay drawn across a completed line. The overlay runs
/// past both end cells' centers and stops `inset` short of the board edge.
pub fn winning_line_endpoints(
    board_rect: egui::Rect,
    line: &WinningLine,
    inset: f32,
) -> [egui::Pos2; 2] {
    let start = cell_rect(board_rect, line.start).center();
    let end = cell_rect(board_rect, line.end).center();
    let direction = egui::vec2(
        (line.end.col as i32 - line.start.col as i32).signum() as f32,
        (line.end.row as i32 - line.start.row as i32).signum() as f32,
    );
    let extension = board_rect.width() / BOARD_SIZE as f32 / 2.0 - inset;
    [start - direction * extension, end + direction * extension]
}

pub struct BoardUi {
    last_hover: Option<Position>,
}

impl BoardUi {
    // Sizes for a 100 px cell, scaled with the actual cell size.
    const REFERENCE_CELL_SIZE: f32 = 100.0;
    const LINE_WIDTH: f32 = 3.0;
    const WIN_LINE_WIDTH: f32 = 10.0;
    const WIN_LINE_INSET: f32 = 15.0;
    const CIRCLE_WIDTH: f32 = 10.0;
    const CROSS_WIDTH: f32 = 15.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Draws the board and returns the cell clicked this frame, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        palette: &Palette,
    ) -> Option<Position> {
        let side = ui.available_width().min(ui.available_height());
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let scale = side / BOARD_SIZE as f32 / Self::REFERENCE_CELL_SIZE;
        let painter = ui.painter();
        let outcome = state.outcome();

        painter.rect_filled(rect, 0.0, palette.background);

        let accepts_input = !state.is_over() && !state.is_computer_turn();
        self.last_hover = response
            .hover_pos()
            .filter(|_| accepts_input)
            .and_then(|pointer| cell_at(rect, pointer))
            .filter(|&position| state.board().is_free(position));

        if let Some(position) = self.last_hover {
            painter.rect_filled(
                cell_rect(rect, position),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 40),
            );
        }

        self.draw_grid(painter, rect, palette, outcome, scale);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                let Some(player) = state.board().get(position).player() else {
                    continue;
                };
                let color = palette.mark_color(player, outcome);
                let cell = cell_rect(rect, position);
                match player {
                    Player::First => self.draw_o(painter, cell, color, scale),
                    Player::Second => self.draw_x(painter, cell, color, scale),
                }
            }
        }

        if let Some(line) = state.winning_line() {
            let endpoints = winning_line_endpoints(rect, &line, Self::WIN_LINE_INSET * scale);
            painter.line_segment(
                endpoints,
                egui::Stroke::new(
                    Self::WIN_LINE_WIDTH * scale,
                    palette.winning_line_color(line.player),
                ),
            );
        }

        if accepts_input && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pointer| cell_at(rect, pointer));
        }

        None
    }

    fn draw_grid(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        palette: &Palette,
        outcome: Outcome,
        scale: f32,
    ) {
        let stroke = egui::Stroke::new(Self::LINE_WIDTH * scale, palette.grid_color(outcome));
        let cell_size = rect.width() / BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
        }
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32, scale: f32) {
        let padding = rect.width() / 4.0;
        let stroke = egui::Stroke::new(Self::CROSS_WIDTH * scale, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
                egui::pos2(rect.right() - padding, rect.top() + padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32, scale: f32) {
        let radius = rect.width() / 3.0;
        let stroke = egui::Stroke::new(Self::CIRCLE_WIDTH * scale, color);

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

impl Default for BoardUi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_interior_points() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, egui::pos2(15.0, 25.0)), Some(Position::new(0, 0)));
        assert_eq!(cell_at(rect, egui::pos2(160.0, 170.0)), Some(Position::new(1, 1)));
        assert_eq!(cell_at(rect, egui::pos2(250.0, 30.0)), Some(Position::new(0, 2)));
        assert_eq!(cell_at(rect, egui::pos2(20.0, 300.0)), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_cell_at_borders() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, egui::pos2(110.0, 120.0)), Some(Position::new(1, 1)));
        assert_eq!(cell_at(rect, egui::pos2(310.0, 320.0)), Some(Position::new(2, 2)));
        assert_eq!(cell_at(rect, egui::pos2(10.0, 20.0)), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, egui::pos2(5.0, 50.0)), None);
        assert_eq!(cell_at(rect, egui::pos2(50.0, 330.0)), None);
    }

    #[test]
    fn test_cell_rect_matches_cell_at() {
        let rect = board_rect();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                let center = cell_rect(rect, position).center();
                assert_eq!(cell_at(rect, center), Some(position));
            }
        }
    }

    #[test]
    fn test_winning_line_endpoints_for_column() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 300.0));
        let line = WinningLine::new(Player::First, Position::new(0, 1), Position::new(2, 1));
        let [start, end] = winning_line_endpoints(rect, &line, 15.0);
        assert_eq!(start, egui::pos2(150.0, 15.0));
        assert_eq!(end, egui::pos2(150.0, 285.0));
    }

    #[test]
    fn test_winning_line_endpoints_for_anti_diagonal() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 300.0));
        let line = WinningLine::new(Player::Second, Position::new(2, 0), Position::new(0, 2));
        let [start, end] = winning_line_endpoints(rect, &line, 15.0);
        assert_eq!(start, egui::pos2(15.0, 285.0));
        assert_eq!(end, egui::pos2(285.0, 15.0));
    }
}
