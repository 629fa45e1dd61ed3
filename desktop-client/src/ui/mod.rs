mod board_ui;
mod status_panel;

pub use board_ui::{BoardUi, cell_at, cell_rect, winning_line_endpoints};
pub use status_panel::{render_status_panel, status_text};
