use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    /// Side of the square board in logical pixels.
    pub board_size: f32,
    pub status_height: f32,
}

impl WindowConfig {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.board_size, self.board_size + self.status_height]
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(150.0..=900.0).contains(&self.board_size) {
            return Err(format!(
                "board_size must be between 150 and 900, got {}",
                self.board_size
            ));
        }
        if !(0.0..=200.0).contains(&self.status_height) {
            return Err(format!(
                "status_height must be between 0 and 200, got {}",
                self.status_height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            board_size: 300.0,
            status_height: 72.0,
        }
    }
}
