mod main_config;
mod match_config;
mod window_config;

pub use main_config::{Config, get_config_manager};
pub use match_config::{MatchConfig, RestartKey};
pub use window_config::WindowConfig;
