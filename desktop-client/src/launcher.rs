use crate::app::TicTacToeApp;
use crate::config::{Config, get_config_manager};
use clap::Parser;
use common::config::ConfigManager;
use common::games::tictactoe::GameMode;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Tic-tac-toe on a 3x3 board")]
pub struct Args {
    /// Prefix every log line with the game variant
    #[arg(long)]
    use_log_prefix: bool,

    /// Also log debug lines, such as the computer's search scores
    #[arg(long)]
    verbose: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn window_title(mode: GameMode) -> &'static str {
    match mode {
        GameMode::TwoPlayer => "Multiplayer tic-tac-toe",
        GameMode::VsComputer => "Tic Tac Toe vs. AI",
    }
}

fn log_prefix(mode: GameMode) -> &'static str {
    match mode {
        GameMode::TwoPlayer => "TwoPlayer",
        GameMode::VsComputer => "VsComputer",
    }
}

fn load_config(path: Option<PathBuf>) -> Config {
    let result: Result<Config, String> = match path {
        Some(path) => ConfigManager::from_yaml_file(path).get_config(),
        None => get_config_manager().get_config(),
    };

    result.unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

pub fn run(mode: GameMode) -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some(log_prefix(mode).to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = load_config(args.config);
    let match_config = config.match_config(mode);
    let title = window_title(mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size())
            .with_resizable(false)
            .with_title(title),
        ..Default::default()
    };

    log!("Starting {}", title);

    let status_height = config.window.status_height;
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TicTacToeApp::new(
                mode,
                &match_config,
                status_height,
            )))
        }),
    )?;

    log!("{} closed", title);

    Ok(())
}
