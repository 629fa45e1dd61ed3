use common::games::tictactoe::GameMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tictactoe_client::launcher::run(GameMode::TwoPlayer)
}
