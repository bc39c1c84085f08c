use hotseat_chess::application::game_service::GameService;
use hotseat_chess::config::AppConfig;
use hotseat_chess::infrastructure::console::HumanConsoleInput;
use hotseat_chess::interface::console::ConsoleInterface;
use std::env;

fn main() {
    let config = AppConfig::load();
    let args: Vec<String> = env::args().collect();

    let mut game_service = GameService::new(config.log.verbose);
    // `--new` skips the "no game" screen.
    if args.iter().skip(1).any(|a| a == "--new" || a == "-n") {
        game_service.restart();
    }

    let mut input = HumanConsoleInput::new();
    ConsoleInterface::run(game_service, &mut input, &config);
}
