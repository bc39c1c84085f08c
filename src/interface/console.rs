use crate::application::game_service::{GameService, PressOutcome};
use crate::config::AppConfig;
use crate::domain::models::GameResult;
use crate::domain::services::{Command, CommandSource};
use crate::infrastructure::display::render_board;

const HELP: &str = "Commands: '<row> <col>' select/move, b back, f forward, n new game, \
c clear selection, j json snapshot, h help, q quit";

pub struct ConsoleInterface;

impl ConsoleInterface {
    /// Runs until the source is exhausted or asks to quit. Returns the service
    /// so callers can inspect the final session.
    pub fn run(
        mut game_service: GameService,
        source: &mut dyn CommandSource,
        config: &AppConfig,
    ) -> GameService {
        println!("{}", HELP);
        println!("{}", render_board(game_service.game(), &config.display));

        while let Some(command) = source.next_command() {
            match command {
                Command::Quit => break,
                Command::Help => {
                    println!("{}", HELP);
                    continue;
                }
                Command::Snapshot => {
                    match game_service.snapshot_json() {
                        Ok(json) => println!("{}", json),
                        Err(e) => println!("Error: {}", e),
                    }
                    continue;
                }
                Command::Restart => game_service.restart(),
                Command::Clear => game_service.clear_selection(),
                Command::Back => {
                    if !game_service.history_backward() {
                        println!("Already at the first position");
                    }
                }
                Command::Forward => {
                    if !game_service.history_forward() {
                        println!("Already at the live position");
                    }
                }
                Command::Press(square) => {
                    if let PressOutcome::Ignored = game_service.press(square) {
                        println!("No game in progress! Enter 'n' to start.");
                        continue;
                    }
                }
            }

            println!("{}", render_board(game_service.game(), &config.display));
            Self::print_status(&game_service);
        }

        game_service
    }

    fn print_status(game_service: &GameService) {
        let game = game_service.game();
        if !game.is_started() {
            return;
        }
        if game.is_browsing_history() {
            println!(
                "Viewing move {} of {} (read-only)",
                game.history().len() - game.history_offset(),
                game.history().len()
            );
        }
        match game_service.is_game_over() {
            Some(GameResult::Checkmate(p)) => println!("Checkmate! Player {:?} Wins!", p),
            Some(GameResult::Stalemate) => println!("Stalemate! It's a Draw!"),
            _ => {
                if game.in_check() {
                    println!("Player {:?} is in check!", game.displayed_turn());
                }
                println!("Player {:?}'s turn", game.displayed_turn());
            }
        }
    }
}
