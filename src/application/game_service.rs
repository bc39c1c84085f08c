use crate::domain::coordinate::Square;
use crate::domain::game::{Game, GameSnapshot};
use crate::domain::models::{GameResult, HistoryStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    Selected(Square),
    Cleared,
    Moved(HistoryStep),
    Ignored,
}

/// Drives a hot-seat session the way a board front-end does: squares are
/// pressed, history is browsed, the game is restarted.
pub struct GameService {
    game: Game,
    verbose: bool,
}

impl GameService {
    pub fn new(verbose: bool) -> Self {
        Self::with_game(Game::new(), verbose)
    }

    pub fn with_game(game: Game, verbose: bool) -> Self {
        GameService { game, verbose }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn restart(&mut self) {
        self.game.restart();
        if self.verbose {
            eprintln!("[game] restarted");
        }
    }

    /// No selection selects; pressing the selected square clears it; pressing
    /// a legal destination moves there; anything else reselects.
    pub fn press(&mut self, square: Square) -> PressOutcome {
        if !self.game.is_started() || !square.is_valid() {
            return PressOutcome::Ignored;
        }

        let Some(selected) = self.game.selection() else {
            self.game.select_cell(square);
            return PressOutcome::Selected(square);
        };

        if selected == square {
            self.game.clear_selection();
            return PressOutcome::Cleared;
        }

        if self.game.available_moves().contains(&square) {
            if let Some(step) = self.game.move_piece(square) {
                self.game.clear_selection();
                if self.verbose {
                    eprintln!(
                        "[game] {:?} {:?} {:?} -> {:?}{}",
                        step.moved_piece.owner,
                        step.moved_piece.piece_type,
                        step.from,
                        step.to,
                        match step.captured_piece {
                            Some(p) => format!(" capturing {:?}", p.piece_type),
                            None => String::new(),
                        }
                    );
                }
                self.log_status();
                return PressOutcome::Moved(step);
            }
        }

        self.game.select_cell(square);
        PressOutcome::Selected(square)
    }

    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
    }

    pub fn history_backward(&mut self) -> bool {
        let moved = self.game.history_backward();
        if moved && self.verbose {
            eprintln!("[history] offset {}", self.game.history_offset());
        }
        moved
    }

    pub fn history_forward(&mut self) -> bool {
        let moved = self.game.history_forward();
        if moved && self.verbose {
            eprintln!("[history] offset {}", self.game.history_offset());
        }
        moved
    }

    pub fn is_game_over(&self) -> Option<GameResult> {
        match self.game.status()? {
            GameResult::InProgress => None,
            result => Some(result),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.game.snapshot())
    }

    fn log_status(&self) {
        if !self.verbose {
            return;
        }
        if let Some(result) = self.is_game_over() {
            eprintln!("[game] finished: {:?}", result);
        } else if self.game.in_check() {
            eprintln!("[game] {:?} is in check", self.game.current_turn());
        }
    }
}
