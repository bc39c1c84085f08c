use crate::domain::board::Board;
use crate::domain::coordinate::Square;
use crate::domain::models::{GameResult, HistoryStep, PieceType, Player};
use crate::domain::rules::{MoveList, Rules};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoGame,
    BrowsingHistory,
    NoPieceAt(Square),
    NotYourTurn(Player),
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoGame => write!(f, "no game in progress"),
            GameError::BrowsingHistory => write!(f, "cannot move while browsing history"),
            GameError::NoPieceAt(sq) => write!(f, "no piece at {:?}", sq),
            GameError::NotYourTurn(p) => write!(f, "it is {:?}'s turn", p),
            GameError::IllegalMove { from, to } => {
                write!(f, "illegal move {:?} -> {:?}", from, to)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Everything a presentation layer needs to draw the session.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub board: Option<Board>,
    pub selection: Option<Square>,
    pub history: Vec<HistoryStep>,
    pub history_offset: usize,
    pub turn: Player,
    pub status: Option<GameResult>,
    pub in_check: bool,
}

/// The session aggregate root.
///
/// Owns the displayed board, the selection, the append-only move history and
/// the replay cursor. `history_offset` counts steps rolled back from the live
/// position; while it is non-zero the session is read-only and `board` shows
/// the replayed position. `turn` is the live side to move and always equals
/// the opponent of the last recorded mover (white before the first move).
#[derive(Debug, Clone, Default)]
pub struct Game {
    start: Board,
    board: Option<Board>,
    selection: Option<Square>,
    history: Vec<HistoryStep>,
    history_offset: usize,
    turn: Player,
}

impl Game {
    /// A session with no game started.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self) {
        self.start = Board::new();
        self.board = Some(self.start.clone());
        self.selection = None;
        self.history.clear();
        self.history_offset = 0;
        self.turn = Player::White;
    }

    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn history(&self) -> &[HistoryStep] {
        &self.history
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn is_browsing_history(&self) -> bool {
        self.history_offset > 0
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Selection is advisory; any square may be selected.
    pub fn select_cell(&mut self, square: Square) {
        self.selection = Some(square);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Legal destinations for the piece on `square`. Empty when no game is
    /// running, the square is empty, the piece is not on move, or history is
    /// being browsed.
    pub fn legal_moves(&self, square: Square) -> MoveList {
        let Some(board) = &self.board else {
            return MoveList::new();
        };
        if self.is_browsing_history() {
            return MoveList::new();
        }
        match board.get_piece(square) {
            Some(piece) if piece.owner == self.turn => Rules::legal_moves(board, square),
            _ => MoveList::new(),
        }
    }

    /// Legal destinations for the current selection.
    pub fn available_moves(&self) -> MoveList {
        match self.selection {
            Some(square) => self.legal_moves(square),
            None => MoveList::new(),
        }
    }

    pub fn all_legal_moves(&self) -> FxHashMap<Square, MoveList> {
        let mut all = FxHashMap::default();
        let Some(board) = &self.board else {
            return all;
        };
        for (square, _) in board.pieces_of(self.turn) {
            let moves = self.legal_moves(square);
            if !moves.is_empty() {
                all.insert(square, moves);
            }
        }
        all
    }

    /// Applies the selected piece's move to `to` without re-checking legality;
    /// destinations must come from `legal_moves`. Handles queen promotion and
    /// the castling rook. Does nothing without a game, without a selection or
    /// with an empty selected square. It is also a no-op while browsing
    /// history, a deliberate tightening: moves only append to the live
    /// position, so the history can never fork. The selection is left for the
    /// caller to clear.
    pub fn move_piece(&mut self, to: Square) -> Option<HistoryStep> {
        if self.is_browsing_history() {
            return None;
        }
        let from = self.selection?;
        let board = self.board.as_mut()?;
        let moving = board.get_piece(from)?;

        let mut placed = moving.moved();
        let mut promotion = None;
        if moving.piece_type == PieceType::Pawn && to.row == moving.owner.promotion_row() {
            promotion = Some(PieceType::Queen);
            placed.piece_type = PieceType::Queen;
        }

        let rook_move = match moving.piece_type {
            PieceType::King => Rules::castling_rook_move(moving.owner, from, to),
            _ => None,
        };
        if let Some(rook) = rook_move {
            if let Some(piece) = board.remove_piece(rook.from) {
                board.set_piece(rook.to, piece.moved());
            }
        }

        let step = HistoryStep {
            moved_piece: moving,
            captured_piece: board.get_piece(to),
            from,
            to,
            promotion,
            rook_move,
        };

        board.remove_piece(from);
        board.set_piece(to, placed);
        self.history.push(step.clone());
        self.turn = moving.owner.opponent();
        Some(step)
    }

    /// Checked move: validates `from -> to` against the legal move set, then
    /// applies it and clears the selection.
    pub fn play(&mut self, from: Square, to: Square) -> Result<HistoryStep, GameError> {
        let board = self.board.as_ref().ok_or(GameError::NoGame)?;
        if self.is_browsing_history() {
            return Err(GameError::BrowsingHistory);
        }
        let piece = board.get_piece(from).ok_or(GameError::NoPieceAt(from))?;
        if piece.owner != self.turn {
            return Err(GameError::NotYourTurn(self.turn));
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        self.select_cell(from);
        let step = self.move_piece(to).ok_or(GameError::IllegalMove { from, to })?;
        self.clear_selection();
        Ok(step)
    }

    pub fn history_backward(&mut self) -> bool {
        if self.board.is_none() || self.history_offset >= self.history.len() {
            return false;
        }
        self.history_offset += 1;
        self.refresh_board();
        true
    }

    pub fn history_forward(&mut self) -> bool {
        if self.board.is_none() || self.history_offset == 0 {
            return false;
        }
        self.history_offset -= 1;
        self.refresh_board();
        true
    }

    fn refresh_board(&mut self) {
        let applied = self.history.len() - self.history_offset;
        self.board = Some(Self::replay(&self.start, &self.history[..applied]));
    }

    /// Rebuilds a position from `start` by re-placing each recorded move, its
    /// promotion and its castling rook.
    pub fn replay(start: &Board, steps: &[HistoryStep]) -> Board {
        let mut board = start.clone();
        for step in steps {
            let mut placed = step.moved_piece.moved();
            if let Some(promotion) = step.promotion {
                placed.piece_type = promotion;
            }
            board.remove_piece(step.from);
            board.set_piece(step.to, placed);
            if let Some(rook) = step.rook_move {
                if let Some(piece) = board.remove_piece(rook.from) {
                    board.set_piece(rook.to, piece.moved());
                }
            }
        }
        board
    }

    /// Side to move in the displayed position.
    pub fn displayed_turn(&self) -> Player {
        if self.history_offset == 0 {
            return self.turn;
        }
        let applied = self.history.len() - self.history_offset;
        match applied.checked_sub(1) {
            Some(last) => self.history[last].moved_piece.owner.opponent(),
            None => Player::White,
        }
    }

    pub fn in_check(&self) -> bool {
        self.board
            .as_ref()
            .is_some_and(|board| Rules::is_king_in_check(board, self.displayed_turn()))
    }

    /// Outcome of the displayed position; `None` before a game is started.
    pub fn status(&self) -> Option<GameResult> {
        let board = self.board.as_ref()?;
        let player = self.displayed_turn();
        if Rules::has_any_legal_move(board, player) {
            return Some(GameResult::InProgress);
        }
        if Rules::is_king_in_check(board, player) {
            Some(GameResult::Checkmate(player.opponent()))
        } else {
            Some(GameResult::Stalemate)
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            selection: self.selection,
            history: self.history.clone(),
            history_offset: self.history_offset,
            turn: self.displayed_turn(),
            status: self.status(),
            in_check: self.in_check(),
        }
    }

    /// Starts a game from an arbitrary position with `turn` to move. History
    /// replay starts from this position instead of the standard setup.
    pub fn from_position(board: Board, turn: Player) -> Self {
        Self {
            start: board.clone(),
            board: Some(board),
            selection: None,
            history: Vec::new(),
            history_offset: 0,
            turn,
        }
    }
}
