use crate::domain::coordinate::Square;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row holding this player's king and rooks at the start of the game.
    pub fn back_rank(&self) -> usize {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    pub fn pawn_start_row(&self) -> usize {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// Row a pawn of this player promotes on.
    pub fn promotion_row(&self) -> usize {
        self.opponent().back_rank()
    }

    /// Row delta of a single pawn step.
    pub fn forward(&self) -> isize {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub owner: Player,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, owner: Player) -> Self {
        Self {
            piece_type,
            owner,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Companion rook displacement of a castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RookMove {
    pub from: Square,
    pub to: Square,
}

/// One applied move. `moved_piece` is the piece as it stood before moving,
/// so a promoting pawn is recorded as a pawn with `promotion` set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStep {
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
    pub rook_move: Option<RookMove>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Checkmate(Player),
    Stalemate,
    InProgress,
}
