pub mod attacks;
pub mod calculators;
pub mod legality;
pub mod move_gen;

use smallvec::SmallVec;

use crate::domain::board::Board;
use crate::domain::coordinate::Square;
use crate::domain::models::{Player, RookMove};

pub use move_gen::CastlingSide;

pub type MoveList = SmallVec<[Square; 32]>;

/// What a move-generation request may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// Every pseudo-legal destination, castling included.
    Full,
    /// Same destinations as `Full` minus castling, which keeps attack
    /// detection from re-entering itself through the enemy king.
    RawOnly,
}

pub struct Rules;

impl Rules {
    pub fn pseudo_legal_moves(board: &Board, square: Square, mode: GenerationMode) -> MoveList {
        move_gen::generate_piece_moves(board, square, mode)
    }

    pub fn legal_moves(board: &Board, square: Square) -> MoveList {
        legality::legal_moves(board, square)
    }

    pub fn leaves_king_in_check(board: &Board, from: Square, to: Square) -> bool {
        legality::leaves_king_in_check(board, from, to)
    }

    pub fn is_square_attacked(board: &Board, square: Square, defender: Player) -> bool {
        attacks::is_square_attacked(board, square, defender)
    }

    pub fn is_king_in_check(board: &Board, player: Player) -> bool {
        attacks::is_king_in_check(board, player)
    }

    pub fn find_king(board: &Board, player: Player) -> Option<Square> {
        attacks::find_king(board, player)
    }

    pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
        legality::has_any_legal_move(board, player)
    }

    pub fn castling_rook_move(player: Player, from: Square, to: Square) -> Option<RookMove> {
        move_gen::castling_rook_move(player, from, to)
    }
}
