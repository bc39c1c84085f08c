use crate::domain::board::Board;
use crate::domain::coordinate::Square;
use crate::domain::models::{PieceType, Player};
use crate::domain::rules::GenerationMode;
use crate::domain::rules::move_gen::generate_piece_moves;

/// True if any piece of `defender`'s opponent reaches `square` with its raw
/// attack pattern.
pub fn is_square_attacked(board: &Board, square: Square, defender: Player) -> bool {
    let attacker = defender.opponent();
    board.pieces_of(attacker).any(|(origin, _)| {
        generate_piece_moves(board, origin, GenerationMode::RawOnly).contains(&square)
    })
}

/// A missing king is never in check.
pub fn is_king_in_check(board: &Board, player: Player) -> bool {
    match find_king(board, player) {
        Some(king) => is_square_attacked(board, king, player),
        None => false,
    }
}

pub fn find_king(board: &Board, player: Player) -> Option<Square> {
    board
        .pieces_of(player)
        .find(|(_, p)| p.piece_type == PieceType::King)
        .map(|(sq, _)| sq)
}
