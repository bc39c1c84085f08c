use crate::domain::board::Board;
use crate::domain::coordinate::Square;
use crate::domain::models::Player;
use crate::domain::rules::attacks::is_king_in_check;
use crate::domain::rules::move_gen::generate_piece_moves;
use crate::domain::rules::{GenerationMode, MoveList};

/// Pseudo-legal destinations of the piece on `square` that keep its own king
/// out of check. Turn order is not considered here.
pub fn legal_moves(board: &Board, square: Square) -> MoveList {
    let mut moves = generate_piece_moves(board, square, GenerationMode::Full);
    moves.retain(|to| !leaves_king_in_check(board, square, *to));
    moves
}

/// Simulates a plain relocation on a copy of the board. Castling rook and
/// promotion side effects cannot change whether the mover's king is attacked.
pub fn leaves_king_in_check(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get_piece(from) else {
        return false;
    };
    let simulated = board.clone_with_move(from, to);
    is_king_in_check(&simulated, piece.owner)
}

pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|(square, _)| !legal_moves(board, square).is_empty())
}
