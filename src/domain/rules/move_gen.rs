use crate::domain::board::Board;
use crate::domain::coordinate::Square;
use crate::domain::models::{Piece, PieceType, Player, RookMove};
use crate::domain::rules::attacks::is_square_attacked;
use crate::domain::rules::calculators::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, Offset, ROOK_DIRECTIONS,
    pawn_capture_offsets, queen_directions,
};
use crate::domain::rules::{GenerationMode, MoveList};

pub const KING_HOME_COL: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    pub fn rook_col(&self) -> usize {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub fn king_target_col(&self) -> usize {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    pub fn rook_target_col(&self) -> usize {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    fn between_cols(&self) -> &'static [usize] {
        match self {
            CastlingSide::KingSide => &[5, 6],
            CastlingSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    fn king_path_cols(&self) -> &'static [usize] {
        match self {
            CastlingSide::KingSide => &[5, 6],
            CastlingSide::QueenSide => &[3, 2],
        }
    }
}

/// Destinations reachable by the piece on `square` under its movement rule,
/// without regard to the safety of its own king. Empty squares yield nothing.
pub fn generate_piece_moves(board: &Board, square: Square, mode: GenerationMode) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get_piece(square) else {
        return moves;
    };
    let player = piece.owner;

    match piece.piece_type {
        PieceType::Pawn => generate_pawn_moves(board, square, player, &mut moves),
        PieceType::Knight => {
            generate_leaper_moves(board, square, player, &KNIGHT_OFFSETS, &mut moves)
        }
        PieceType::King => {
            generate_leaper_moves(board, square, player, &KING_OFFSETS, &mut moves);
            if mode == GenerationMode::Full {
                generate_castling_moves(board, square, piece, &mut moves);
            }
        }
        PieceType::Rook => {
            generate_slider_moves(board, square, player, ROOK_DIRECTIONS, &mut moves)
        }
        PieceType::Bishop => {
            generate_slider_moves(board, square, player, BISHOP_DIRECTIONS, &mut moves)
        }
        PieceType::Queen => {
            generate_slider_moves(board, square, player, queen_directions(), &mut moves)
        }
    }
    moves
}

/// Pushes onto empty squares and diagonal captures of enemy pieces only, in
/// every generation mode. An empty diagonal is not a destination.
fn generate_pawn_moves(board: &Board, origin: Square, player: Player, moves: &mut MoveList) {
    let forward = player.forward();
    if let Some(one) = origin.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if origin.row == player.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for (dr, dc) in pawn_capture_offsets(player) {
        if let Some(target) = origin.offset(dr, dc) {
            if board.owner_at(target) == Some(player.opponent()) {
                moves.push(target);
            }
        }
    }
}

fn generate_leaper_moves(
    board: &Board,
    origin: Square,
    player: Player,
    offsets: &[Offset],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = origin.offset(dr, dc) {
            if board.owner_at(target) != Some(player) {
                moves.push(target);
            }
        }
    }
}

fn generate_slider_moves(
    board: &Board,
    origin: Square,
    player: Player,
    directions: impl IntoIterator<Item = Offset>,
    moves: &mut MoveList,
) {
    for (dr, dc) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(dr, dc) {
            match board.owner_at(next) {
                None => moves.push(next),
                Some(owner) => {
                    if owner != player {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

fn generate_castling_moves(board: &Board, origin: Square, king: Piece, moves: &mut MoveList) {
    let rank = king.owner.back_rank();
    if king.has_moved || origin != Square::new(rank, KING_HOME_COL) {
        return;
    }
    if is_square_attacked(board, origin, king.owner) {
        return;
    }

    for side in CastlingSide::ALL {
        if can_castle(board, king.owner, side) {
            moves.push(Square::new(rank, side.king_target_col()));
        }
    }
}

fn can_castle(board: &Board, player: Player, side: CastlingSide) -> bool {
    let rank = player.back_rank();

    let rook_ready = matches!(
        board.get_piece(Square::new(rank, side.rook_col())),
        Some(Piece { piece_type: PieceType::Rook, owner, has_moved: false }) if owner == player
    );
    if !rook_ready {
        return false;
    }

    if side
        .between_cols()
        .iter()
        .any(|&col| !board.is_empty(Square::new(rank, col)))
    {
        return false;
    }

    side.king_path_cols()
        .iter()
        .all(|&col| !is_square_attacked(board, Square::new(rank, col), player))
}

/// The rook displacement implied by a king of `player` moving `from -> to`,
/// if that pair is one of its castling moves.
pub fn castling_rook_move(player: Player, from: Square, to: Square) -> Option<RookMove> {
    let rank = player.back_rank();
    if from != Square::new(rank, KING_HOME_COL) || to.row != rank {
        return None;
    }
    CastlingSide::ALL
        .into_iter()
        .find(|side| side.king_target_col() == to.col)
        .map(|side| RookMove {
            from: Square::new(rank, side.rook_col()),
            to: Square::new(rank, side.rook_target_col()),
        })
}
