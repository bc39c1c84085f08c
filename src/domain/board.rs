use crate::domain::coordinate::{BOARD_SIDE, Square};
use crate::domain::models::{Piece, PieceType, Player};
use serde::{Deserialize, Serialize};

/// The 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// Square arguments must be on the board; lookups index the grid directly
/// and an out-of-range square is a caller bug.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIDE]; BOARD_SIDE],
}

impl Board {
    pub fn new_empty() -> Self {
        Board {
            cells: [[None; BOARD_SIDE]; BOARD_SIDE],
        }
    }

    pub fn new() -> Self {
        let mut board = Self::new_empty();
        board.setup_standard_chess();
        board
    }

    pub fn setup_standard_chess(&mut self) {
        self.cells = [[None; BOARD_SIDE]; BOARD_SIDE];
        for player in [Player::White, Player::Black] {
            for col in 0..BOARD_SIDE {
                self.set_piece(
                    Square::new(player.back_rank(), col),
                    Piece::new(Self::determine_backrank_piece(col), player),
                );
                self.set_piece(
                    Square::new(player.pawn_start_row(), col),
                    Piece::new(PieceType::Pawn, player),
                );
            }
        }
    }

    fn determine_backrank_piece(col: usize) -> PieceType {
        match col {
            0 | 7 => PieceType::Rook,
            1 | 6 => PieceType::Knight,
            2 | 5 => PieceType::Bishop,
            3 => PieceType::Queen,
            _ => PieceType::King,
        }
    }

    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.cells[square.row][square.col]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    pub fn owner_at(&self, square: Square) -> Option<Player> {
        self.get_piece(square).map(|p| p.owner)
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.cells[square.row][square.col] = Some(piece);
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row][square.col].take()
    }

    /// Moves whatever stands on `from` to `to` untouched, returning the piece
    /// that was on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece(from);
        let captured = self.cells[to.row][to.col].take();
        self.cells[to.row][to.col] = moving;
        captured
    }

    /// Independent copy with the piece on `from` relocated to `to`.
    pub fn clone_with_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        next.relocate(from, to);
        next
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get_piece(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
