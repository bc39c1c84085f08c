use crate::config::DisplayConfig;
use crate::domain::coordinate::{BOARD_SIDE, Square};
use crate::domain::game::Game;
use crate::domain::models::{Piece, PieceType, Player};
use std::fmt;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_WHITE: &str = "\x1b[37m";
const COLOR_BLACK: &str = "\x1b[31m";
const COLOR_DIM: &str = "\x1b[90m";
const BG_SELECTED: &str = "\x1b[43m";
const BG_HINT: &str = "\x1b[42m";

/// Fixed grid of cells, each holding one already-styled glyph.
struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<String>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            buffer: vec![" ".to_string(); width * height],
        }
    }

    fn put(&mut self, x: usize, y: usize, s: &str) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = s.to_string();
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.buffer[y * self.width + x])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn piece_symbol(piece: &Piece, unicode: bool) -> &'static str {
    match (unicode, piece.owner) {
        (true, Player::White) => match piece.piece_type {
            PieceType::Pawn => "♙",
            PieceType::Knight => "♘",
            PieceType::Bishop => "♗",
            PieceType::Rook => "♖",
            PieceType::Queen => "♕",
            PieceType::King => "♔",
        },
        (true, Player::Black) => match piece.piece_type {
            PieceType::Pawn => "♟",
            PieceType::Knight => "♞",
            PieceType::Bishop => "♝",
            PieceType::Rook => "♜",
            PieceType::Queen => "♛",
            PieceType::King => "♚",
        },
        (false, Player::White) => match piece.piece_type {
            PieceType::Pawn => "P",
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Rook => "R",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        },
        (false, Player::Black) => match piece.piece_type {
            PieceType::Pawn => "p",
            PieceType::Knight => "n",
            PieceType::Bishop => "b",
            PieceType::Rook => "r",
            PieceType::Queen => "q",
            PieceType::King => "k",
        },
    }
}

/// Draws the displayed board with row/column indices, the selection and, if
/// enabled, the selection's legal destinations.
pub fn render_board(game: &Game, config: &DisplayConfig) -> String {
    let Some(board) = game.board() else {
        return "No game in progress! Enter 'n' to start.\n".to_string();
    };

    let hints = if config.hints {
        game.available_moves()
    } else {
        Default::default()
    };
    let selection = game.selection();

    // Two header columns, then one glyph and one gap per file.
    let width = 2 + BOARD_SIDE * 2;
    let height = BOARD_SIDE + 1;
    let mut canvas = Canvas::new(width, height);

    for col in 0..BOARD_SIDE {
        canvas.put(2 + col * 2, 0, &col.to_string());
    }

    for row in 0..BOARD_SIDE {
        canvas.put(0, row + 1, &row.to_string());
        for col in 0..BOARD_SIDE {
            let square = Square::new(row, col);
            let is_selected = selection == Some(square);
            let is_hint = hints.contains(&square);

            let glyph = match board.get_piece(square) {
                Some(piece) => piece_symbol(&piece, config.unicode),
                None if is_hint => "*",
                None => ".",
            };

            let cell = if config.color {
                let fg = match board.get_piece(square) {
                    Some(piece) if piece.owner == Player::White => COLOR_WHITE,
                    Some(_) => COLOR_BLACK,
                    None => COLOR_DIM,
                };
                let bg = if is_selected {
                    BG_SELECTED
                } else if is_hint {
                    BG_HINT
                } else {
                    ""
                };
                format!("{}{}{}{}", bg, fg, glyph, COLOR_RESET)
            } else {
                glyph.to_string()
            };
            canvas.put(2 + col * 2, row + 1, &cell);
        }
    }

    canvas.to_string()
}
