use hotseat_chess::domain::board::Board;
use hotseat_chess::domain::coordinate::Square;
use hotseat_chess::domain::game::Game;
use hotseat_chess::domain::models::{GameResult, Piece, PieceType, Player};
use hotseat_chess::domain::rules::{GenerationMode, Rules};
use std::collections::HashSet;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

fn place(board: &mut Board, row: usize, col: usize, piece_type: PieceType, owner: Player) {
    board.set_piece(sq(row, col), Piece::new(piece_type, owner));
}

#[test]
fn test_find_king() {
    let board = Board::new();
    assert_eq!(Rules::find_king(&board, Player::White), Some(sq(7, 4)));
    assert_eq!(Rules::find_king(&board, Player::Black), Some(sq(0, 4)));
    assert_eq!(Rules::find_king(&Board::new_empty(), Player::White), None);
}

#[test]
fn test_missing_king_is_not_in_check() {
    let mut board = Board::new_empty();
    place(&mut board, 0, 0, PieceType::Queen, Player::Black);
    assert!(!Rules::is_king_in_check(&board, Player::White));
}

#[test]
fn test_rook_gives_check_through_open_file() {
    let mut board = Board::new_empty();
    place(&mut board, 7, 4, PieceType::King, Player::White);
    place(&mut board, 0, 4, PieceType::Rook, Player::Black);
    assert!(Rules::is_king_in_check(&board, Player::White));

    place(&mut board, 3, 4, PieceType::Knight, Player::White);
    assert!(
        !Rules::is_king_in_check(&board, Player::White),
        "Blocked file is no check"
    );
}

#[test]
fn test_attacked_squares_by_piece_type() {
    let mut board = Board::new_empty();
    place(&mut board, 4, 4, PieceType::Knight, Player::Black);
    assert!(Rules::is_square_attacked(&board, sq(6, 5), Player::White));
    assert!(!Rules::is_square_attacked(&board, sq(5, 5), Player::White));
    assert!(
        !Rules::is_square_attacked(&board, sq(6, 5), Player::Black),
        "A piece never attacks for its own side"
    );

    let mut board = Board::new_empty();
    place(&mut board, 2, 2, PieceType::Bishop, Player::White);
    assert!(Rules::is_square_attacked(&board, sq(0, 0), Player::Black));
    assert!(Rules::is_square_attacked(&board, sq(7, 7), Player::Black));
    assert!(!Rules::is_square_attacked(&board, sq(2, 3), Player::Black));
}

#[test]
fn test_pawn_attacks_follow_its_moves() {
    let mut board = Board::new_empty();
    place(&mut board, 1, 3, PieceType::Pawn, Player::Black);
    place(&mut board, 2, 4, PieceType::Knight, Player::White);

    assert!(Rules::is_square_attacked(&board, sq(2, 3), Player::White));
    assert!(Rules::is_square_attacked(&board, sq(3, 3), Player::White));
    assert!(
        Rules::is_square_attacked(&board, sq(2, 4), Player::White),
        "Occupied diagonal is a capture"
    );
    assert!(
        !Rules::is_square_attacked(&board, sq(2, 2), Player::White),
        "Empty diagonal is not a destination"
    );
}

#[test]
fn test_raw_mode_pawn_matches_full() {
    let mut board = Board::new_empty();
    place(&mut board, 6, 3, PieceType::Pawn, Player::White);
    place(&mut board, 5, 4, PieceType::Rook, Player::Black);

    let full: HashSet<Square> =
        Rules::pseudo_legal_moves(&board, sq(6, 3), GenerationMode::Full).into_iter().collect();
    let raw: HashSet<Square> =
        Rules::pseudo_legal_moves(&board, sq(6, 3), GenerationMode::RawOnly).into_iter().collect();
    assert_eq!(full, raw);
    assert_eq!(full, HashSet::from([sq(5, 3), sq(4, 3), sq(5, 4)]));
}

#[test]
fn test_raw_mode_never_castles() {
    let mut board = Board::new_empty();
    place(&mut board, 7, 4, PieceType::King, Player::White);
    place(&mut board, 7, 7, PieceType::Rook, Player::White);

    let full = Rules::pseudo_legal_moves(&board, sq(7, 4), GenerationMode::Full);
    let raw = Rules::pseudo_legal_moves(&board, sq(7, 4), GenerationMode::RawOnly);
    assert!(full.contains(&sq(7, 6)));
    assert!(!raw.contains(&sq(7, 6)));
    assert_eq!(raw.len(), 5);
}

#[test]
fn test_kings_with_castling_rights_do_not_recurse() {
    // Both kings unmoved with rooks: attack detection for one side walks the
    // other king's moves in raw mode.
    let mut board = Board::new_empty();
    for player in [Player::White, Player::Black] {
        let rank = player.back_rank();
        place(&mut board, rank, 4, PieceType::King, player);
        place(&mut board, rank, 0, PieceType::Rook, player);
        place(&mut board, rank, 7, PieceType::Rook, player);
    }
    let moves = Rules::legal_moves(&board, sq(7, 4));
    assert!(moves.contains(&sq(7, 6)));
    assert!(moves.contains(&sq(7, 2)));
}

#[test]
fn test_pinned_piece_stays_on_line() {
    let mut board = Board::new_empty();
    place(&mut board, 7, 4, PieceType::King, Player::White);
    place(&mut board, 6, 4, PieceType::Rook, Player::White);
    place(&mut board, 0, 4, PieceType::Rook, Player::Black);

    let moves = Rules::legal_moves(&board, sq(6, 4));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.col == 4), "Pinned rook leaves the file: {:?}", moves);
    assert!(moves.contains(&sq(0, 4)), "Capturing the pinner is allowed");
    assert!(Rules::leaves_king_in_check(&board, sq(6, 4), sq(6, 0)));
    assert!(!Rules::leaves_king_in_check(&board, sq(6, 4), sq(3, 4)));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = Board::new_empty();
    place(&mut board, 7, 4, PieceType::King, Player::White);
    place(&mut board, 5, 4, PieceType::King, Player::Black);
    place(&mut board, 0, 3, PieceType::Rook, Player::Black);

    let moves = Rules::legal_moves(&board, sq(7, 4));
    assert!(!moves.contains(&sq(6, 4)), "Adjacent to enemy king");
    assert!(!moves.contains(&sq(6, 5)), "Adjacent to enemy king");
    assert!(!moves.contains(&sq(7, 3)), "Rook file");
    assert!(moves.contains(&sq(7, 5)));
}

#[test]
fn test_must_answer_check() {
    let mut board = Board::new_empty();
    place(&mut board, 7, 4, PieceType::King, Player::White);
    place(&mut board, 7, 0, PieceType::Rook, Player::White);
    place(&mut board, 0, 4, PieceType::Rook, Player::Black);
    place(&mut board, 0, 0, PieceType::King, Player::Black);

    let game = Game::from_position(board, Player::White);
    assert!(game.in_check());
    let rook_moves = game.legal_moves(sq(7, 0));
    assert!(rook_moves.is_empty(), "Rook cannot block or capture: {:?}", rook_moves);
    assert!(!game.legal_moves(sq(7, 4)).contains(&sq(6, 4)));
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    game.restart();
    game.play(sq(6, 5), sq(5, 5)).unwrap();
    game.play(sq(1, 4), sq(3, 4)).unwrap();
    game.play(sq(6, 6), sq(4, 6)).unwrap();
    game.play(sq(0, 3), sq(4, 7)).unwrap();

    assert!(game.in_check());
    assert_eq!(game.status(), Some(GameResult::Checkmate(Player::Black)));
    assert!(game.all_legal_moves().is_empty());
}

#[test]
fn test_stalemate() {
    let mut board = Board::new_empty();
    place(&mut board, 0, 0, PieceType::King, Player::Black);
    place(&mut board, 2, 1, PieceType::Queen, Player::White);
    place(&mut board, 2, 2, PieceType::King, Player::White);

    let game = Game::from_position(board, Player::Black);
    assert!(!game.in_check());
    assert_eq!(game.status(), Some(GameResult::Stalemate));
}
