use hotseat_chess::domain::board::Board;
use hotseat_chess::domain::coordinate::Square;
use hotseat_chess::domain::game::Game;
use hotseat_chess::domain::models::{GameResult, Player};
use hotseat_chess::domain::rules::Rules;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 12;
const MAX_PLIES: usize = 120;

/// Plays random legal moves, checking alternation and king safety after each
/// one. Returns the game and the live board after every ply.
fn random_game(seed: u64) -> (Game, Vec<Board>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    game.restart();
    let mut boards = vec![Board::new()];

    for _ in 0..MAX_PLIES {
        let all = game.all_legal_moves();
        if all.is_empty() {
            assert_ne!(game.status(), Some(GameResult::InProgress));
            break;
        }
        let mut origins: Vec<Square> = all.keys().copied().collect();
        origins.sort();
        let from = origins[rng.gen_range(0..origins.len())];
        let targets = &all[&from];
        let to = targets[rng.gen_range(0..targets.len())];

        let mover = game.current_turn();
        let step = game.play(from, to).unwrap();
        assert_eq!(step.moved_piece.owner, mover);

        let board = game.board().unwrap();
        assert!(
            !Rules::is_king_in_check(board, mover),
            "Seed {}: {:?} left its king in check with {:?} -> {:?}",
            seed,
            mover,
            from,
            to
        );
        boards.push(board.clone());
    }
    (game, boards)
}

#[test]
fn test_turn_alternation() {
    for seed in 0..GAMES {
        let (game, _) = random_game(seed);
        let history = game.history();
        if let Some(first) = history.first() {
            assert_eq!(first.moved_piece.owner, Player::White);
        }
        for pair in history.windows(2) {
            assert_ne!(pair[0].moved_piece.owner, pair[1].moved_piece.owner);
        }
    }
}

#[test]
fn test_replay_round_trip() {
    for seed in 0..GAMES {
        let (mut game, boards) = random_game(seed);
        let plies = game.history().len();
        let live = game.board().unwrap().clone();

        for back in 1..=plies {
            assert!(game.history_backward());
            assert_eq!(
                game.board(),
                Some(&boards[plies - back]),
                "Seed {} at offset {}",
                seed,
                back
            );
        }
        assert!(!game.history_backward());

        while game.history_forward() {}
        assert_eq!(game.history_offset(), 0);
        assert_eq!(game.board(), Some(&live), "Seed {}", seed);
    }
}
