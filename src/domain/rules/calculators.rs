use crate::domain::models::Player;

pub type Offset = (isize, isize);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub fn queen_directions() -> impl Iterator<Item = Offset> {
    ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS)
}

pub fn pawn_capture_offsets(attacker: Player) -> [Offset; 2] {
    let forward = attacker.forward();
    [(forward, -1), (forward, 1)]
}
