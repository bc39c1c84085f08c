use crate::domain::coordinate::Square;

/// A user intent coming from whatever front-end drives the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Press(Square),
    Back,
    Forward,
    Restart,
    Clear,
    Snapshot,
    Help,
    Quit,
}

pub trait CommandSource {
    /// `None` once the source is exhausted.
    fn next_command(&mut self) -> Option<Command>;
}
