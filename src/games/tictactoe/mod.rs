//! N x N tic-tac-toe with a per-turn countdown.

mod action;
mod controller;
mod invariants;
mod phases;
mod position;
mod rules;
mod score;
mod types;

pub use action::{BoardError, MoveResult, ParseBoardError, Placement, SessionError, TickResult};
pub use controller::{DEFAULT_TURN_SECONDS, SessionSnapshot, TurnController, TurnState};
pub use invariants::{
    BoardShapeInvariant, CountdownRangeInvariant, Invariant, InvariantSet, InvariantViolation,
    OutcomeConsistentInvariant, RoundInvariants, monotonic_board,
};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{LineFamily, WinningLine, check_winner, classify, is_full, winning_line};
pub use score::Tally;
pub use types::{Board, MIN_BOARD_SIZE, Mark, Player};
