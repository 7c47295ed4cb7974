//! Lesson Tic-Tac-Toe - N x N tic-tac-toe game-state engine
//!
//! Board, rules and a two-player turn cycle with a per-turn countdown that
//! passes the turn when time runs out. Rendering is left to the caller.
//!
//! # Architecture
//!
//! - **Board**: N x N grid of marks, N >= 3
//! - **Rules**: three in a row along any row, column or diagonal wins, on
//!   every board size
//! - **TurnController**: turn order, countdown and win tally for one game
//! - **GameSession**: board-size selection around a controller
//! - **Driver**: async task that owns a session and ticks it once a second
//!
//! # Example
//!
//! ```
//! use lesson_tictactoe::{Board, MoveResult, Outcome, TurnController};
//!
//! let board = Board::new(3)?;
//! let mut game = TurnController::new(board, 10);
//! for index in [0, 3, 1, 4] {
//!     let _ = game.submit_move(index)?;
//! }
//! assert_eq!(game.submit_move(2)?, MoveResult::Finished(Outcome::CrossWins));
//! # Ok::<(), lesson_tictactoe::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Async driver
pub use driver::{DriverError, DriverHandle, SessionDriver, SessionEvent};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, BoardShapeInvariant, CountdownRangeInvariant, DEFAULT_TURN_SECONDS,
    Invariant, InvariantSet, InvariantViolation, LineFamily, MIN_BOARD_SIZE, Mark, MoveResult,
    Outcome, OutcomeConsistentInvariant, ParseBoardError, Placement, Player, Position,
    RoundInvariants, SessionError, SessionSnapshot, Tally, TickResult, TurnController, TurnState,
    WinningLine, check_winner, classify, is_full, monotonic_board, winning_line,
};
