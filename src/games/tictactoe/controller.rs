//! Turn sequencing and per-turn countdown.
//!
//! The controller never schedules anything itself. Whoever owns it calls
//! [`TurnController::tick`] once per elapsed second while the round is in
//! progress, and restarts that cadence whenever the turn changes hands.

use super::action::{MoveResult, SessionError, TickResult};
#[cfg(debug_assertions)]
use super::invariants::monotonic_board;
use super::invariants::{InvariantSet, RoundInvariants};
use super::phases::Outcome;
use super::rules::classify;
use super::score::Tally;
use super::{Board, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default length of one turn in seconds.
pub const DEFAULT_TURN_SECONDS: u32 = 10;

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for `active` to move.
    InProgress {
        /// Player to move.
        active: Player,
        /// Seconds before the turn passes.
        seconds_left: u32,
    },
    /// Round over. The outcome is always terminal.
    Finished(Outcome),
}

impl TurnState {
    /// Outcome implied by this state.
    pub fn outcome(&self) -> Outcome {
        match self {
            TurnState::InProgress { .. } => Outcome::InProgress,
            TurnState::Finished(outcome) => *outcome,
        }
    }
}

/// Read-only view of a round, handed to whatever draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board side length.
    pub size: usize,
    /// Cells, row-major.
    pub cells: Vec<Mark>,
    /// Round state.
    pub state: TurnState,
    /// Wins so far in this game.
    pub tally: Tally,
    /// True when the countdown is at or below the urgency threshold.
    pub urgent: bool,
}

impl SessionSnapshot {
    /// Player to move, if the round is running.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            TurnState::InProgress { active, .. } => Some(active),
            TurnState::Finished(_) => None,
        }
    }

    /// Seconds left in the current turn, if the round is running.
    pub fn seconds_left(&self) -> Option<u32> {
        match self.state {
            TurnState::InProgress { seconds_left, .. } => Some(seconds_left),
            TurnState::Finished(_) => None,
        }
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }
}

/// Two-player turn cycle over one board.
#[derive(Debug, Clone)]
pub struct TurnController {
    pub(super) board: Board,
    pub(super) state: TurnState,
    pub(super) tally: Tally,
    pub(super) turn_seconds: u32,
}

impl TurnController {
    /// Starts a first round on `board` with an empty tally.
    ///
    /// A `turn_seconds` of zero is treated as one.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn new(board: Board, turn_seconds: u32) -> Self {
        let turn_seconds = turn_seconds.max(1);
        let mut controller = Self {
            board,
            state: TurnState::InProgress {
                active: Player::Cross,
                seconds_left: turn_seconds,
            },
            tally: Tally::default(),
            turn_seconds,
        };
        controller.begin_round();
        controller
    }

    /// Starts a round on `board`, which is cleared first. The tally is kept.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn start_round(&mut self, board: Board) {
        self.board = board;
        self.begin_round();
    }

    fn begin_round(&mut self) {
        self.board.reset();
        self.state = TurnState::InProgress {
            active: Player::Cross,
            seconds_left: self.turn_seconds,
        };
        info!(size = self.board.size(), "Round started");
    }

    /// Applies the active player's mark at `index`.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveResult, SessionError> {
        let active = match self.state {
            TurnState::InProgress { active, .. } => active,
            TurnState::Finished(outcome) => {
                warn!(%outcome, "Move submitted after round finished");
                return Err(SessionError::InvalidState(outcome));
            }
        };

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let placement = self.board.place_mark(index, active.mark())?;
        if !placement.is_placed() {
            debug!(index, "Move rejected, cell occupied");
            return Ok(MoveResult::Rejected { index });
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            monotonic_board(&before, &self.board),
            "Board cell overwritten"
        );

        let outcome = classify(&self.board);
        let result = match outcome {
            Outcome::InProgress => {
                let next = active.opponent();
                self.state = TurnState::InProgress {
                    active: next,
                    seconds_left: self.turn_seconds,
                };
                MoveResult::Continue { next }
            }
            Outcome::CrossWins | Outcome::NoughtWins | Outcome::Draw => {
                if let Some(winner) = outcome.winner() {
                    self.tally.record(winner);
                }
                self.state = TurnState::Finished(outcome);
                info!(%outcome, tally = %self.tally, "Round finished");
                MoveResult::Finished(outcome)
            }
        };

        debug_assert!(RoundInvariants::check_all(self).is_ok());
        Ok(result)
    }

    /// Advances the countdown by one second.
    ///
    /// When it reaches zero the turn passes to the opponent without a mark
    /// and the countdown restarts. A timeout never ends the round.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Result<TickResult, SessionError> {
        let (active, seconds_left) = match self.state {
            TurnState::InProgress {
                active,
                seconds_left,
            } => (active, seconds_left),
            TurnState::Finished(outcome) => {
                warn!(%outcome, "Tick after round finished");
                return Err(SessionError::InvalidState(outcome));
            }
        };

        let remaining = seconds_left.saturating_sub(1);
        if remaining > 0 {
            self.state = TurnState::InProgress {
                active,
                seconds_left: remaining,
            };
            return Ok(TickResult::Counting {
                seconds_left: remaining,
            });
        }

        let to = active.opponent();
        self.state = TurnState::InProgress {
            active: to,
            seconds_left: self.turn_seconds,
        };
        info!(from = %active, %to, "Turn timed out");
        Ok(TickResult::Passed { to })
    }

    /// New round on the same board size. The tally is kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.begin_round();
    }

    /// Zeroes the tally, then starts a new round.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.tally.clear();
        self.reset_round();
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The round state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Player to move, `None` once the round is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            TurnState::InProgress { active, .. } => Some(active),
            TurnState::Finished(_) => None,
        }
    }

    /// Seconds left in the current turn, `None` once the round is over.
    pub fn seconds_left(&self) -> Option<u32> {
        match self.state {
            TurnState::InProgress { seconds_left, .. } => Some(seconds_left),
            TurnState::Finished(_) => None,
        }
    }

    /// Wins so far in this game.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Configured length of one turn.
    pub fn turn_seconds(&self) -> u32 {
        self.turn_seconds
    }

    /// Builds a snapshot; `urgent` is set when at most `urgent_seconds` remain.
    pub fn snapshot(&self, urgent_seconds: u32) -> SessionSnapshot {
        SessionSnapshot {
            size: self.board.size(),
            cells: self.board.cells().to_vec(),
            state: self.state,
            tally: self.tally,
            urgent: self
                .seconds_left()
                .is_some_and(|left| left <= urgent_seconds),
        }
    }
}
