//! Game session: board-size selection wrapped around a turn controller.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, MoveResult, SessionError, SessionSnapshot, TickResult, TurnController,
};
use tracing::{debug, info, instrument, warn};

/// One player's sitting at the app.
///
/// Starts with no game until a board size is chosen. The tally lives in the
/// controller, so leaving to size selection discards it.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    controller: Option<TurnController>,
}

impl GameSession {
    /// Creates a session waiting for a board size.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        info!(allowed_sizes = ?config.allowed_sizes(), "Creating game session");
        Self {
            config,
            controller: None,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True once a board size has been chosen.
    pub fn is_active(&self) -> bool {
        self.controller.is_some()
    }

    /// Starts a new game on a `size` x `size` board with a zero tally.
    #[instrument(skip(self))]
    pub fn choose_size(&mut self, size: usize) -> Result<&mut TurnController, SessionError> {
        if let Some(controller) = &self.controller {
            warn!("Size chosen while a game is active");
            return Err(SessionError::GameActive(controller.board().size()));
        }
        if !self.config.allows(size) {
            return Err(SessionError::SizeNotAllowed {
                size,
                allowed: self.config.allowed_sizes().clone(),
            });
        }

        let board = Board::new(size)?;
        info!(size, "Board size chosen");
        Ok(self
            .controller
            .insert(TurnController::new(board, *self.config.turn_seconds())))
    }

    /// Returns to board-size selection, discarding the game and its tally.
    #[instrument(skip(self))]
    pub fn leave(&mut self) {
        if self.controller.take().is_some() {
            debug!("Left game, back to size selection");
        }
    }

    /// The running game.
    pub fn controller(&self) -> Result<&TurnController, SessionError> {
        self.controller.as_ref().ok_or(SessionError::NoActiveGame)
    }

    /// The running game, mutably.
    pub fn controller_mut(&mut self) -> Result<&mut TurnController, SessionError> {
        self.controller.as_mut().ok_or(SessionError::NoActiveGame)
    }

    /// Submits a move for the active player.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveResult, SessionError> {
        self.controller_mut()?.submit_move(index)
    }

    /// Advances the countdown by one second.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Result<TickResult, SessionError> {
        self.controller_mut()?.tick()
    }

    /// New round, same size, tally kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) -> Result<(), SessionError> {
        self.controller_mut()?.reset_round();
        Ok(())
    }

    /// New round, same size, tally zeroed.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Result<(), SessionError> {
        self.controller_mut()?.reset_game();
        Ok(())
    }

    /// Snapshot of the running game, using the configured urgency threshold.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        let urgent = *self.config.urgent_seconds();
        Ok(self.controller()?.snapshot(urgent))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
