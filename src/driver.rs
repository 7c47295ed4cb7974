//! Async driver that owns a game session and feeds it one tick per second.
//!
//! The session lives inside a single task. Front ends talk to it through a
//! cloneable [`DriverHandle`] and watch it through a stream of
//! [`SessionEvent`]s, so moves and ticks are always applied one at a time.

use crate::games::tictactoe::{
    MoveResult, Outcome, Player, SessionError, SessionSnapshot, TickResult,
};
use crate::session::GameSession;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument, warn};

/// Countdown cadence.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Notifications published by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Something visible changed; redraw from this snapshot.
    Changed(SessionSnapshot),
    /// The countdown ran out and the turn passed.
    TurnPassed {
        /// Player whose turn it is now.
        to: Player,
    },
    /// A move ended the round.
    RoundFinished(Outcome),
    /// The game was abandoned; back to size selection.
    Left,
}

/// Error returned by [`DriverHandle`] calls.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum DriverError {
    /// The session refused the request.
    #[display("{}", _0)]
    #[from]
    Session(SessionError),

    /// The driver task is gone.
    #[display("Session driver has shut down")]
    Closed,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Session(e) => Some(e),
            DriverError::Closed => None,
        }
    }
}

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// What the run loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    RestartCountdown,
    Stop,
}

impl From<bool> for Step {
    fn from(restart: bool) -> Self {
        if restart {
            Step::RestartCountdown
        } else {
            Step::Continue
        }
    }
}

#[derive(Debug)]
enum Command {
    Choose { size: usize, reply: Reply<SessionSnapshot> },
    Submit { index: usize, reply: Reply<MoveResult> },
    ResetRound { reply: Reply<()> },
    ResetGame { reply: Reply<()> },
    Leave { reply: oneshot::Sender<()> },
    Snapshot { reply: Reply<SessionSnapshot> },
    Shutdown,
}

/// Cloneable handle to a running driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl DriverHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, DriverError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(make(tx))
            .map_err(|_| DriverError::Closed)?;
        rx.await.map_err(|_| DriverError::Closed)
    }

    /// Chooses a board size and starts the first round.
    #[instrument(skip(self))]
    pub async fn choose_size(&self, size: usize) -> Result<SessionSnapshot, DriverError> {
        Ok(self.request(|reply| Command::Choose { size, reply }).await??)
    }

    /// Submits a move for the active player.
    #[instrument(skip(self))]
    pub async fn submit_move(&self, index: usize) -> Result<MoveResult, DriverError> {
        Ok(self.request(|reply| Command::Submit { index, reply }).await??)
    }

    /// Starts a new round, keeping the tally.
    #[instrument(skip(self))]
    pub async fn reset_round(&self) -> Result<(), DriverError> {
        Ok(self.request(|reply| Command::ResetRound { reply }).await??)
    }

    /// Starts a new round with a zeroed tally.
    #[instrument(skip(self))]
    pub async fn reset_game(&self) -> Result<(), DriverError> {
        Ok(self.request(|reply| Command::ResetGame { reply }).await??)
    }

    /// Abandons the game and returns to size selection.
    #[instrument(skip(self))]
    pub async fn leave(&self) -> Result<(), DriverError> {
        self.request(|reply| Command::Leave { reply }).await
    }

    /// Current snapshot.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<SessionSnapshot, DriverError> {
        Ok(self.request(|reply| Command::Snapshot { reply }).await??)
    }

    /// Asks the driver task to stop. Pending events are still delivered.
    #[instrument(skip(self))]
    pub fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).is_err() {
            debug!("Driver already stopped");
        }
    }
}

/// Task that owns a [`GameSession`].
pub struct SessionDriver {
    session: GameSession,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionDriver {
    /// Spawns the driver on the current tokio runtime.
    ///
    /// The task ends when [`DriverHandle::shutdown`] is called or every
    /// handle has been dropped.
    #[instrument(skip(session))]
    pub fn spawn(
        session: GameSession,
    ) -> (DriverHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let driver = Self {
            session,
            commands: command_rx,
            events: event_tx,
        };
        tokio::spawn(driver.run());

        (
            DriverHandle {
                commands: command_tx,
            },
            event_rx,
        )
    }

    async fn run(mut self) -> GameSession {
        info!("Session driver started");
        let mut ticker = new_ticker();

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else { break };
                    match self.handle(command) {
                        Step::Continue => {}
                        Step::RestartCountdown => ticker.reset(),
                        Step::Stop => break,
                    }
                }
                _ = ticker.tick(), if self.is_counting() => {
                    if self.on_tick() {
                        ticker.reset();
                    }
                }
            }
        }

        info!("Session driver stopped");
        self.session
    }

    fn is_counting(&self) -> bool {
        self.session
            .controller()
            .is_ok_and(|c| c.active_player().is_some())
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("No event listener");
        }
    }

    fn publish_snapshot(&self) {
        if let Ok(snapshot) = self.session.snapshot() {
            self.publish(SessionEvent::Changed(snapshot));
        }
    }

    /// Applies a command.
    fn handle(&mut self, command: Command) -> Step {
        let restart = match command {
            Command::Choose { size, reply } => {
                let result = self
                    .session
                    .choose_size(size)
                    .map(|_| ())
                    .and_then(|()| self.session.snapshot());
                let started = result.is_ok();
                let _ = reply.send(result);
                if started {
                    self.publish_snapshot();
                }
                started
            }
            Command::Submit { index, reply } => {
                let result = self.session.submit_move(index);
                let _ = reply.send(result.clone());
                match result {
                    Ok(MoveResult::Continue { .. }) => {
                        self.publish_snapshot();
                        true
                    }
                    Ok(MoveResult::Finished(outcome)) => {
                        self.publish_snapshot();
                        self.publish(SessionEvent::RoundFinished(outcome));
                        false
                    }
                    Ok(MoveResult::Rejected { .. }) => false,
                    Err(e) => {
                        warn!(error = %e, "Move refused");
                        false
                    }
                }
            }
            Command::ResetRound { reply } => {
                let result = self.session.reset_round();
                let restarted = result.is_ok();
                let _ = reply.send(result);
                if restarted {
                    self.publish_snapshot();
                }
                restarted
            }
            Command::ResetGame { reply } => {
                let result = self.session.reset_game();
                let restarted = result.is_ok();
                let _ = reply.send(result);
                if restarted {
                    self.publish_snapshot();
                }
                restarted
            }
            Command::Leave { reply } => {
                self.session.leave();
                let _ = reply.send(());
                self.publish(SessionEvent::Left);
                false
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.session.snapshot());
                false
            }
            Command::Shutdown => return Step::Stop,
        };
        Step::from(restart)
    }

    /// Applies one tick. Returns true when the turn passed.
    fn on_tick(&mut self) -> bool {
        match self.session.tick() {
            Ok(TickResult::Counting { .. }) => {
                self.publish_snapshot();
                false
            }
            Ok(TickResult::Passed { to }) => {
                self.publish(SessionEvent::TurnPassed { to });
                self.publish_snapshot();
                true
            }
            Err(e) => {
                warn!(error = %e, "Tick refused");
                false
            }
        }
    }
}

fn new_ticker() -> Interval {
    let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_request_after_shutdown_is_closed() {
        let (handle, _events) = SessionDriver::spawn(GameSession::default());
        handle.shutdown();
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.snapshot().await, Err(DriverError::Closed));
    }

    #[test]
    fn test_shutdown_command_stops_loop() {
        let (_tx, commands) = mpsc::unbounded_channel();
        let (events, _rx) = mpsc::unbounded_channel();
        let mut driver = SessionDriver {
            session: GameSession::default(),
            commands,
            events,
        };
        assert_eq!(driver.handle(Command::Shutdown), Step::Stop);

        let (reply, _answer) = oneshot::channel();
        assert_eq!(driver.handle(Command::Leave { reply }), Step::Continue);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_without_game() {
        let (handle, _events) = SessionDriver::spawn(GameSession::default());
        assert_eq!(
            handle.snapshot().await,
            Err(DriverError::Session(SessionError::NoActiveGame))
        );
    }
}
