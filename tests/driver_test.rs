//! Tests for the async session driver under paused time.

use lesson_tictactoe::{
    DriverError, GameConfig, GameSession, MoveResult, Outcome, Player, SessionDriver,
    SessionError, SessionEvent,
};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

fn drain(events: &mut UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

fn passes(events: &[SessionEvent]) -> Vec<Player> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::TurnPassed { to } => Some(*to),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_idle_turn_passes_after_ten_seconds() {
    let (handle, mut events) = SessionDriver::spawn(GameSession::default());
    handle.choose_size(3).await.unwrap();

    sleep(Duration::from_millis(9_500)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.active_player(), Some(Player::Cross));
    assert_eq!(snapshot.seconds_left(), Some(1));

    sleep(Duration::from_secs(1)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.active_player(), Some(Player::Nought));
    assert_eq!(snapshot.seconds_left(), Some(10));
    assert_eq!(snapshot.outcome(), Outcome::InProgress);

    assert_eq!(passes(&drain(&mut events)), vec![Player::Nought]);
    handle.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_move_restarts_countdown() {
    let (handle, _events) = SessionDriver::spawn(GameSession::default());
    handle.choose_size(3).await.unwrap();

    sleep(Duration::from_millis(6_500)).await;
    assert_eq!(
        handle.submit_move(4).await.unwrap(),
        MoveResult::Continue {
            next: Player::Nought
        }
    );

    // Six and a half seconds after the move, noughts still have time.
    sleep(Duration::from_millis(6_500)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.active_player(), Some(Player::Nought));
    assert_eq!(snapshot.seconds_left(), Some(4));
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_round_finished() {
    let config = GameConfig::new(2, vec![3], 1).unwrap();
    let (handle, mut events) = SessionDriver::spawn(GameSession::new(config));
    handle.choose_size(3).await.unwrap();

    for index in [0, 3, 1, 4] {
        let _ = handle.submit_move(index).await.unwrap();
    }
    assert_eq!(
        handle.submit_move(2).await.unwrap(),
        MoveResult::Finished(Outcome::CrossWins)
    );
    let _ = drain(&mut events);

    sleep(Duration::from_secs(30)).await;
    assert!(drain(&mut events).is_empty());
    assert_eq!(
        handle.submit_move(8).await,
        Err(DriverError::Session(SessionError::InvalidState(
            Outcome::CrossWins
        )))
    );

    handle.reset_round().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.tally.wins(Player::Cross), 1);
    assert_eq!(snapshot.seconds_left(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_leave_stops_the_clock() {
    let (handle, mut events) = SessionDriver::spawn(GameSession::default());
    handle.choose_size(4).await.unwrap();
    handle.leave().await.unwrap();
    let _ = drain(&mut events);

    sleep(Duration::from_secs(15)).await;
    assert!(drain(&mut events).is_empty());
    assert_eq!(
        handle.snapshot().await,
        Err(DriverError::Session(SessionError::NoActiveGame))
    );

    handle.choose_size(5).await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().size, 5);
}

#[tokio::test(start_paused = true)]
async fn test_round_finished_event_published() {
    let (handle, mut events) = SessionDriver::spawn(GameSession::default());
    handle.choose_size(3).await.unwrap();
    for index in [0, 3, 1, 4, 2] {
        let _ = handle.submit_move(index).await.unwrap();
    }
    let events = drain(&mut events);
    assert!(events.contains(&SessionEvent::RoundFinished(Outcome::CrossWins)));
}
