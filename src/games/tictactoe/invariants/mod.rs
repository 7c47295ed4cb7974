//! First-class invariants for tic-tac-toe rounds.
//!
//! Invariants are logical properties that must hold after every transition.
//! The controller checks them in debug builds; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod board_shape;
pub mod countdown_range;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use board_shape::BoardShapeInvariant;
pub use countdown_range::CountdownRangeInvariant;
pub use monotonic_board::monotonic_board;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All per-state round invariants as a composable set.
pub type RoundInvariants = (
    BoardShapeInvariant,
    OutcomeConsistentInvariant,
    CountdownRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, Outcome, TurnController, TurnState};

    fn controller() -> TurnController {
        TurnController::new(Board::new(3).unwrap(), 10)
    }

    #[test]
    fn test_invariant_set_holds_for_new_round() {
        assert!(RoundInvariants::check_all(&controller()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_ticks() {
        let mut c = controller();
        for index in [0, 4, 8] {
            let _ = c.submit_move(index).unwrap();
            let _ = c.tick().unwrap();
        }
        assert!(RoundInvariants::check_all(&c).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut c = controller();
        c.state = TurnState::Finished(Outcome::NoughtWins);
        c.board.cells.push(Mark::Empty);

        let violations = RoundInvariants::check_all(&c).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BoardShapeInvariant, CountdownRangeInvariant);
        assert!(TwoInvariants::check_all(&controller()).is_ok());
    }
}
