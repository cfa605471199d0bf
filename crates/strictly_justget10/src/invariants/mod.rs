//! First-class invariants for Just Get 10.
//!
//! Invariants are logical properties of a [`GameSnapshot`] that must hold
//! between turns. They are checked after every click in debug builds and
//! can be tested independently.
//!
//! [`GameSnapshot`]: crate::GameSnapshot

pub mod status_consistent;
pub mod tier_range;

pub use status_consistent::StatusConsistentInvariant;
pub use tier_range::TierRangeInvariant;

/// A property of a settled game state.
///
/// Implementors are unit structs; `S` is normally [`GameSnapshot`], taken
/// between clicks once gravity and refill have run.
///
/// [`GameSnapshot`]: crate::GameSnapshot
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Sentence reported in [`InvariantViolation::description`] and, through
    /// the click contract, in [`EngineError::InvariantViolation`].
    ///
    /// [`EngineError::InvariantViolation`]: crate::EngineError::InvariantViolation
    fn description() -> &'static str;
}

/// A failed invariant, as reported after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed invariant's [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Records a violation with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as one group after each click.
///
/// Implemented for pairs, which covers [`GameInvariants`]. Every member is
/// evaluated even after an earlier one fails.
pub trait InvariantSet<S> {
    /// Returns every violated member in declaration order, or `Ok` if none.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants [`ClickContract`](crate::contracts::ClickContract) checks
/// after every turn in debug builds.
pub type GameInvariants = (TierRangeInvariant, StatusConsistentInvariant);
