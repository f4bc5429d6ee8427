//! Guard predicates for restricting where the robot may stand.
//!
//! Guards are pure boolean functions evaluated before a `PLACE` or `MOVE`
//! takes effect, in addition to the grid bounds.

use std::fmt;

/// Pure predicate that decides whether a transition can execute.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Guard, Position};
///
/// // Keep the robot off the centre cell.
/// let avoid_centre = Guard::new(|p: &Position| *p != Position::new(2, 2));
///
/// assert!(avoid_centre.check(&Position::new(0, 0)));
/// assert!(!avoid_centre.check(&Position::new(2, 2)));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard allows `value`.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
