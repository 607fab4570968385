//! Projections derive display models from state snapshots.
//!
//! A projection is the read side of a screen: the Store publishes a new
//! immutable snapshot after every accepted action, and a [`Projector`]
//! turns that snapshot into whatever the rendering layer needs. Projectors
//! are pure, so running one twice on the same snapshot gives the same output.
//!
//! ```text
//! action ──▶ Reducer ──▶ Arc<State> snapshot ──▶ Projector ──▶ view model
//! ```
//!
//! [`Memoized`] skips recomputation when it is handed the snapshot it saw last.

use std::sync::Arc;

/// A pure derivation from one value to another.
///
/// # Example
///
/// ```
/// use taskboard_core::projection::Projector;
///
/// struct Evens;
///
/// impl Projector for Evens {
///     type Input = Vec<u32>;
///     type Output = Vec<u32>;
///
///     fn project(&self, input: &Vec<u32>) -> Vec<u32> {
///         input.iter().copied().filter(|n| n % 2 == 0).collect()
///     }
/// }
///
/// assert_eq!(Evens.project(&vec![1, 2, 3, 4]), vec![2, 4]);
/// ```
pub trait Projector {
    /// The value the projection reads
    type Input;

    /// The derived value
    type Output;

    /// Derive the output from the full input.
    fn project(&self, input: &Self::Input) -> Self::Output;
}

/// Caches the last projection, keyed on snapshot identity.
///
/// Snapshots published by the Store are never mutated, so pointer equality
/// of the `Arc` is enough to know the output is still valid. The cached
/// snapshot is held strongly, which keeps its address from being reused.
pub struct Memoized<P: Projector> {
    projector: P,
    last: Option<(Arc<P::Input>, Arc<P::Output>)>,
}

impl<P: Projector> Memoized<P> {
    /// Wraps a projector with an empty cache
    #[must_use]
    pub const fn new(projector: P) -> Self {
        Self {
            projector,
            last: None,
        }
    }

    /// Projects `snapshot`, reusing the previous output if it is the same snapshot.
    pub fn project(&mut self, snapshot: &Arc<P::Input>) -> Arc<P::Output> {
        if let Some((input, output)) = &self.last {
            if Arc::ptr_eq(input, snapshot) {
                return Arc::clone(output);
            }
        }

        let output = Arc::new(self.projector.project(snapshot));
        self.last = Some((Arc::clone(snapshot), Arc::clone(&output)));
        output
    }

    /// Returns the wrapped projector
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.projector
    }
}
