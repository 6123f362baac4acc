//! The capability interface that parameterizes the engine over any data type.
//!
//! The engine never inspects a data item. Everything it needs to know about
//! items comes from three caller-owned operations: a distance used for
//! nearest-centroid comparison, an averaging reduction over a group, and an
//! equality test used for seed deduplication and convergence detection.

/// Caller-supplied distance, averaging and equality over items of type `T`.
///
/// Implementations should be pure: the engine may call each method any
/// number of times and relies on identical inputs producing identical
/// outputs for its determinism guarantee.
pub trait Strategy<T> {
    /// Distance between two items. Must be non-negative.
    ///
    /// Only used to rank centroids for an item, so no metric axioms are
    /// required.
    fn distance(&self, a: &T, b: &T) -> f64;

    /// Reduce a group to one representative value.
    ///
    /// The engine only calls this with a non-empty group, in assignment
    /// order. The result does not have to be a member of the group.
    fn average(&self, group: &[&T]) -> T;

    /// Return true if two items are considered the same value.
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T, S: Strategy<T> + ?Sized> Strategy<T> for &S {
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        (**self).distance(a, b)
    }

    #[inline]
    fn average(&self, group: &[&T]) -> T {
        (**self).average(group)
    }

    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }
}

/// A [`Strategy`] assembled from three independent closures.
///
/// ```
/// use kcluster::{FnStrategy, Strategy};
///
/// let strategy = FnStrategy::new(
///     |a: &i32, b: &i32| (a - b).abs() as f64,
///     |group: &[&i32]| *group[0],
///     |a: &i32, b: &i32| a == b,
/// );
/// assert_eq!(strategy.distance(&1, &4), 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnStrategy<D, A, E> {
    distance: D,
    average: A,
    equals: E,
}

impl<D, A, E> FnStrategy<D, A, E> {
    /// Bundle the three strategy functions.
    pub fn new(distance: D, average: A, equals: E) -> Self {
        Self {
            distance,
            average,
            equals,
        }
    }
}

impl<T, D, A, E> Strategy<T> for FnStrategy<D, A, E>
where
    D: Fn(&T, &T) -> f64,
    A: Fn(&[&T]) -> T,
    E: Fn(&T, &T) -> bool,
{
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        (self.distance)(a, b)
    }

    #[inline]
    fn average(&self, group: &[&T]) -> T {
        (self.average)(group)
    }

    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }
}
