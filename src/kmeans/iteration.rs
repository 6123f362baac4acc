//! One assign-then-aggregate pass over the data.

use crate::strategy::Strategy;
use crate::types::Centroid;

/// Index of the centroid nearest to `item`.
///
/// Centroids are scanned in slot order and only a strictly smaller distance
/// replaces the current best, so the lowest slot wins ties. `centroids`
/// must be non-empty.
#[inline]
pub(crate) fn nearest<T, S>(centroids: &[Centroid<T>], item: &T, strategy: &S) -> usize
where
    S: Strategy<T> + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for (slot, centroid) in centroids.iter().enumerate() {
        let d = strategy.distance(item, &centroid.value);
        let closer = match best {
            None => true,
            Some((_, best_d)) => d < best_d,
        };
        if closer {
            best = Some((slot, d));
        }
    }
    best.map_or(0, |(slot, _)| slot)
}

/// Assign every item, in input order, to its nearest centroid.
///
/// Centroids must already be reset.
pub(crate) fn assign<T, S>(centroids: &mut [Centroid<T>], data: &[T], strategy: &S)
where
    S: Strategy<T> + ?Sized,
{
    for (index, item) in data.iter().enumerate() {
        let slot = nearest(centroids, item, strategy);
        centroids[slot].assign(index);
    }
}

/// Recompute every centroid's value from its assigned group.
///
/// Returns how many centroids kept their value. A centroid with no
/// assigned items keeps its previous value and counts as unchanged.
/// `group` is scratch space reused across slots.
pub(crate) fn aggregate<'a, T, S>(
    centroids: &mut [Centroid<T>],
    data: &'a [T],
    strategy: &S,
    group: &mut Vec<&'a T>,
) -> usize
where
    S: Strategy<T> + ?Sized,
{
    let mut stable = 0;
    for centroid in centroids.iter_mut() {
        if centroid.indexes.is_empty() {
            stable += 1;
            continue;
        }

        group.clear();
        group.extend(centroid.indexes.iter().map(|&i| &data[i]));

        let next = strategy.average(group.as_slice());
        if strategy.equals(&centroid.value, &next) {
            stable += 1;
        } else {
            centroid.value = next;
        }
    }
    group.clear();
    stable
}
