//! Deterministic spaced seeding.
//!
//! Initial centroids are sampled at evenly spaced positions through the
//! input, skipping values that duplicate an already chosen seed. When a
//! duplicate leaves no room to keep stepping forward, the scan restarts one
//! position further along. No randomness is involved: the same input always
//! yields the same seeds.

use crate::error::{ClusterError, Result};
use crate::strategy::Strategy;

/// Seeds picked from the data, with the positions they were taken from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Seeds<T> {
    pub values: Vec<T>,
    pub positions: Vec<usize>,
}

/// Select `k` pairwise-distinct values from `data`.
///
/// # Errors
///
/// Returns `InvalidParameter` unless `0 < k < data.len()`, and
/// `SeedingExhausted` if every start offset is used up before `k` distinct
/// values are found.
pub(crate) fn select<T, S>(k: usize, data: &[T], strategy: &S) -> Result<Seeds<T>>
where
    T: Clone,
    S: Strategy<T> + ?Sized,
{
    let n = data.len();
    if k == 0 {
        return Err(ClusterError::invalid_parameter("k must be at least 1"));
    }
    if k >= n {
        return Err(ClusterError::invalid_parameter(format!(
            "k ({k}) must be less than data length ({n})"
        )));
    }

    let mut values: Vec<T> = Vec::with_capacity(k);
    let mut positions = Vec::with_capacity(k);
    let mut start = 0;
    let mut idx = start;
    let mut step = spacing(n, idx, k, 0);

    while values.len() < k {
        if start >= n {
            return Err(ClusterError::seeding_exhausted(k, values.len()));
        }

        let accepted = match data.get(idx) {
            Some(candidate) if !values.iter().any(|v| strategy.equals(v, candidate)) => {
                values.push(candidate.clone());
                positions.push(idx);
                true
            }
            _ => false,
        };

        if !accepted {
            step = spacing(n, idx, k, values.len());
            if step == 0 {
                start += 1;
                idx = start;
                step = spacing(n, idx, k, values.len());
                continue;
            }
        }

        idx += step;
    }

    Ok(Seeds { values, positions })
}

/// Even spacing that fits the remaining seeds into what is left of the data.
///
/// A cursor already past the end yields 0.
#[inline]
fn spacing(n: usize, idx: usize, k: usize, chosen: usize) -> usize {
    (n - 1).saturating_sub(idx) / (k - chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::FnStrategy;

    fn exact() -> impl Strategy<i32> {
        FnStrategy::new(
            |a: &i32, b: &i32| (a - b).abs() as f64,
            |group: &[&i32]| *group[0],
            |a: &i32, b: &i32| a == b,
        )
    }

    #[test]
    fn test_spread_across_input() {
        let data: Vec<i32> = (0..10).collect();
        let seeds = select(3, &data, &exact()).unwrap();
        // step = floor(9 / 3) = 3
        assert_eq!(seeds.positions, vec![0, 3, 6]);
        assert_eq!(seeds.values, vec![0, 3, 6]);
    }

    #[test]
    fn test_single_seed_takes_first_item() {
        let data = vec![5, 6, 7];
        let seeds = select(1, &data, &exact()).unwrap();
        assert_eq!(seeds.values, vec![5]);
    }

    #[test]
    fn test_duplicate_recomputes_step() {
        // step = floor(5 / 2) = 2: idx 0 accepted, idx 2 duplicates 0,
        // step = floor(3 / 1) = 3 so idx 5 is tried next.
        let data = vec![0, 1, 0, 1, 1, 9];
        let seeds = select(2, &data, &exact()).unwrap();
        assert_eq!(seeds.positions, vec![0, 5]);
        assert_eq!(seeds.values, vec![0, 9]);
    }

    #[test]
    fn test_restart_from_next_offset() {
        // Offsets 0 and 1 only ever reach duplicates of the first seed;
        // the scan finds 7 after restarting at offset 2.
        let data = vec![4, 4, 7, 4];
        let seeds = select(2, &data, &exact()).unwrap();
        assert_eq!(seeds.values, vec![4, 7]);
        assert_eq!(seeds.positions, vec![0, 2]);
    }

    #[test]
    fn test_pairwise_distinct() {
        let data = vec![1, 1, 2, 2, 3, 3, 1, 2, 3, 4];
        let seeds = select(4, &data, &exact()).unwrap();
        let mut sorted = seeds.values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn test_k_not_less_than_len() {
        let data = vec![1, 2, 3, 4, 5];
        let err = select(5, &data, &exact()).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = select(9, &data, &exact()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_k_zero() {
        let err = select(0, &[1, 2], &exact()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_exhausted_when_too_few_distinct() {
        let data = vec![3, 3, 3, 3, 3];
        let err = select(2, &data, &exact()).unwrap_err();
        assert_eq!(err, ClusterError::seeding_exhausted(2, 1));

        let data = vec![1, 2, 1, 2, 1, 2];
        let err = select(3, &data, &exact()).unwrap_err();
        assert_eq!(err, ClusterError::seeding_exhausted(3, 2));
    }
}
