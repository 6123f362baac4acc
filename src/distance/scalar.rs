//! Scalar distance and averaging primitives over f32 slices.

/// Pair up components of two equal-length vectors.
///
/// # Panics
/// Panics if the vectors have different dimensions.
#[inline]
fn components<'a>(a: &'a [f32], b: &'a [f32]) -> impl Iterator<Item = (f32, f32)> + 'a {
    assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter().copied().zip(b.iter().copied())
}

/// Squared Euclidean distance: sum((a[i] - b[i])^2)
#[inline]
pub fn euclidean_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    components(a, b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Euclidean (L2) distance: sqrt(sum((a[i] - b[i])^2))
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Manhattan (L1) distance: sum(|a[i] - b[i]|)
#[inline]
pub fn manhattan_distance(a: &[f32], b: &[f32]) -> f32 {
    components(a, b).map(|(x, y)| (x - y).abs()).sum()
}

/// Cosine similarity in [-1, 1]. Zero vectors have similarity 0.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = components(a, b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, na, nb), (x, y)| {
            (d + x * y, na + x * x, nb + y * y)
        });

    let denom = (norm_a * norm_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

/// Cosine distance: 1 - cosine_similarity(a, b)
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

/// Component-wise mean of a group of equal-length vectors.
///
/// Accumulates in f64 so large groups of small integers (pixel channels)
/// average exactly. An empty group yields an empty vector.
///
/// # Panics
/// Panics if the vectors have different dimensions.
pub fn mean<V: AsRef<[f32]>>(group: &[V]) -> Vec<f32> {
    let Some(first) = group.first() else {
        return Vec::new();
    };
    let dim = first.as_ref().len();

    let mut sums = vec![0.0f64; dim];
    for v in group {
        let v = v.as_ref();
        assert_eq!(v.len(), dim, "Vector dimensions must match");
        for (sum, &x) in sums.iter_mut().zip(v) {
            *sum += f64::from(x);
        }
    }

    let n = group.len() as f64;
    sums.into_iter().map(|s| (s / n) as f32).collect()
}

/// Position of the member of `group` nearest to `target` under `distance`.
///
/// The first member wins ties. Returns `None` for an empty group.
pub fn nearest_member<V, F>(group: &[V], target: &[f32], distance: F) -> Option<usize>
where
    V: AsRef<[f32]>,
    F: Fn(&[f32], &[f32]) -> f32,
{
    let mut best: Option<(usize, f32)> = None;
    for (i, v) in group.iter().enumerate() {
        let d = distance(v.as_ref(), target);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
