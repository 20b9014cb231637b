//! Distance Functions
//!
//! Scalar L2 (Euclidean) distance helpers used by the tolerance match
//! predicate. The cache compares a probe against at most `maxsize` stored
//! keys per lookup, so plain scalar loops are sufficient here.
//!
//! # Example
//!
//! ```
//! use nearcache::distance::euclidean_distance;
//!
//! let a = vec![0.0, 0.0];
//! let b = vec![3.0, 4.0];
//! assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-6);
//! ```

/// Compute Euclidean (L2) distance
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Compute squared Euclidean distance (faster, for comparisons)
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
#[inline]
pub fn euclidean_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(
        a.len(),
        b.len(),
        "vectors must have equal length for euclidean distance"
    );
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Compute the L2 norm of a vector
#[inline]
pub fn l2_norm(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        let dist = euclidean_distance(&a, &b);
        assert!((dist - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_distance_identical() {
        let a = vec![0.3, -1.2, 4.5];
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_euclidean_distance_squared() {
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert!((euclidean_distance_squared(&a, &b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_norm() {
        assert!((l2_norm(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
        assert_eq!(l2_norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_length_mismatch_panics() {
        euclidean_distance(&[1.0, 2.0], &[1.0]);
    }
}
