//! Cache Keys
//!
//! An [`ArrayKey`] is an immutable fixed-shape `f32` array used as the probe
//! and storage key of the tolerance cache. The shape is fixed at construction
//! and never mutated; two keys are candidates for a tolerance match only when
//! their shapes are identical.
//!
//! # Example
//!
//! ```
//! use nearcache::ArrayKey;
//!
//! let key = ArrayKey::vector(vec![0.0, 0.5, 1.0]).unwrap();
//! assert_eq!(key.shape(), &[3]);
//! assert_eq!(key.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NearcacheError, Result};

/// An immutable numeric array with a fixed shape, used as a cache key.
///
/// Data is stored flat in row-major order. Construction validates that the
/// element count matches the product of the shape; shape and data are never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayKey {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl ArrayKey {
    /// Create a key with an explicit shape.
    ///
    /// # Errors
    ///
    /// Returns [`NearcacheError::EmptyKey`] if the shape implies zero
    /// elements, and [`NearcacheError::ShapeDataMismatch`] if `data.len()`
    /// does not equal the product of `shape`.
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected == 0 {
            return Err(NearcacheError::EmptyKey);
        }
        if data.len() != expected {
            return Err(NearcacheError::ShapeDataMismatch {
                shape,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a rank-1 key directly from a flat vector.
    ///
    /// # Errors
    ///
    /// Returns [`NearcacheError::EmptyKey`] if `data` is empty.
    pub fn vector(data: Vec<f32>) -> Result<Self> {
        let len = data.len();
        Self::new(vec![len], data)
    }

    /// The key's shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The key's elements, flat in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the key has zero elements. Always false for a constructed key.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Exact bitwise equality of shape and elements.
    ///
    /// Compares element bits rather than float values so that a key
    /// containing NaN still compares equal to itself. This governs the
    /// overwrite-on-exact-duplicate rule of [`ToleranceCache::insert`],
    /// not tolerance matching.
    ///
    /// [`ToleranceCache::insert`]: crate::cache::ToleranceCache::insert
    pub fn bitwise_eq(&self, other: &ArrayKey) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// Whether `other` has the same shape as this key.
    pub fn same_shape(&self, other: &ArrayKey) -> bool {
        self.shape == other.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_key() {
        let key = ArrayKey::vector(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(key.shape(), &[3]);
        assert_eq!(key.data(), &[1.0, 2.0, 3.0]);
        assert!(!key.is_empty());
    }

    #[test]
    fn test_shaped_key() {
        let key = ArrayKey::new(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(key.shape(), &[2, 3]);
        assert_eq!(key.len(), 6);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            ArrayKey::vector(vec![]),
            Err(NearcacheError::EmptyKey)
        ));
        assert!(matches!(
            ArrayKey::new(vec![0, 3], vec![]),
            Err(NearcacheError::EmptyKey)
        ));
    }

    #[test]
    fn test_shape_data_mismatch() {
        let err = ArrayKey::new(vec![2, 2], vec![1.0, 2.0, 3.0]).unwrap_err();
        match err {
            NearcacheError::ShapeDataMismatch { expected, got, .. } => {
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bitwise_eq() {
        let a = ArrayKey::vector(vec![1.0, 2.0]).unwrap();
        let b = ArrayKey::vector(vec![1.0, 2.0]).unwrap();
        let c = ArrayKey::vector(vec![1.0, 2.5]).unwrap();
        assert!(a.bitwise_eq(&b));
        assert!(!a.bitwise_eq(&c));

        // Same elements, different shape
        let d = ArrayKey::new(vec![2, 1], vec![1.0, 2.0]).unwrap();
        assert!(!a.bitwise_eq(&d));
    }

    #[test]
    fn test_bitwise_eq_nan() {
        let a = ArrayKey::vector(vec![f32::NAN, 1.0]).unwrap();
        let b = a.clone();
        assert!(a.bitwise_eq(&b));
    }

    #[test]
    fn test_same_shape() {
        let a = ArrayKey::new(vec![2, 2], vec![0.0; 4]).unwrap();
        let b = ArrayKey::new(vec![2, 2], vec![9.0; 4]).unwrap();
        let c = ArrayKey::vector(vec![0.0; 4]).unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
