//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};

/// A dense 1D vector of numeric values.
///
/// # Examples
///
/// ```
/// use predecir::primitives::Vector;
///
/// let v = Vector::from_slice(&[5.1, 3.5, 1.4, 0.2]);
/// assert_eq!(v.len(), 4);
/// assert!((v.sum() - 10.2).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from an owned Vec.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl Vector<f32> {
    /// Creates a vector of zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Returns the sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Returns the index of the largest element (lowest index wins ties),
    /// or None for an empty vector.
    #[must_use]
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &x) in self.data.iter().enumerate() {
            match best {
                Some((_, b)) if x <= b => {}
                _ => best = Some((i, x)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_roundtrip() {
        let v = Vector::from_slice(&[1.0f32, 2.0, 3.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
    }

    #[test]
    fn test_sum() {
        let v = Vector::from_slice(&[0.5f32, 0.25, 0.25]);
        assert!((v.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_argmax_lowest_index_wins_ties() {
        let v = Vector::from_slice(&[0.4f32, 0.4, 0.2]);
        assert_eq!(v.argmax(), Some(0));
    }

    #[test]
    fn test_argmax_empty() {
        let v: Vector<f32> = Vector::from_vec(vec![]);
        assert_eq!(v.argmax(), None);
    }

    #[test]
    fn test_index() {
        let mut v = Vector::from_slice(&[1.0f32, 2.0]);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    fn test_zeros() {
        let v = Vector::zeros(4);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
    }
}
