// src/kmeans1d/sorted.rs
use ordered_float::OrderedFloat;

use crate::{KmError, KmResult};

/// Input values sorted ascending, plus the permutation back to caller order.
///
/// - `values[pos]` is the `pos`-th smallest input value.
/// - `order[pos]` is the caller's index of that value; `order` is a bijection on `[0, n)`.
/// - Ties keep their input order (stable sort), and `-0.0`/`0.0` compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSample {
    values: Vec<f64>,
    order: Vec<usize>,
}

#[inline]
fn ensure_finite_values(values: &[f64]) -> KmResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(KmError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

impl SortedSample {
    /// Stable-sort `values` and remember where each one came from.
    pub fn from_values(values: &[f64]) -> KmResult<Self> {
        ensure_finite_values(values)?;
        let mut order: Vec<usize> = (0..values.len()).collect();
        // `sort_by_key` is stable: equal keys stay in input order.
        order.sort_by_key(|&i| OrderedFloat(values[i]));
        let sorted = order.iter().map(|&i| values[i]).collect();
        Ok(Self {
            values: sorted,
            order,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sorted position → original index.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn original_index(&self, pos: usize) -> usize {
        self.order[pos]
    }

    /// Scatter a per-sorted-position vector back into caller order.
    pub fn unsort<T: Copy + Default>(&self, by_position: &[T]) -> Vec<T> {
        debug_assert_eq!(by_position.len(), self.len());
        let mut out = vec![T::default(); by_position.len()];
        for (pos, &v) in by_position.iter().enumerate() {
            out[self.order[pos]] = v;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_tracks_original_positions() {
        let s = SortedSample::from_values(&[3.0, -1.0, 2.0]).unwrap();
        assert_eq!(s.values(), &[-1.0, 2.0, 3.0]);
        assert_eq!(s.order(), &[1, 2, 0]);
        assert_eq!(s.original_index(2), 0);
    }

    #[test]
    fn ties_keep_input_order() {
        let s = SortedSample::from_values(&[5.0, 1.0, 5.0, 0.0, -0.0, 5.0]).unwrap();
        assert_eq!(s.order(), &[3, 4, 1, 0, 2, 5]);
    }

    #[test]
    fn unsort_inverts_the_permutation() {
        let xs = [9.0, 4.0, 7.0, 1.0];
        let s = SortedSample::from_values(&xs).unwrap();
        let back = s.unsort(s.values());
        assert_eq!(back, xs.to_vec());
    }

    #[test]
    fn rejects_nan_and_infinities_with_caller_index() {
        assert_eq!(
            SortedSample::from_values(&[1.0, f64::NAN]),
            Err(KmError::NonFiniteInput { index: 1 })
        );
        assert_eq!(
            SortedSample::from_values(&[f64::NEG_INFINITY, 1.0]),
            Err(KmError::NonFiniteInput { index: 0 })
        );
    }
}
