//! Order statistics: randomized quickselect and median-of-medians select.
//!
//! Both reorder the array in place while they search. Only the returned
//! value is meaningful afterwards; the position of any other element is
//! unspecified.

use std::cmp::{self, Ordering};

use log::warn;
use rand::Rng;

use crate::error::{Error, Result};
use crate::sort::merge_sort_slice;
use crate::CircularArray;

/// Width of the groups median-of-medians splits a range into.
const GROUP: usize = 5;

impl<T: Ord + Clone> CircularArray<T> {
    /// Returns the `k`-th smallest element (1-based) using quickselect with a
    /// random pivot.
    ///
    /// Expected `O(n)`. Fails with `Error::InvalidArgument` unless
    /// `1 <= k <= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<_> = vec![5, 3, 8, 1, 9, 2].into_iter().collect();
    /// assert_eq!(array.quick_select(3), Ok(3));
    /// assert_eq!(array.quick_select(6), Ok(9));
    /// assert!(array.quick_select(7).is_err());
    /// ```
    pub fn quick_select(&mut self, k: usize) -> Result<T> {
        self.quick_select_with(k, &mut rand::thread_rng())
    }

    /// `quick_select` drawing pivots from the given generator.
    pub fn quick_select_with<R>(&mut self, k: usize, rng: &mut R) -> Result<T>
        where R: Rng
    {
        self.check_rank(k)?;
        let target = k - 1;
        let (mut left, mut right) = (0, self.len() - 1);
        loop {
            if left == right {
                return Ok(self.slot(left).clone());
            }
            let pivot = self.slot(rng.gen_range(left..=right)).clone();
            let (low, high) = self.partition_around(left, right, &pivot);
            if target < low {
                right = low - 1;
            } else if target > high {
                left = high + 1;
            } else {
                return Ok(pivot);
            }
        }
    }

    /// Returns the `k`-th smallest element (1-based) in worst-case `O(n)`,
    /// pivoting on the median of medians of groups of five.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::{CircularArray, Error};
    ///
    /// let mut array: CircularArray<_> = vec![5, 3, 8, 1, 9, 2].into_iter().collect();
    /// assert_eq!(array.worst_case_select(3), Ok(3));
    /// assert_eq!(array.worst_case_select(0), Err(Error::InvalidArgument { rank: 0, len: 6 }));
    /// ```
    pub fn worst_case_select(&mut self, k: usize) -> Result<T> {
        self.check_rank(k)?;
        Ok(self.select_linear(k - 1))
    }

    /// Element of 0-based rank `target`, which must be `< len`.
    fn select_linear(&mut self, target: usize) -> T {
        debug_assert!(target < self.len());
        let (mut left, mut right) = (0, self.len() - 1);
        loop {
            if left == right {
                return self.slot(left).clone();
            }
            let pivot = self.median_of_medians(left, right);
            let (low, high) = self.partition_around(left, right, &pivot);
            if target < low {
                right = low - 1;
            } else if target > high {
                left = high + 1;
            } else {
                return pivot;
            }
        }
    }

    fn check_rank(&self, k: usize) -> Result<()> {
        if k == 0 || k > self.len() {
            warn!("selection rank {} outside 1..={}", k, self.len());
            return Err(Error::InvalidArgument { rank: k, len: self.len() });
        }
        Ok(())
    }

    /// Three-way partition of `left..=right` around `pivot`, which must
    /// occur in the range. Returns the inclusive bounds of the run of
    /// elements equal to it.
    fn partition_around(&mut self, left: usize, right: usize, pivot: &T) -> (usize, usize) {
        let (mut low, mut i, mut high) = (left, left, right + 1);
        while i < high {
            match self.slot(i).cmp(pivot) {
                Ordering::Less => {
                    self.swap_slots(low, i);
                    low += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    high -= 1;
                    self.swap_slots(i, high);
                }
                Ordering::Equal => i += 1,
            }
        }
        debug_assert!(low < high, "pivot missing from {}..={}", left, right);
        (low, high - 1)
    }

    /// Sorts each group of five in `left..=right` and picks the median of
    /// the group medians.
    fn median_of_medians(&mut self, left: usize, right: usize) -> T {
        let len = right - left + 1;
        let mut medians = Vec::with_capacity((len + GROUP - 1) / GROUP);
        let mut mergebuf = Vec::with_capacity(GROUP);

        let mut start = left;
        while start <= right {
            let end = cmp::min(start + GROUP - 1, right);
            self.merge_sort(start, end, &mut mergebuf);
            medians.push(self.slot(start + (end - start + 1) / 2).clone());
            start += GROUP;
        }

        if medians.len() <= GROUP {
            merge_sort_slice(&mut medians);
            let middle = medians.len() / 2;
            return medians.swap_remove(middle);
        }

        let middle = medians.len() / 2;
        let mut medians: CircularArray<T> = medians.into_iter().collect();
        medians.select_linear(middle)
    }
}
