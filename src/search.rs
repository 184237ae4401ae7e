//! Linear and binary search by logical index.

use std::cmp::Ordering;

use crate::CircularArray;

impl<T> CircularArray<T> {
    /// Returns the logical index of the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let array: CircularArray<_> = vec![4, 8, 15, 8].into_iter().collect();
    /// assert_eq!(array.linear_search(&8), Some(1));
    /// assert_eq!(array.linear_search(&16), None);
    /// ```
    pub fn linear_search(&self, x: &T) -> Option<usize>
        where T: PartialEq
    {
        self.iter().position(|element| element == x)
    }

    /// Binary search for `x` in an array sorted ascending.
    ///
    /// Returns the index of *a* matching element, not necessarily the first.
    /// On an unsorted array the search still terminates but the answer is
    /// meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let array: CircularArray<_> = vec![1, 3, 5, 7, 9].into_iter().collect();
    /// assert_eq!(array.binary_search(&7), Some(3));
    /// assert_eq!(array.binary_search(&4), None);
    /// ```
    pub fn binary_search(&self, x: &T) -> Option<usize>
        where T: Ord
    {
        self.binary_search_within(0, self.len(), x)
    }

    /// Searches the half-open logical range `low..high`.
    fn binary_search_within(&self, low: usize, high: usize, x: &T) -> Option<usize>
        where T: Ord
    {
        if low >= high {
            return None;
        }
        let middle = low + (high - low) / 2;
        match self.slot(middle).cmp(x) {
            Ordering::Equal => Some(middle),
            Ordering::Greater => self.binary_search_within(low, middle, x),
            Ordering::Less => self.binary_search_within(middle + 1, high, x),
        }
    }
}
