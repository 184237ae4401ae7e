//! Stable top-down merge sort over logical index ranges.

use log::warn;

use crate::error::{Error, Result};
use crate::{CircularArray, RangeArgument};

impl<T: Ord + Clone> CircularArray<T> {
    /// Sorts the array ascending, keeping equal elements in their original
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<_> = vec![4, 2, 2, 5, 1].into_iter().collect();
    /// array.stable_sort();
    /// assert_eq!(array.to_vec(), vec![1, 2, 2, 4, 5]);
    /// ```
    pub fn stable_sort(&mut self) {
        if self.len() > 1 {
            let mut scratch = Vec::with_capacity(self.len());
            self.merge_sort(0, self.len() - 1, &mut scratch);
        }
    }

    /// Stable sort of the elements in `range`, leaving the rest in place.
    ///
    /// Fails with `Error::IndexOutOfRange` if the range reaches past the end
    /// of the array and with `Error::InvalidRange` if it starts after it ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<_> = vec![9, 4, 3, 8, 0].into_iter().collect();
    /// array.stable_sort_range(1..4).unwrap();
    /// assert_eq!(array.to_vec(), vec![9, 3, 4, 8, 0]);
    /// assert!(array.stable_sort_range(2..).is_ok());
    /// assert!(array.stable_sort_range(..6).is_err());
    /// ```
    pub fn stable_sort_range<R>(&mut self, range: R) -> Result<()>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        if end > len {
            warn!("sort range {}..{} past the end of length {}", start, end, len);
            return Err(Error::IndexOutOfRange { index: end, len });
        }
        if start > end {
            warn!("sort range {}..{} is reversed", start, end);
            return Err(Error::InvalidRange { start, end });
        }
        if end - start > 1 {
            let mut scratch = Vec::with_capacity(end - start);
            self.merge_sort(start, end - 1, &mut scratch);
        }
        Ok(())
    }

    /// Sorts the inclusive logical range `left..=right`.
    pub(crate) fn merge_sort(&mut self, left: usize, right: usize, scratch: &mut Vec<T>) {
        if left < right {
            let middle = left + (right - left) / 2;
            self.merge_sort(left, middle, scratch);
            self.merge_sort(middle + 1, right, scratch);
            self.merge(left, middle, right, scratch);
        }
    }

    fn merge(&mut self, left: usize, middle: usize, right: usize, scratch: &mut Vec<T>) {
        scratch.clear();
        let (mut i, mut j) = (left, middle + 1);
        while i <= middle && j <= right {
            // ties go left
            if self.slot(j) < self.slot(i) {
                scratch.push(self.slot(j).clone());
                j += 1;
            } else {
                scratch.push(self.slot(i).clone());
                i += 1;
            }
        }
        while i <= middle {
            scratch.push(self.slot(i).clone());
            i += 1;
        }
        while j <= right {
            scratch.push(self.slot(j).clone());
            j += 1;
        }

        for (offset, element) in scratch.drain(..).enumerate() {
            *self.slot_mut(left + offset) = element;
        }
    }
}

/// Stable merge sort of a flat slice.
pub(crate) fn merge_sort_slice<T: Ord + Clone>(data: &mut [T]) {
    let mut scratch = Vec::with_capacity(data.len());
    sort_slice(data, &mut scratch);
}

fn sort_slice<T: Ord + Clone>(data: &mut [T], scratch: &mut Vec<T>) {
    if data.len() < 2 {
        return;
    }
    let middle = (data.len() + 1) / 2;
    {
        let (low, high) = data.split_at_mut(middle);
        sort_slice(low, scratch);
        sort_slice(high, scratch);
    }

    scratch.clear();
    let (mut i, mut j) = (0, middle);
    while i < middle && j < data.len() {
        if data[j] < data[i] {
            scratch.push(data[j].clone());
            j += 1;
        } else {
            scratch.push(data[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&data[i..middle]);
    scratch.extend_from_slice(&data[j..]);
    data.clone_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    /// Orders by `key` only, so `id` exposes reordering of equal keys.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Tagged {
        key: u8,
        id: usize,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(keys: &[u8]) -> Vec<Tagged> {
        keys.iter().enumerate().map(|(id, &key)| Tagged { key, id }).collect()
    }

    #[test]
    fn sorts_with_duplicates() {
        let mut array: CircularArray<_> = vec![4, 2, 2, 5, 1].into_iter().collect();
        array.stable_sort();
        assert_eq!(array, vec![1, 2, 2, 4, 5]);
    }

    #[test]
    fn sorts_across_the_wrap() {
        let mut array = CircularArray::new();
        for i in [3, 9, 1, 7] {
            array.add_end(i);
        }
        array.del_front().unwrap();
        array.del_front().unwrap();
        array.add_end(4);
        array.add_end(0);
        assert_eq!(array.as_slices(), (&[1, 7][..], &[4, 0][..]));

        array.stable_sort();
        assert_eq!(array, vec![0, 1, 4, 7]);
    }

    #[test]
    fn keeps_equal_elements_in_order() {
        let input = tagged(&[3, 1, 3, 2, 1, 3, 2, 1]);
        let mut array = CircularArray::new();
        for element in input.iter().rev() {
            array.add_front(element.clone());
        }
        array.stable_sort();

        let ids: Vec<_> = array.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4, 7, 3, 6, 0, 2, 5]);
    }

    #[test]
    fn empty_and_single() {
        let mut array: CircularArray<i32> = CircularArray::new();
        array.stable_sort();
        assert!(array.is_empty());
        array.add_end(1);
        array.stable_sort();
        assert_eq!(array, vec![1]);
    }

    #[test]
    fn range_sort() {
        let mut array: CircularArray<_> = vec![9, 4, 3, 8, 0].into_iter().collect();
        array.stable_sort_range(1..4).unwrap();
        assert_eq!(array, vec![9, 3, 4, 8, 0]);
        array.stable_sort_range(..).unwrap();
        assert_eq!(array, vec![0, 3, 4, 8, 9]);
        assert_eq!(array.stable_sort_range(3..7), Err(Error::IndexOutOfRange { index: 7, len: 5 }));
        assert_eq!(array.stable_sort_range(4..2), Err(Error::InvalidRange { start: 4, end: 2 }));
        assert_eq!(array.stable_sort_range(6..2), Err(Error::InvalidRange { start: 6, end: 2 }));
        assert_eq!(array, vec![0, 3, 4, 8, 9]);
    }

    #[test]
    fn slice_sort_is_stable() {
        let mut data = tagged(&[2, 0, 2, 1, 0]);
        merge_sort_slice(&mut data);
        let ids: Vec<_> = data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4, 3, 0, 2]);

        let mut odd = vec![5, 1, 4];
        merge_sort_slice(&mut odd);
        assert_eq!(odd, vec![1, 4, 5]);
    }
}
