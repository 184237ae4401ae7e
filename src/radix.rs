//! Least-significant-bit-first radix sort.
//!
//! Each element is reinterpreted as an unsigned integer of its own width
//! through [`RadixKey`]. Signed integers use their two's-complement bit
//! pattern, so when the sort covers the sign bit negative values land
//! *after* every non-negative value. Sorting on fewer bits than the full
//! width orders by the low bits only.

use log::warn;

use crate::error::{Error, Result};
use crate::CircularArray;

/// Unsigned reinterpretation of an element for radix sorting.
pub trait RadixKey {
    /// Number of meaningful bits in `radix_key`.
    const BITS: u32;

    /// The element's bit pattern, zero-extended to 64 bits.
    fn radix_key(&self) -> u64;
}

macro_rules! radix_key_impl {
    ($($t:ty => $unsigned:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$unsigned>::BITS;

                #[inline(always)]
                fn radix_key(&self) -> u64 {
                    *self as $unsigned as u64
                }
            }
        )*
    }
}

radix_key_impl!(u8 => u8, u16 => u16, u32 => u32, u64 => u64, usize => usize,
                i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

impl RadixKey for bool {
    const BITS: u32 = 1;

    #[inline(always)]
    fn radix_key(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for char {
    const BITS: u32 = 21;

    #[inline(always)]
    fn radix_key(&self) -> u64 {
        *self as u64
    }
}

impl<T: RadixKey + Clone> CircularArray<T> {
    /// Sorts by the low `bits` bits of each element's [`RadixKey`], one
    /// stable binary counting pass per bit, least significant first.
    ///
    /// `bits == 0` leaves the array untouched. Fails with
    /// `Error::InvalidBitCount` when `bits` exceeds `T::BITS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<u32> = vec![6, 1, 7, 4, 2].into_iter().collect();
    /// array.radix_sort(3).unwrap();
    /// assert_eq!(array.to_vec(), vec![1, 2, 4, 6, 7]);
    ///
    /// // only the lowest bit: evens first, in their original order
    /// let mut array: CircularArray<u32> = vec![6, 1, 7, 4, 2].into_iter().collect();
    /// array.radix_sort(1).unwrap();
    /// assert_eq!(array.to_vec(), vec![6, 4, 2, 1, 7]);
    /// ```
    pub fn radix_sort(&mut self, bits: u32) -> Result<()> {
        if bits > T::BITS {
            warn!("radix sort on {} bits exceeds the {}-bit key", bits, T::BITS);
            return Err(Error::InvalidBitCount { bits, max: T::BITS });
        }
        if self.len() > 1 {
            for bit in 0..bits {
                self.bit_counting_sort(bit);
            }
        }
        Ok(())
    }

    fn bit_counting_sort(&mut self, bit: u32) {
        let len = self.len();
        let mut zeros = Vec::with_capacity(len);
        let mut ones = Vec::new();
        for element in self.iter() {
            if (element.radix_key() >> bit) & 1 == 0 {
                zeros.push(element.clone());
            } else {
                ones.push(element.clone());
            }
        }
        debug_assert_eq!(zeros.len() + ones.len(), len);

        for (i, element) in zeros.into_iter().chain(ones).enumerate() {
            *self.slot_mut(i) = element;
        }
    }
}
