use std::collections::VecDeque;

use cdarray::CircularArray;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    AddFront(i32),
    AddEnd(i32),
    DelFront,
    DelEnd,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<i32>().prop_map(Step::AddFront),
        any::<i32>().prop_map(Step::AddEnd),
        Just(Step::DelFront),
        Just(Step::DelEnd),
    ]
}

/// Builds an array whose logical order is `values` but whose storage wraps:
/// the first `split` values are pushed onto the front.
fn wrapped<T: Clone>(values: &[T], split: usize) -> CircularArray<T> {
    let split = split % (values.len() + 1);
    let mut array = CircularArray::new();
    for v in &values[split..] {
        array.add_end(v.clone());
    }
    for v in values[..split].iter().rev() {
        array.add_front(v.clone());
    }
    array
}

proptest! {
    #[test]
    fn behaves_like_a_deque(steps in prop::collection::vec(step(), 0..400)) {
        let mut array = CircularArray::new();
        let mut model = VecDeque::new();
        for step in steps {
            match step {
                Step::AddFront(v) => {
                    array.add_front(v);
                    model.push_front(v);
                }
                Step::AddEnd(v) => {
                    array.add_end(v);
                    model.push_back(v);
                }
                Step::DelFront => {
                    prop_assert_eq!(array.del_front().ok(), model.pop_front());
                }
                Step::DelEnd => {
                    prop_assert_eq!(array.del_end().ok(), model.pop_back());
                }
            }
            prop_assert_eq!(array.len(), model.len());
            prop_assert!(array.len() <= array.capacity());
            prop_assert!(array.capacity().is_power_of_two());
            prop_assert!(array.iter().eq(model.iter()));
        }
    }

    #[test]
    fn growth_is_geometric(values in prop::collection::vec(any::<u16>(), 3..300), front in any::<bool>()) {
        let mut array = CircularArray::new();
        for v in values {
            if front {
                array.add_front(v);
            } else {
                array.add_end(v);
            }
            let len = array.len();
            prop_assert!(array.capacity() >= len);
            prop_assert!(len <= 2 || array.capacity() < 2 * len);
        }
    }

    #[test]
    fn stable_sort_keeps_ties_in_order(
        keys in prop::collection::vec(0u8..6, 0..150),
        split in any::<usize>(),
    ) {
        let items: Vec<Keyed> = keys.iter().enumerate().map(|(id, &key)| Keyed { key, id }).collect();
        let mut expected: Vec<(u8, usize)> = items.iter().map(|k| (k.key, k.id)).collect();
        expected.sort_by_key(|&(key, _)| key);

        let mut array = wrapped(&items, split);
        array.stable_sort();
        let got: Vec<(u8, usize)> = array.iter().map(|k| (k.key, k.id)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn radix_agrees_with_stable_sort(
        values in prop::collection::vec(0u32..100_000, 0..200),
        split in any::<usize>(),
    ) {
        let max = values.iter().cloned().max().unwrap_or(0);
        let bits = 32 - max.leading_zeros();

        let mut radix = wrapped(&values, split);
        radix.radix_sort(bits).unwrap();
        let mut merge = wrapped(&values, split);
        merge.stable_sort();
        prop_assert_eq!(radix.to_vec(), merge.to_vec());
    }

    #[test]
    fn searches_agree(
        values in prop::collection::vec(0i32..60, 0..100),
        probe in 0i32..60,
        split in any::<usize>(),
    ) {
        let array = wrapped(&values, split);
        let expected = values.iter().position(|&v| v == probe);
        prop_assert_eq!(array.linear_search(&probe), expected);

        let mut sorted = array.clone();
        sorted.stable_sort();
        let linear = sorted.linear_search(&probe);
        let binary = sorted.binary_search(&probe);
        prop_assert_eq!(linear.is_some(), binary.is_some());
        if let Some(index) = binary {
            prop_assert_eq!(sorted[index], probe);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selection_matches_sorting(
        values in prop::collection::vec(-50i32..50, 1..1000),
        split in any::<usize>(),
        k in any::<prop::sample::Index>(),
    ) {
        let mut sorted = values.clone();
        sorted.sort();
        let rank = k.index(values.len()) + 1;

        let mut array = wrapped(&values, split);
        prop_assert_eq!(array.quick_select(rank), Ok(sorted[rank - 1]));
        let mut array = wrapped(&values, split);
        prop_assert_eq!(array.worst_case_select(rank), Ok(sorted[rank - 1]));
    }
}

/// Compares on `key` alone; `id` records the original position.
#[derive(Clone, Debug)]
struct Keyed {
    key: u8,
    id: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}
