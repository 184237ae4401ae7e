use cdarray::script::Script;
use cdarray::{CircularArray, Error};
use pretty_assertions::assert_eq;

#[test]
fn add_at_both_ends_then_delete_from_front() {
    let mut array = CircularArray::new();
    array.add_end(1);
    array.add_end(2);
    array.add_end(3);
    array.add_front(0);
    assert_eq!(array.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(array.len(), 4);

    array.del_front().unwrap();
    array.del_front().unwrap();
    assert_eq!(array.to_vec(), vec![2, 3]);
}

#[test]
fn shrink_from_eight_slots() {
    let mut array: CircularArray<i32> = (0..5).collect();
    array.add_front(-1);
    assert_eq!(array.capacity(), 8);
    while array.len() > 1 {
        array.del_front().unwrap();
    }
    assert_eq!(array.to_vec(), vec![4]);
    assert!(array.capacity() <= 4);
    assert!(array.capacity() >= array.len());
}

#[test]
fn select_third_smallest() {
    let values = vec![5, 3, 8, 1, 9, 2];
    let mut quick: CircularArray<i32> = values.iter().cloned().collect();
    let mut linear: CircularArray<i32> = values.iter().cloned().collect();
    assert_eq!(quick.quick_select(3), Ok(3));
    assert_eq!(linear.worst_case_select(3), Ok(3));
}

#[test]
fn stable_sort_with_duplicates() {
    let mut array: CircularArray<i32> = vec![4, 2, 2, 5, 1].into_iter().collect();
    array.stable_sort();
    assert_eq!(array.to_vec(), vec![1, 2, 2, 4, 5]);
}

#[test]
fn presized_array_rejects_out_of_range_writes() {
    let mut array: CircularArray<i32> = CircularArray::with_len(10);
    assert_eq!((array.len(), array.capacity()), (10, 10));
    for i in 0..array.len() {
        array[i] = i as i32 * 4;
    }
    assert_eq!(array.at_mut(11).map(|x| *x), Err(Error::IndexOutOfRange { index: 11, len: 10 }));
    assert_eq!(array.to_vec(), vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36]);
}

#[test]
fn copies_are_independent() {
    let mut original: CircularArray<String> = CircularArray::new();
    original.add_end("b".to_owned());
    original.add_front("a".to_owned());
    let mut copy = original.clone();
    copy.add_end("c".to_owned());
    copy[0].push('!');

    assert_eq!(original.to_vec(), vec!["a", "b"]);
    assert_eq!(copy.to_vec(), vec!["a!", "b", "c"]);

    original.clone_from(&copy);
    assert_eq!(original, copy);
}

#[test]
fn clear_then_reuse() {
    let mut array: CircularArray<u8> = (0..50).collect();
    array.clear();
    assert_eq!((array.len(), array.capacity()), (0, 2));
    assert_eq!(array.del_end(), Err(Error::EmptyContainer));
    array.add_front(9);
    assert_eq!(array.to_vec(), vec![9]);
}

#[test]
fn scripted_session() {
    let text = "\
12
10 20 30 5 15 2 3 0 0 5 20 0
1 1 1 0 1 4 5 6 8 7 9 10
";
    let script: Script = text.parse().unwrap();
    assert_eq!(script.len(), 12);

    let mut array = CircularArray::new();
    let mut out = Vec::new();
    script.run(&mut array, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\
QuickSelect result is 10
WCSelect result is 15
linearSearch result is -1
binSearch result is 3
size is : 5
capacity is : 8
5 10 15 20 30 \n\n");
}
