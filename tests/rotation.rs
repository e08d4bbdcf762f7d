use rand::{thread_rng, Rng};
use rotate_forward::cursor::{self, count_steps};
use rotate_forward::reference::rotate_reference;
use rotate_forward::{
    rotate_forward_nontrivial, rotate_slice, ForwardCursor, ForwardList,
};
use test_case::test_case;

mod common;

#[test_case(10, 4 => (vec![4, 5, 6, 7, 8, 9, 0, 1, 2, 3], 6) ; "ten split at four")]
#[test_case(3, 1 => (vec![1, 2, 0], 2) ; "three split at one")]
#[test_case(3, 2 => (vec![2, 0, 1], 1) ; "three split at two")]
fn concrete_scenarios(len: usize, k: usize) -> (Vec<u64>, usize) {
    let mut data = common::iota(len);

    let position = rotate_slice(&mut data, k);

    assert_eq!(data[position], 0);
    (data, position)
}

#[test]
fn slice_and_list_agree_with_reference() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let (original, split) = common::random_case(&mut rng, 500);

        let mut expected = original.clone();
        let expected_position = rotate_reference(&mut expected, split);

        let mut slice = original.clone();
        let slice_position = rotate_slice(&mut slice, split);

        let mut list: ForwardList<u64> = original.into_iter().collect();
        let list_position = list.rotate(split);

        similar_asserts::assert_eq!(expected, slice);
        similar_asserts::assert_eq!(expected, list.to_vec());
        assert_eq!(expected_position, slice_position);
        assert_eq!(expected_position, list_position);
    }
}

#[test]
fn list_cursor_returned_points_at_original_first() {
    let mut list: ForwardList<u64> = common::iota(1_000).into_iter().collect();

    let (first, last) = list.bounds();
    let middle = cursor::advanced(first, 321);
    let rotated = rotate_forward_nontrivial(first, middle, last);

    assert_eq!(rotated.get(), 0);
    assert_eq!(count_steps(first, &rotated), 1_000 - 321);
    assert_eq!(first.get(), 321);
}

#[test]
fn rotation_by_complement_restores() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let (original, split) = common::random_case(&mut rng, 300);
        let mut data = original.clone();

        let position = rotate_slice(&mut data, split);
        assert_eq!(position, data.len() - split);

        rotate_slice(&mut data, position);
        assert_eq!(data, original);
    }
}

#[test]
fn large_list_rotates_at_the_edges() {
    let len = 100_000;

    for split in [1, len - 1] {
        let mut list: ForwardList<u64> =
            common::iota(len).into_iter().collect();

        assert_eq!(list.rotate(split), len - split);

        let rotated = list.into_vec();
        assert_eq!(rotated[0], split as u64);
        assert_eq!(rotated[len - split], 0);
        assert!(common::is_counting(&rotated[..len - split]));
        assert!(common::is_counting(&rotated[len - split..]));
    }
}

#[test]
fn random_split_of_strings() {
    let mut rng = thread_rng();
    let words: Vec<String> = (0..50).map(|i| format!("word-{i}")).collect();
    let split = rng.gen_range(1..words.len());

    let mut expected = words.clone();
    expected.rotate_left(split);

    let mut actual = words;
    rotate_slice(&mut actual, split);

    assert_eq!(actual, expected);
}
