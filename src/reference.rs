/// Rotates `s` left by `mid` with the standard library and returns the index
/// the original first element moved to.
///
/// Empty blocks follow the same conventions as
/// [`rotate_forward`](crate::rotate::rotate_forward): `mid == 0` returns
/// `s.len()` and `mid == s.len()` returns `0`.
pub fn rotate_reference<T>(s: &mut [T], mid: usize) -> usize {
    let len = s.len();
    if mid == 0 {
        return len;
    }
    if mid == len {
        return 0;
    }

    s.rotate_left(mid);

    len - mid
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::rotate::rotate_slice;

    #[test_case(&[1, 2, 3], 0 => (vec![1, 2, 3], 3) ; "No rotation")]
    #[test_case(&[1, 2, 3], 1 => (vec![2, 3, 1], 2) ; "Rotate left once")]
    #[test_case(&[1, 2, 3], 2 => (vec![3, 1, 2], 1) ; "Rotate left twice")]
    #[test_case(&[1, 2, 3], 3 => (vec![1, 2, 3], 0) ; "Full rotation")]
    fn reference(s: &[u8], mid: usize) -> (Vec<u8>, usize) {
        let mut s = s.to_vec();

        let position = rotate_reference(&mut s, mid);

        (s, position)
    }

    #[test]
    fn matches_forward_rotation_on_every_split() {
        let original: Vec<u16> = (0..37).collect();

        for mid in 0..=original.len() {
            let mut expected = original.clone();
            let mut actual = original.clone();

            let expected_position = rotate_reference(&mut expected, mid);
            let actual_position = rotate_slice(&mut actual, mid);

            similar_asserts::assert_eq!(expected, actual);
            assert_eq!(expected_position, actual_position, "mid {mid}");
        }
    }
}
