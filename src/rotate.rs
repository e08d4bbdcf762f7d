//! In-place rotation over forward-only cursors.
//!
//! Rotating `[f, m)` `[m, l)` yields `[m, l)` `[f, m)` with each block's
//! internal order preserved. Block lengths are never computed: a single
//! sweep swaps the unresolved prefix into the positions right after it, and
//! the `f == m` check notices when a block has been consumed. Repeating the
//! sweep plays the role of the remainder rounds of a Euclidean block-swap
//! rotation.
//!
//! A full rotation of `n` elements split at `k` performs exactly
//! `n - gcd(n, k)` swaps and keeps a constant number of cursors.

use crate::cursor::{self, count_steps, ForwardCursor};

/// One bounded sweep of swaps.
///
/// A trailing cursor starts at `m` and runs to `l`, swapping with `f` at every
/// step. Whenever `f` catches up with `m` the boundary moves to the trailing
/// cursor. On return `[f_original, f)` is in its final position.
///
/// Requires `f` strictly before `m` strictly before `l`.
pub fn rotate_forward_step<C: ForwardCursor>(f: &mut C, m: &mut C, l: &C) {
    let mut c = m.clone();
    loop {
        f.swap_with(&c);
        f.advance();
        c.advance();

        if *f == *m {
            *m = c.clone();
        }

        if c == *l {
            break;
        }
    }
}

/// Rotates `[f, l)` around `m` and returns the new position of the element
/// originally at `f`.
///
/// Requires `f` strictly before `m` strictly before `l`.
pub fn rotate_forward_nontrivial<C: ForwardCursor>(
    mut f: C,
    mut m: C,
    l: C,
) -> C {
    rotate_forward_step(&mut f, &mut m, &l);
    let rotated_first = f.clone();

    while m != l {
        rotate_forward_step(&mut f, &mut m, &l);
    }

    rotated_first
}

/// Like [`rotate_forward_nontrivial`] but also accepts empty blocks.
///
/// An empty first block returns `l`, an empty second block returns `f`, and
/// neither touches the sequence.
pub fn rotate_forward<C: ForwardCursor>(f: C, m: C, l: C) -> C {
    if f == m {
        return l;
    }
    if m == l {
        return f;
    }

    rotate_forward_nontrivial(f, m, l)
}

/// Rotates `s` so that `s[mid]` becomes the first element, using only
/// forward cursors.
///
/// Returns the index the original `s[0]` moved to, following the
/// conventions of [`rotate_forward`] for empty blocks.
pub fn rotate_slice<T>(s: &mut [T], mid: usize) -> usize {
    assert!(mid <= s.len(), "rotation point {mid} out of bounds");

    let (first, last) = cursor::bounds(s);
    let middle = cursor::advanced(first, mid);

    let rotated = rotate_forward(first, middle, last);
    count_steps(first, &rotated)
}
