use std::cell::Cell;
use std::fmt;
use std::ptr;

/// A position into a mutable sequence that can only move forward.
///
/// Cursors expose dereference (read, write, swap), advance-by-one and
/// equality. There is deliberately no way to subtract two cursors, jump by
/// an offset or step backwards, so algorithms written against this trait
/// work for any singly traversable sequence.
///
/// Several cursors into the same sequence may be alive at once and all of
/// them can write, which is why implementations sit on top of [`Cell`].
pub trait ForwardCursor: Clone + PartialEq {
    type Item;

    /// Moves to the next position.
    ///
    /// Panics when called on a past-the-end cursor.
    fn advance(&mut self);

    /// Exchanges the elements under `self` and `other`.
    fn swap_with(&self, other: &Self);

    /// Writes `value` at the current position and returns the previous element.
    fn replace(&self, value: Self::Item) -> Self::Item;

    fn get(&self) -> Self::Item
    where
        Self::Item: Copy;
}

/// Returns `cursor` moved forward `n` times.
pub fn advanced<C: ForwardCursor>(mut cursor: C, n: usize) -> C {
    for _ in 0..n {
        cursor.advance();
    }
    cursor
}

/// Walks from `from` until it reaches `to`, counting the steps taken.
///
/// `to` must be reachable from `from`.
pub fn count_steps<C: ForwardCursor>(mut from: C, to: &C) -> usize {
    let mut steps = 0;
    while from != *to {
        from.advance();
        steps += 1;
    }
    steps
}

/// Cursor over a mutable slice: the suffix of the slice that starts at the
/// current position.
pub struct SliceCursor<'a, T> {
    rest: &'a [Cell<T>],
}

/// Returns the `(begin, end)` cursors of `slice`.
pub fn bounds<T>(slice: &mut [T]) -> (SliceCursor<'_, T>, SliceCursor<'_, T>) {
    let cells = Cell::from_mut(slice).as_slice_of_cells();
    let end = &cells[cells.len()..];

    (SliceCursor { rest: cells }, SliceCursor { rest: end })
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // Length disambiguates zero-sized elements, which all share an address
        self.rest.len() == other.rest.len()
            && ptr::eq(self.rest.as_ptr(), other.rest.as_ptr())
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("at", &self.rest.as_ptr())
            .field("past_the_end", &self.rest.is_empty())
            .finish()
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) {
        self.rest = &self.rest[1..];
    }

    fn swap_with(&self, other: &Self) {
        self.rest[0].swap(&other.rest[0]);
    }

    fn replace(&self, value: T) -> T {
        self.rest[0].replace(value)
    }

    fn get(&self) -> T
    where
        T: Copy,
    {
        self.rest[0].get()
    }
}
