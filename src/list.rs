use std::cell::Cell;
use std::fmt;
use std::iter;
use std::ptr;

use crate::cursor::{advanced, count_steps, ForwardCursor};
use crate::rotate::rotate_forward;

struct Node<T> {
    value: Cell<T>,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list, the canonical sequence that can only be walked
/// forward.
pub struct ForwardList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            value: Cell::new(value),
            next,
        }));
        self.len += 1;
    }

    /// Returns the `(begin, end)` cursors of the list.
    pub fn bounds(&mut self) -> (ListCursor<'_, T>, ListCursor<'_, T>) {
        let begin = ListCursor {
            node: self.head.as_deref(),
        };

        (begin, ListCursor { node: None })
    }

    /// Rotates the list so that the element at `mid` becomes the first one.
    ///
    /// Returns the index the original first element ended up at.
    pub fn rotate(&mut self, mid: usize) -> usize {
        assert!(mid <= self.len, "rotation point {mid} out of bounds");

        let (first, last) = self.bounds();
        let middle = advanced(first, mid);

        let rotated = rotate_forward(first, middle, last);
        count_steps(first, &rotated)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.nodes().map(|node| node.value.get()).collect()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut next = self.head.take();
        while let Some(node) = next {
            let Node { value, next: rest } = *node;
            values.push(value.into_inner());
            next = rest;
        }
        values
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        iter::successors(self.head.as_deref(), |n| n.next.as_deref())
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinks iteratively; the derived drop would recurse once per node.
impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;

        for value in values {
            let node = tail.insert(Box::new(Node {
                value: Cell::new(value),
                next: None,
            }));
            tail = &mut node.next;
            list.len += 1;
        }

        list
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|node| node.value.get()))
            .finish()
    }
}

/// Cursor into a [`ForwardList`]. `None` is the past-the-end position.
pub struct ListCursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> ListCursor<'a, T> {
    fn node(&self) -> &'a Node<T> {
        match self.node {
            Some(node) => node,
            None => panic!("dereferenced a past-the-end list cursor"),
        }
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListCursor<'_, T> {}

impl<T> PartialEq for ListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for ListCursor<'_, T> {}

impl<T> fmt::Debug for ListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "ListCursor({:p})", node),
            None => write!(f, "ListCursor(end)"),
        }
    }
}

impl<T> ForwardCursor for ListCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) {
        self.node = self.node().next.as_deref();
    }

    fn swap_with(&self, other: &Self) {
        self.node().value.swap(&other.node().value);
    }

    fn replace(&self, value: T) -> T {
        self.node().value.replace(value)
    }

    fn get(&self) -> T
    where
        T: Copy,
    {
        self.node().value.get()
    }
}
