use std::fmt;

use itertools::Itertools;

use crate::errors::{ListError, ListResult};

#[derive(Debug, Clone)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Box<ListNode<T>>>,
}

/// Owned singly linked list.
///
/// Each `next` slot uniquely owns the rest of the list. Positions are plain
/// zero-based indices; there are no node handles to keep alive.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds the value at the front of the list.
    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(ListNode {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Adds the value at the end of the list. O(n), there is no tail pointer.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    /// Removes and returns the front value.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Value at the given zero-based index.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor?.next.as_deref();
        }
        cursor.map(|node| &node.value)
    }

    /// Splices a new value in directly after the node at `index`.
    ///
    /// Errors with [`ListError::IndexOutOfBounds`] when no node exists at
    /// that index.
    pub fn insert_after(&mut self, index: usize, value: T) -> ListResult<()> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref_mut());
        }
        let node = cursor.ok_or(ListError::IndexOutOfBounds(index))?;
        let next = node.next.take();
        node.next = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }
}

// Iterative teardown: the default recursive Box drop would recurse once per
// node and can exhaust the call stack on long lists.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    cursor: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty list");
        }
        write!(f, "{}", self.iter().join(" -> "))
    }
}
