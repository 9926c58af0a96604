use std::collections::VecDeque;
use std::fmt;

/// FIFO adapter over a double-ended growable array.
///
/// Used as traversal scratch space by the binary tree's breadth-first
/// search. Emptiness is signalled with `None`, never a panic.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Removes and returns the oldest enqueued element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_peek_returns_front() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");

        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue_signals_none() {
        let mut queue: Queue<i32> = Queue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }
}
