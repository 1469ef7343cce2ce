//! Singly linked list.

use std::fmt;

/// A singly linked list of owned elements.
///
/// Nodes are heap-allocated `Box`es linked head to tail. Front operations
/// are O(1); `push_back`, `back` and `get` walk the chain and are O(n).
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements. O(1).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert at the front. O(1).
    pub fn push_front(&mut self, element: T) {
        self.head = Some(Box::new(Node {
            data: element,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Insert at the back. O(n): walks to the last node.
    pub fn push_back(&mut self, element: T) {
        let new_last = Some(Box::new(Node {
            data: element,
            next: None,
        }));

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = new_last;
        self.len += 1;
    }

    /// First element, or `None` if the list is empty. O(1).
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Last element, or `None` if the list is empty. O(n).
    pub fn back(&self) -> Option<&T> {
        let mut cursor = self.head.as_deref()?;
        while let Some(next) = cursor.next.as_deref() {
            cursor = next;
        }
        Some(&cursor.data)
    }

    /// Element at `index`, or `None` if out of bounds. O(index).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let mut cursor = self.head.as_deref()?;
        for _ in 0..index {
            cursor = cursor.next.as_deref()?;
        }
        Some(&cursor.data)
    }

    /// Remove and return the first element, or `None` if the list is empty.
    /// O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.data)
    }

    /// Remove all elements. O(n).
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

// The derived recursive drop would overflow the stack on long lists; unlink
// nodes one at a time instead.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Renders as `[a, b, c]`; the empty list renders as `[]`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut cursor = self.head.as_deref();
        let mut first = true;
        while let Some(node) = cursor {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}", node.data)?;
            cursor = node.next.as_deref();
        }
        write!(f, "]")
    }
}
