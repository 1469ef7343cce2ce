//! LIFO stack backed by [`LinkedList`].

use crate::error::ListError;
use crate::list::LinkedList;

/// A stack storing its elements in a singly linked list; the top of the
/// stack is the front of the list, so every operation is O(1).
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Push an element onto the top.
    pub fn push(&mut self, element: T) {
        self.items.push_front(element);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, ListError> {
        self.items.pop_front().ok_or(ListError::EmptyStack)
    }

    /// The top element without removing it.
    pub fn top(&self) -> Result<&T, ListError> {
        self.items.front().ok_or(ListError::EmptyStack)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn top_does_not_remove() {
        let mut stack = Stack::new();
        stack.push("a");
        assert_eq!(stack.top(), Ok(&"a"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn empty_stack_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(ListError::EmptyStack));
        assert_eq!(stack.top(), Err(ListError::EmptyStack));

        // Errors do not poison the stack.
        stack.push(5);
        assert_eq!(stack.pop(), Ok(5));
    }
}
