//! dsk-list: singly linked list and a stack built on top of it.
//!
//! Provides:
//! - [`LinkedList`]: a `Box`-based singly linked list with head and tail
//!   access
//! - [`Stack`]: a LIFO stack backed by the list's O(1) front operations

pub mod error;
pub mod list;
pub mod stack;

// Re-exports for ergonomics
pub use error::ListError;
pub use list::LinkedList;
pub use stack::Stack;
