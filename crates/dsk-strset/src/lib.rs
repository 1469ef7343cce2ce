//! dsk-strset: a fixed-capacity string hash set with separate chaining.
//!
//! The bucket count is fixed at construction and never grows; collisions go
//! into per-bucket vectors. Operations are O(1) expected as long as the
//! element count stays in the neighborhood of the capacity.

use std::hash::{DefaultHasher, Hash, Hasher};

use dsk_core::DskError;
use thiserror::Error;

/// Errors raised by [`StringSet`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrSetError {
    /// The requested bucket count was zero.
    #[error("capacity must be positive")]
    ZeroCapacity,
}

impl From<StrSetError> for DskError {
    fn from(err: StrSetError) -> Self {
        match err {
            StrSetError::ZeroCapacity => DskError::InvalidArg { what: "capacity" },
        }
    }
}

/// A hash set of strings with a fixed number of chained buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSet {
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl StringSet {
    /// Create a set with the given bucket count.
    pub fn new(capacity: usize) -> Result<Self, StrSetError> {
        if capacity == 0 {
            return Err(StrSetError::ZeroCapacity);
        }
        Ok(Self {
            buckets: vec![Vec::new(); capacity],
            len: 0,
        })
    }

    fn bucket(&self, s: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Add the string. Returns `true` if it was not already present.
    pub fn insert(&mut self, s: &str) -> bool {
        let idx = self.bucket(s);
        if self.buckets[idx].iter().any(|x| x == s) {
            return false;
        }
        self.buckets[idx].push(s.to_string());
        self.len += 1;
        true
    }

    /// Remove the string if present. Returns `true` if the set contained it.
    pub fn remove(&mut self, s: &str) -> bool {
        let idx = self.bucket(s);
        match self.buckets[idx].iter().position(|x| x == s) {
            Some(pos) => {
                self.buckets[idx].swap_remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Whether the string is in the set.
    pub fn contains(&self, s: &str) -> bool {
        self.buckets[self.bucket(s)].iter().any(|x| x == s)
    }

    /// Number of stored strings.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no strings.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
}
