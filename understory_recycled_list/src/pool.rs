// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stack of released rows waiting to be reused.

use smallvec::SmallVec;

/// Reusable rows that are currently not bound to any item.
///
/// Rows are handed out last-in, first-out. The pool never destroys a row; once
/// allocated, a row alternates between being bound and being pooled for the
/// lifetime of the list.
#[derive(Debug, Clone)]
pub struct RowPool<R> {
    free: SmallVec<[R; 8]>,
    allocated: usize,
}

impl<R> RowPool<R> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            free: SmallVec::new(),
            allocated: 0,
        }
    }

    /// Pops a pooled row, or allocates one with `create` if the pool is empty.
    pub fn acquire(&mut self, create: impl FnOnce() -> R) -> R {
        match self.free.pop() {
            Some(row) => row,
            None => {
                self.allocated += 1;
                create()
            }
        }
    }

    /// Returns a row to the pool.
    pub fn release(&mut self, row: R) {
        self.free.push(row);
    }

    /// Number of rows waiting in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if the next [`RowPool::acquire`] will allocate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Total number of rows ever allocated through this pool.
    #[must_use]
    pub const fn allocated(&self) -> usize {
        self.allocated
    }
}

impl<R> Default for RowPool<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RowPool;

    #[test]
    fn acquire_allocates_only_when_empty() {
        let mut pool = RowPool::new();
        let mut next = 0_u32;
        let mut make = || {
            next += 1;
            next
        };

        let a = pool.acquire(&mut make);
        let b = pool.acquire(&mut make);
        assert_eq!((a, b), (1, 2));
        assert_eq!(pool.allocated(), 2);
        assert!(pool.is_empty());

        pool.release(a);
        pool.release(b);
        assert_eq!(pool.len(), 2);

        // Last released comes back first, and nothing new is allocated.
        assert_eq!(pool.acquire(&mut make), 2);
        assert_eq!(pool.acquire(&mut make), 1);
        assert_eq!(pool.allocated(), 2);
        assert_eq!(pool.acquire(&mut make), 3);
        assert_eq!(pool.allocated(), 3);
    }
}
