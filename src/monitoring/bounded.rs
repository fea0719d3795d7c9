//! Bounded collection utilities

use std::collections::VecDeque;

/// Helper trait for bounded VecDeque operations
pub(crate) trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Push a value while maintaining a maximum size (O(1) amortized)
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        while self.len() >= max_size.max(1) {
            self.pop_front();
        }
        self.push_back(value);
    }
}
