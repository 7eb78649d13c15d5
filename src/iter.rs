use std::sync::RwLockReadGuard;

use crate::core::LockVec;
use crate::raw::RawVec;

/// Snapshot iterator over a [`LockVec`], yielding clones of the live
/// elements in index order.
///
/// The iterator holds the shared lock for its whole lifetime, so the
/// sequence it yields is one consistent snapshot: concurrent readers
/// proceed, writers block until the iterator is dropped. A thread must not
/// call a mutator on the same vector while it holds one of these.
pub struct Iter<'a, T> {
    guard: RwLockReadGuard<'a, RawVec<T>>,
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(guard: RwLockReadGuard<'a, RawVec<T>>) -> Self {
        Self { guard, pos: 0 }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.guard.live().get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.guard.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a LockVec<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
