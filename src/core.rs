use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cursor::Cursor;
use crate::error::LockVecError;
use crate::iter::Iter;
use crate::raw::RawVec;

/// A growable vector whose shared state is guarded by an internal
/// reader/writer lock.
///
/// Every method takes `&self`: read-only operations acquire the lock in
/// shared mode and may proceed concurrently, mutators acquire it in
/// exclusive mode and serialize against everything else. Each public call
/// acquires the lock exactly once and delegates to an unsynchronized core,
/// so no operation ever re-enters the lock it already holds.
///
/// Storage is a single contiguous buffer with geometric growth: capacity
/// moves 0, 1, 2, 4, 8, ... and each growth step relocates the live
/// elements in index order, giving amortized O(1) appends.
///
/// # Accessor tiers
///
/// Checked accessors ([`get`](LockVec::get), and the mutators taking
/// cursors) report [`LockVecError`] values the caller can recover from.
/// The asserting tier ([`front`](LockVec::front), [`back`](LockVec::back),
/// [`pop`](LockVec::pop)) has the documented precondition that the vector
/// is nonempty and panics when it is violated. The two tiers are
/// deliberately separate contracts.
///
/// # Guards and deadlock
///
/// [`ElemRef`], [`ElemRefMut`], and [`Iter`] hold the lock for as long as
/// they are alive. Keep them short-lived: a thread that parks one and then
/// calls a mutator on the same vector deadlocks itself, and a long-lived
/// read guard starves writers.
///
/// A panic inside a traversal callback (or a panicking `Clone`) does not
/// poison the vector for later callers; it leaves the contents valid but
/// unspecified.
///
/// # Examples
///
/// ```
/// use lockvec::LockVec;
///
/// let v: LockVec<i32> = LockVec::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
///
/// assert_eq!(v.len(), 3);
/// assert_eq!(*v.get(1).unwrap(), 2);
///
/// let total = v.read_safely(|live| live.iter().sum::<i32>());
/// assert_eq!(total, 6);
/// ```
///
/// Shared across threads, the vector needs no external locking:
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use lockvec::LockVec;
///
/// let v = Arc::new(LockVec::new());
/// let writer = {
///     let v = Arc::clone(&v);
///     thread::spawn(move || {
///         for i in 0..100 {
///             v.push(i);
///         }
///     })
/// };
/// // Any sum observed here covers a consistent snapshot of the pushes.
/// let _partial = v.read_safely(|live| live.iter().sum::<i32>());
/// writer.join().unwrap();
/// assert_eq!(v.len(), 100);
/// ```
pub struct LockVec<T> {
    inner: RwLock<RawVec<T>>,
}

impl<T> LockVec<T> {
    /// Creates an empty vector with zero capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(RawVec::new())
    }

    fn from_raw(raw: RawVec<T>) -> Self {
        Self {
            inner: RwLock::new(raw),
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, RawVec<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, RawVec<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.read_guard().capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Cursor at position 0. Always the same value; locks nothing.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Cursor one past the last element at the moment of the call.
    ///
    /// Like every cursor, the result is invalidated by the next structural
    /// mutation, including one performed by another thread between this
    /// call and the cursor's use.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.read_guard().len())
    }

    /// Shared-lock-backed reference to the element at `index`.
    ///
    /// The read lock is held until the returned [`ElemRef`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<ElemRef<'_, T>, LockVecError> {
        let guard = self.read_guard();
        guard.check_bounds(index)?;
        Ok(ElemRef { guard, index })
    }

    /// Exclusive-lock-backed mutable reference to the element at `index`.
    ///
    /// The write lock is held until the returned [`ElemRefMut`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn get_mut(&self, index: usize) -> Result<ElemRefMut<'_, T>, LockVecError> {
        let guard = self.write_guard();
        guard.check_bounds(index)?;
        Ok(ElemRefMut { guard, index })
    }

    /// Reference to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Callers verify `len() > 0`; use
    /// [`get`](LockVec::get) for a checked access.
    #[must_use]
    pub fn front(&self) -> ElemRef<'_, T> {
        let guard = self.read_guard();
        assert!(!guard.is_empty(), "Cannot read front of empty vector");
        ElemRef { guard, index: 0 }
    }

    /// Reference to the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Callers verify `len() > 0`; use
    /// [`get`](LockVec::get) for a checked access.
    #[must_use]
    pub fn back(&self) -> ElemRef<'_, T> {
        let guard = self.read_guard();
        assert!(!guard.is_empty(), "Cannot read back of empty vector");
        let index = guard.len() - 1;
        ElemRef { guard, index }
    }

    /// Runs `f` over the live range under the exclusive lock, as a single
    /// atomic unit with respect to other threads.
    ///
    /// Individually locked calls are not atomic across calls: reading
    /// `len()` and then indexing races with a concurrent writer. Composite
    /// read-modify sequences belong here, where the whole callback runs in
    /// one critical section over a view of the current buffer.
    ///
    /// ```
    /// use lockvec::LockVec;
    ///
    /// let v = LockVec::from(vec![1, 2, 3]);
    /// let doubled = v.execute_safely(|live| {
    ///     for elem in live.iter_mut() {
    ///         *elem *= 2;
    ///     }
    ///     live.len()
    /// });
    /// assert_eq!(doubled, 3);
    /// assert_eq!(v.to_vec(), [2, 4, 6]);
    /// ```
    pub fn execute_safely<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        f(self.write_guard().live_mut())
    }

    /// Runs `f` over the live range under the shared lock: one consistent
    /// snapshot for composite reads, concurrent with other readers.
    pub fn read_safely<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.read_guard().live())
    }

    /// Snapshot iterator yielding clones of the live elements.
    ///
    /// The iterator holds the read lock until dropped; writers block for
    /// its whole lifetime.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.read_guard())
    }

    /// Releases the buffer, leaving `len() == 0` and `capacity() == 0`.
    /// Idempotent.
    pub fn clear(&self) {
        self.write_guard().clear();
    }

    /// Replaces the contents with `contents`, releasing the prior buffer.
    pub fn replace_with(&self, contents: Vec<T>) {
        *self.write_guard() = RawVec::from(contents);
    }
}

impl<T: Default> LockVec<T> {
    /// A vector of `count` default-constructed elements, with
    /// `capacity() == len() == count`.
    #[must_use]
    pub fn with_default(count: usize) -> Self {
        Self::from_raw(RawVec::with_default(count))
    }

    /// Appends `value`, growing the buffer first if it is full.
    /// Amortized O(1), O(len) on a growth step.
    pub fn push(&self, value: T) {
        self.write_guard().push(value);
    }

    /// Removes the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Callers verify `len() > 0`.
    pub fn pop(&self) {
        self.write_guard().pop();
    }

    /// Inserts `value` at `pos`, shifting the tail right one slot, and
    /// returns a cursor to the inserted element. `end()` appends.
    ///
    /// All outstanding cursors other than the returned one are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::IndexOutOfBounds` if `pos` is past `end()`.
    pub fn insert(&self, pos: Cursor, value: T) -> Result<Cursor, LockVecError> {
        self.write_guard().insert(pos.index(), value)?;
        Ok(pos)
    }

    /// Removes the element at `pos`, shifting the tail left, and returns a
    /// cursor to the position following the erased element (now occupied by
    /// the element that moved in, or `end()`).
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::IndexOutOfBounds` if `pos` is at or past
    /// `end()`.
    pub fn erase(&self, pos: Cursor) -> Result<Cursor, LockVecError> {
        self.write_guard().erase(pos.index())?;
        Ok(pos)
    }

    /// Removes the half-open range `[first, last)` and returns a cursor to
    /// the position following it. An empty range is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::InvalidRange` if the range is inverted or
    /// extends past `end()`.
    pub fn erase_range(&self, first: Cursor, last: Cursor) -> Result<Cursor, LockVecError> {
        self.write_guard()
            .erase_range(first.index(), last.index())?;
        Ok(first)
    }
}

impl<T: Default + Clone> LockVec<T> {
    /// Inserts `count` clones of `value` starting at `pos` and returns a
    /// cursor to the first inserted element.
    ///
    /// # Errors
    ///
    /// Returns `LockVecError::IndexOutOfBounds` if `pos` is past `end()`.
    pub fn insert_many(
        &self,
        pos: Cursor,
        count: usize,
        value: T,
    ) -> Result<Cursor, LockVecError> {
        self.write_guard().insert_many(pos.index(), count, value)?;
        Ok(pos)
    }
}

impl<T: Clone> LockVec<T> {
    /// A vector of `count` clones of `value`, with
    /// `capacity() == len() == count`.
    #[must_use]
    pub fn filled(count: usize, value: T) -> Self {
        Self::from_raw(RawVec::filled(count, value))
    }

    /// Clones the live range into a plain `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.read_guard().live().to_vec()
    }

    /// Replaces the contents with a deep copy of `other`'s, releasing the
    /// prior buffer. The source is read and the destination written in two
    /// separate critical sections, never nested.
    pub fn replace(&self, other: &LockVec<T>) {
        let copied = other.read_guard().clone();
        *self.write_guard() = copied;
    }
}

impl<T: Clone> Clone for LockVec<T> {
    /// Deep copy: independent buffer, capacity mirroring the source.
    fn clone(&self) -> Self {
        Self::from_raw(self.read_guard().clone())
    }
}

impl<T> Default for LockVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LockVec<T> {
    fn from(contents: Vec<T>) -> Self {
        Self::from_raw(RawVec::from(contents))
    }
}

impl<T> FromIterator<T> for LockVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for LockVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.read_guard().live()).finish()
    }
}

/// A shared-lock-backed reference to a single element of a [`LockVec`].
///
/// The read lock is held while the `ElemRef` is alive, so the referent
/// cannot be moved or dropped underneath it. Keep it short-lived: dropping
/// it releases the lock, and a thread that holds one cannot call a mutator
/// on the same vector without deadlocking.
pub struct ElemRef<'a, T> {
    guard: RwLockReadGuard<'a, RawVec<T>>,
    index: usize,
}

impl<T> Deref for ElemRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard.live()[self.index]
    }
}

impl<T: fmt::Debug> fmt::Debug for ElemRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(self, f)
    }
}

impl<T: fmt::Display> fmt::Display for ElemRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(self, f)
    }
}

/// An exclusive-lock-backed mutable reference to a single element of a
/// [`LockVec`].
///
/// The write lock is held while the `ElemRefMut` is alive; all other
/// readers and writers block until it is dropped.
pub struct ElemRefMut<'a, T> {
    guard: RwLockWriteGuard<'a, RawVec<T>>,
    index: usize,
}

impl<T> Deref for ElemRefMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard.live()[self.index]
    }
}

impl<T> DerefMut for ElemRefMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard.live_mut()[self.index]
    }
}

impl<T: fmt::Debug> fmt::Debug for ElemRefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(self, f)
    }
}
