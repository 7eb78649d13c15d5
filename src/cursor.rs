use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A positional reference into a [`LockVec`](crate::LockVec).
///
/// A `Cursor` is a plain element position, not a pointer: it holds no lock
/// and no reference to the buffer. Dereferencing goes through the container
/// (`vec.get(cursor.index())`) or through the slice handed to a traversal
/// callback.
///
/// # Invalidation
///
/// A cursor is valid until the next structural mutation (growth, insert,
/// erase, clear, contents replacement) of the vector it was obtained from,
/// including mutations performed by other threads. Using a stale cursor is
/// a contract violation; because the cursor is an index, the failure mode
/// is an [`IndexOutOfBounds`](crate::LockVecError::IndexOutOfBounds) error
/// or an access to whichever element now occupies the position, never a
/// dangling reference.
///
/// Arithmetic is defined purely on the position. Offsetting below zero
/// panics; an offset past the current length is representable and only
/// rejected when the cursor is presented to a container operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(pos: usize) -> Self {
        Self { pos }
    }

    /// The element position this cursor addresses.
    #[must_use]
    pub fn index(self) -> usize {
        self.pos
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;

    /// # Panics
    ///
    /// Panics if the offset would move the position below zero.
    #[allow(clippy::expect_used)]
    fn add(self, offset: isize) -> Cursor {
        Cursor::new(
            self.pos
                .checked_add_signed(offset)
                .expect("Cursor offset out of range"),
        )
    }
}

impl AddAssign<isize> for Cursor {
    fn add_assign(&mut self, offset: isize) {
        *self = *self + offset;
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;

    /// # Panics
    ///
    /// Panics if the offset would move the position below zero.
    fn sub(self, offset: isize) -> Cursor {
        self + (-offset)
    }
}

impl SubAssign<isize> for Cursor {
    fn sub_assign(&mut self, offset: isize) {
        *self = *self - offset;
    }
}

/// Distance between two cursors, in elements.
impl Sub for Cursor {
    type Output = isize;

    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Cursor) -> isize {
        self.pos as isize - rhs.pos as isize
    }
}

/// Symmetric offset addition, so `2 + cursor` works like `cursor + 2`.
impl Add<Cursor> for isize {
    type Output = Cursor;

    fn add(self, cursor: Cursor) -> Cursor {
        cursor + self
    }
}
