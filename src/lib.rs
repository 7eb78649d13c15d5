//! `LockVec`: a growable vector with built-in reader/writer synchronization.
//!
//! `LockVec<T>` stores its elements in one contiguous, geometrically-grown
//! buffer and guards every operation with an internal reader/writer lock,
//! so multiple threads can observe and mutate a shared instance without
//! any external locking. All methods take `&self`; read-only calls run
//! concurrently under the shared lock, mutators serialize under the
//! exclusive lock.
//!
//! ```
//! use lockvec::LockVec;
//!
//! let v: LockVec<i32> = LockVec::new();
//! for i in 0..5 {
//!     v.push(i);
//! }
//!
//! assert_eq!(v.len(), 5);
//! assert_eq!(v.capacity(), 8); // capacity doubles: 0, 1, 2, 4, 8
//! assert_eq!(*v.get(3).unwrap(), 3);
//! assert_eq!(v.to_vec(), [0, 1, 2, 3, 4]);
//! ```
//!
//! # Locking discipline
//!
//! | Operation class | Lock mode |
//! |---|---|
//! | `len`, `capacity`, `is_empty`, `get`, `front`, `back`, `end`, `iter`, `to_vec`, `read_safely` | shared |
//! | `push`, `pop`, `insert`, `insert_many`, `erase`, `erase_range`, `clear`, `replace`, `get_mut`, `execute_safely` | exclusive |
//!
//! Each public call acquires the lock exactly once; the mutators work on an
//! unsynchronized core inside the held guard and never call back into the
//! locking layer, so no call path re-enters the lock it holds.
//!
//! A sequence of individually locked calls is *not* atomic across calls.
//! Composite operations that must see or transform one consistent state
//! belong in [`execute_safely`](LockVec::execute_safely) (exclusive) or
//! [`read_safely`](LockVec::read_safely) (shared), which run a caller
//! closure over the live range inside a single critical section:
//!
//! ```
//! use lockvec::LockVec;
//!
//! let v = LockVec::from(vec![3, 1, 2]);
//! // Sort and read the result as one atomic unit.
//! let max = v.execute_safely(|live| {
//!     live.sort_unstable();
//!     live.last().copied()
//! });
//! assert_eq!(max, Some(3));
//! ```
//!
//! # Cursors
//!
//! Positional operations use [`Cursor`], a plain position with cursor
//! arithmetic (`v.begin() + 2`, `cursor += 1`, distances, comparisons).
//! Cursors own nothing and hold no lock; any structural mutation of the
//! vector invalidates all cursors obtained from it, including cursors held
//! by other threads. A stale cursor fails with
//! [`IndexOutOfBounds`](LockVecError::IndexOutOfBounds) or addresses the
//! wrong element; it can never dangle.
//!
//! ```
//! use lockvec::LockVec;
//!
//! let v = LockVec::filled(5, 42);
//! v.erase_range(v.begin() + 1, v.begin() + 3).unwrap();
//! assert_eq!(v.to_vec(), [42, 42, 42]);
//! ```
//!
//! # Checked and asserting accessors
//!
//! [`get`](LockVec::get) and the cursor-taking mutators are checked: they
//! return [`LockVecError`] values. [`front`](LockVec::front),
//! [`back`](LockVec::back), and [`pop`](LockVec::pop) instead document the
//! precondition `len() > 0` and panic when it is violated. The tiers are
//! separate contracts and are not unified.
//!
//! # Guard lifetimes
//!
//! Element references ([`get`](LockVec::get), [`front`](LockVec::front),
//! [`back`](LockVec::back)) and [`iter`](LockVec::iter) hold the lock
//! while alive, which is what keeps them valid under concurrency. Keep
//! them short-lived: a thread that holds one and calls a mutator on the
//! same vector deadlocks itself.

mod core;
mod cursor;
mod error;
mod iter;
mod raw;

pub use crate::core::{ElemRef, ElemRefMut, LockVec};
pub use crate::cursor::Cursor;
pub use crate::error::LockVecError;
pub use crate::iter::Iter;
