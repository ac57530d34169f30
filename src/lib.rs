//! Dynlist - untyped, growable lists with aliasing views
//!
//! # Overview
//!
//! An [`ArrayList`] holds any mix of [`Element`]s, nulls and other lists
//! included. Views wrap a list without copying it:
//!
//! - [`read_only`]: every mutation fails
//! - [`fixed_size`]: only `set` is allowed
//! - [`range`]: a contiguous window, invalidated by outside structural changes
//! - [`synchronized`]: every call runs under the root list's lock
//! - [`adapt`]: any [`ListLike`] value seen through the [`List`] contract
//!
//! # Quick Start
//!
//! ```
//! use dynlist::{ArrayList, Buffer, Element, Error, List};
//!
//! let list = ArrayList::from_elements([Element::from("a"), Element::Null, Element::from(3)]);
//! let window = list.get_range(1, 2).unwrap();
//!
//! let mut target = Buffer::new(4);
//! window.copy_to(Some(&mut target), 2).unwrap();
//! assert_eq!(target.get(3), Some(&Element::from(3)));
//!
//! // Validation runs before anything is written.
//! assert_eq!(
//!     list.copy_to(Some(&mut target), 2),
//!     Err(Error::InsufficientSpace { needed: 3, available: 2 })
//! );
//! ```
//!
//! # Copy Protocol
//!
//! `copy_to` and `copy_range_to` check their arguments in a fixed order and
//! report the first failure. Every list kind, views included, follows the
//! same order, so callers can match on [`Error`] without knowing which handle
//! they hold.
//!
//! ```
//! use dynlist::{ArrayList, Buffer, Element, Error, List, synchronized};
//!
//! let list: ArrayList = (0..5).map(Element::Int).collect();
//! let shared = synchronized(list.into_dyn());
//!
//! let mut grid = Buffer::with_shape(&[5, 5]);
//! assert_eq!(
//!     shared.copy_range_to(0, Some(&mut grid), 0, -1),
//!     Err(Error::IndexOutOfRange { param: "count", value: -1 })
//! );
//! assert_eq!(
//!     shared.copy_range_to(0, Some(&mut grid), 0, 5),
//!     Err(Error::RankMismatch { rank: 2 })
//! );
//! ```

// Re-export public API from dynlist_core
pub use dynlist_core::{
    ArrayList, Buffer, CopyPlan, DEFAULT_CAPACITY, DynList, Element, ElementKind, Error, List,
    ListId, Result,
};

// View factories and types
pub use dynlist_core::views::{
    self, Adapter, FixedSize, ListLike, RangeView, ReadOnly, SyncRoot, Synchronized,
};
pub use dynlist_core::{adapt, fixed_size, range, read_only, synchronized};
