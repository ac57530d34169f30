//! Views: wrappers that expose the [`List`] contract over another list
//! without copying its elements.
//!
//! Each view checks its own policy and then forwards to the list it wraps.
//! Views stack freely (a range over a synchronized adapter, a read-only view
//! over a range, ...); the copy protocol behaves identically through all of
//! them.
//!
//! # Example
//!
//! ```
//! use dynlist_core::{ArrayList, Element, Error, List, views};
//!
//! let list = ArrayList::from_elements([Element::from(1), Element::from(2)]);
//! let frozen = views::read_only(list.clone().into_dyn());
//!
//! assert!(matches!(
//!     frozen.add(Element::from(3)),
//!     Err(Error::UnsupportedOperation { .. })
//! ));
//!
//! list.add(Element::from(3)).unwrap();
//! assert_eq!(frozen.count().unwrap(), 3);
//! ```

/// Forwards the non-mutating [`List`](crate::List) methods to `self.inner`.
macro_rules! forward_reads {
    () => {
        fn count(&self) -> $crate::Result<usize> {
            self.inner.count()
        }

        fn get(&self, index: usize) -> $crate::Result<$crate::Element> {
            self.inner.get(index)
        }

        fn index_of(&self, value: &$crate::Element) -> $crate::Result<Option<usize>> {
            self.inner.index_of(value)
        }

        fn copy_to(
            &self,
            target: Option<&mut $crate::Buffer>,
            target_start: isize,
        ) -> $crate::Result<()> {
            self.inner.copy_to(target, target_start)
        }

        fn copy_range_to(
            &self,
            source_index: isize,
            target: Option<&mut $crate::Buffer>,
            target_start: isize,
            count: isize,
        ) -> $crate::Result<()> {
            self.inner
                .copy_range_to(source_index, target, target_start, count)
        }

        fn is_synchronized(&self) -> bool {
            self.inner.is_synchronized()
        }

        fn version(&self) -> u64 {
            self.inner.version()
        }

        fn sync_root(&self) -> std::sync::Arc<$crate::views::SyncRoot> {
            self.inner.sync_root()
        }

        fn to_vec(&self) -> $crate::Result<Vec<$crate::Element>> {
            self.inner.to_vec()
        }
    };
}

mod adapter;
mod fixed_size;
mod range;
mod read_only;
mod synchronized;

pub use adapter::{Adapter, ListLike};
pub use fixed_size::FixedSize;
pub use range::RangeView;
pub use read_only::ReadOnly;
pub use synchronized::{SyncRoot, Synchronized};

use std::sync::Arc;

use crate::error::Result;
use crate::list::DynList;

/// Wrap `list` so that every mutation fails.
pub fn read_only(list: DynList) -> DynList {
    Arc::new(ReadOnly::new(list))
}

/// Wrap `list` so that size-changing mutations fail; `set` still works.
pub fn fixed_size(list: DynList) -> DynList {
    Arc::new(FixedSize::new(list))
}

/// Wrap `list` so that every call runs under its root's lock.
pub fn synchronized(list: DynList) -> DynList {
    Arc::new(Synchronized::new(list))
}

/// View `[offset, offset + length)` of `list`.
pub fn range(list: DynList, offset: usize, length: usize) -> Result<DynList> {
    Ok(Arc::new(RangeView::new(list, offset, length)?))
}

/// Present a foreign list-like value as a [`List`](crate::List).
pub fn adapt<L: ListLike + 'static>(list: L) -> DynList {
    Arc::new(Adapter::new(list))
}
