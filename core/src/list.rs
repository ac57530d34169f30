use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::buffer::Buffer;
use crate::copy;
use crate::element::Element;
use crate::error::Result;
use crate::store::Store;
use crate::views::{RangeView, SyncRoot};

/// Shared handle to any list or view.
pub type DynList = Arc<dyn List>;

/// Process-unique identity of a list root or a view.
///
/// Cloning a handle keeps its identity; wrapping it in a view does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The container contract shared by [`ArrayList`] and every view.
///
/// All methods take `&self`: lists are shared handles, and several views may
/// alias the same storage at once. Implementations that wrap another list
/// apply their own policy first and then forward, propagating the inner
/// list's errors unchanged.
pub trait List: Send + Sync + fmt::Debug {
    fn id(&self) -> ListId;

    fn count(&self) -> Result<usize>;

    fn get(&self, index: usize) -> Result<Element>;

    fn set(&self, index: usize, value: Element) -> Result<()>;

    /// Append `value`, returning its index.
    fn add(&self, value: Element) -> Result<usize>;

    fn insert(&self, index: usize, value: Element) -> Result<()>;

    /// Remove the first element equal to `value`. Does nothing if absent.
    fn remove(&self, value: &Element) -> Result<()>;

    fn remove_at(&self, index: usize) -> Result<()>;

    fn clear(&self) -> Result<()>;

    fn index_of(&self, value: &Element) -> Result<Option<usize>>;

    /// Copy every element into `target` starting at `target_start`.
    ///
    /// Checks run in a fixed order: null target, target rank, negative
    /// offset, then available space. Nothing is written unless all checks
    /// (including the target's element kind) pass.
    fn copy_to(&self, target: Option<&mut Buffer>, target_start: isize) -> Result<()>;

    /// Copy `count` elements starting at `source_index` into `target` at
    /// `target_start`.
    ///
    /// Checks run in a fixed order: negative source index, negative count,
    /// null target, target rank, negative offset, source window, available
    /// space.
    fn copy_range_to(
        &self,
        source_index: isize,
        target: Option<&mut Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<()>;

    fn is_read_only(&self) -> bool;

    fn is_fixed_size(&self) -> bool;

    fn is_synchronized(&self) -> bool;

    /// Structural version of the underlying storage. Grows by exactly one
    /// per structural change.
    fn version(&self) -> u64;

    /// Lock shared by all synchronized wrappers over the same root.
    fn sync_root(&self) -> Arc<SyncRoot>;

    /// Shallow copy: a new list holding the same element handles, wrapped
    /// the same way as `self`.
    fn clone_list(&self) -> Result<DynList>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    fn contains(&self, value: &Element) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    /// Same as `copy_to(target, 0)`.
    fn copy_all_to(&self, target: Option<&mut Buffer>) -> Result<()> {
        self.copy_to(target, 0)
    }

    /// Materialize the elements through the copy protocol.
    fn to_vec(&self) -> Result<Vec<Element>> {
        let mut buffer = Buffer::new(self.count()?);
        self.copy_to(Some(&mut buffer), 0)?;
        Ok(buffer.into_vec())
    }
}

static_assertions::assert_obj_safe!(List);

struct Root {
    id: ListId,
    store: RwLock<Store>,
    sync: Arc<SyncRoot>,
}

/// Growable list of untyped elements.
///
/// `ArrayList` is a handle: `clone()` returns another handle to the same
/// storage, the way cloning an `Arc` does. Use [`List::clone_list`] for an
/// independent copy.
///
/// A list may hold a handle to itself. Such a cycle keeps the storage alive
/// until the self-reference is removed or the list is cleared.
///
/// # Example
///
/// ```
/// use dynlist_core::{ArrayList, Buffer, Element, List};
///
/// let list = ArrayList::new();
/// list.add(Element::from("a")).unwrap();
/// list.add(Element::Null).unwrap();
///
/// let mut buffer = Buffer::new(3);
/// list.copy_to(Some(&mut buffer), 1).unwrap();
/// assert_eq!(buffer.get(1), Some(&Element::from("a")));
/// ```
#[derive(Clone)]
pub struct ArrayList {
    root: Arc<Root>,
}

static_assertions::assert_impl_all!(ArrayList: Send, Sync, Clone);

impl ArrayList {
    pub fn new() -> Self {
        Self::from_store(Store::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_store(Store::with_capacity(capacity))
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        Self::from_store(Store::from_vec(elements.into_iter().collect()))
    }

    fn from_store(store: Store) -> Self {
        let id = ListId::next();
        Self {
            root: Arc::new(Root {
                id,
                store: RwLock::new(store),
                sync: Arc::new(SyncRoot::new(id)),
            }),
        }
    }

    /// Wrap this handle as a [`DynList`], aliasing the same storage.
    pub fn into_dyn(self) -> DynList {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.root.store.read().len()
    }

    pub fn capacity(&self) -> usize {
        self.root.store.read().capacity()
    }

    pub fn set_capacity(&self, capacity: usize) -> Result<()> {
        self.root.store.write().set_capacity(capacity)
    }

    pub fn trim_to_size(&self) {
        self.root.store.write().shrink_to_fit();
    }

    /// A range view over `[offset, offset + length)` of this list.
    pub fn get_range(&self, offset: usize, length: usize) -> Result<RangeView> {
        RangeView::new(self.clone().into_dyn(), offset, length)
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Element>> for ArrayList {
    fn from(items: Vec<Element>) -> Self {
        Self::from_store(Store::from_vec(items))
    }
}

impl FromIterator<Element> for ArrayList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl fmt::Debug for ArrayList {
    // Elements are left out: a list may contain itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("id", &self.root.id)
            .field("count", &self.len())
            .finish()
    }
}

impl List for ArrayList {
    fn id(&self) -> ListId {
        self.root.id
    }

    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn get(&self, index: usize) -> Result<Element> {
        self.root.store.read().get(index)
    }

    fn set(&self, index: usize, value: Element) -> Result<()> {
        self.root.store.write().set(index, value)
    }

    fn add(&self, value: Element) -> Result<usize> {
        Ok(self.root.store.write().push(value))
    }

    fn insert(&self, index: usize, value: Element) -> Result<()> {
        self.root.store.write().insert(index, value)
    }

    fn remove(&self, value: &Element) -> Result<()> {
        let mut store = self.root.store.write();
        if let Some(index) = store.position(value) {
            store.remove_at(index)?;
        }
        Ok(())
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        self.root.store.write().remove_at(index).map(drop)
    }

    fn clear(&self) -> Result<()> {
        self.root.store.write().clear();
        Ok(())
    }

    fn index_of(&self, value: &Element) -> Result<Option<usize>> {
        Ok(self.root.store.read().position(value))
    }

    fn copy_to(&self, target: Option<&mut Buffer>, target_start: isize) -> Result<()> {
        let store = self.root.store.read();
        copy::copy_slice(store.as_slice(), target, target_start)
    }

    fn copy_range_to(
        &self,
        source_index: isize,
        target: Option<&mut Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<()> {
        let store = self.root.store.read();
        copy::copy_slice_range(store.as_slice(), source_index, target, target_start, count)
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn is_fixed_size(&self) -> bool {
        false
    }

    fn is_synchronized(&self) -> bool {
        false
    }

    fn version(&self) -> u64 {
        self.root.store.read().version()
    }

    fn sync_root(&self) -> Arc<SyncRoot> {
        Arc::clone(&self.root.sync)
    }

    fn clone_list(&self) -> Result<DynList> {
        let items = self.root.store.read().as_slice().to_vec();
        Ok(ArrayList::from(items).into_dyn())
    }

    fn to_vec(&self) -> Result<Vec<Element>> {
        Ok(self.root.store.read().as_slice().to_vec())
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
