use std::fmt;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::Result;
use crate::list::{DynList, List, ListId};

/// The lock behind every [`Synchronized`] view of one root list.
///
/// There is exactly one `SyncRoot` per root identity, so two synchronized
/// wrappers created independently over the same list exclude each other.
/// The lock is reentrant: a synchronized view stacked over another view of
/// the same root (directly or through a range or adapter) relocks it on the
/// same thread without deadlocking.
pub struct SyncRoot {
    owner: ListId,
    lock: ReentrantMutex<()>,
}

impl SyncRoot {
    pub(crate) fn new(owner: ListId) -> Self {
        Self {
            owner,
            lock: ReentrantMutex::new(()),
        }
    }

    /// Identity of the list that owns this lock.
    pub fn owner(&self) -> ListId {
        self.owner
    }

    /// Block until the lock is held by the current thread.
    pub fn lock(&self) -> ReentrantMutexGuard<'_, ()> {
        self.lock.lock()
    }

    /// Whether any thread currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl fmt::Debug for SyncRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRoot")
            .field("owner", &self.owner)
            .field("locked", &self.is_locked())
            .finish()
    }
}

/// Runs every forwarded call, copy validation and transfer included, while
/// holding the root's [`SyncRoot`] lock. The guard is released on every exit
/// path, error or not.
#[derive(Debug, Clone)]
pub struct Synchronized {
    id: ListId,
    inner: DynList,
    root: Arc<SyncRoot>,
}

static_assertions::assert_impl_all!(Synchronized: Send, Sync);

impl Synchronized {
    pub fn new(inner: DynList) -> Self {
        let id = ListId::next();
        let root = inner.sync_root();
        tracing::debug!(view = %id, root = %root.owner(), "synchronized view created");
        Self { id, inner, root }
    }

    fn locked<T>(&self, op: &'static str, f: impl FnOnce(&dyn List) -> T) -> T {
        let _guard = self.root.lock();
        tracing::trace!(view = %self.id, root = %self.root.owner(), op, "lock held");
        f(self.inner.as_ref())
    }
}

impl List for Synchronized {
    fn id(&self) -> ListId {
        self.id
    }

    fn count(&self) -> Result<usize> {
        self.locked("count", |inner| inner.count())
    }

    fn get(&self, index: usize) -> Result<Element> {
        self.locked("get", |inner| inner.get(index))
    }

    fn set(&self, index: usize, value: Element) -> Result<()> {
        self.locked("set", |inner| inner.set(index, value))
    }

    fn add(&self, value: Element) -> Result<usize> {
        self.locked("add", |inner| inner.add(value))
    }

    fn insert(&self, index: usize, value: Element) -> Result<()> {
        self.locked("insert", |inner| inner.insert(index, value))
    }

    fn remove(&self, value: &Element) -> Result<()> {
        self.locked("remove", |inner| inner.remove(value))
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        self.locked("remove_at", |inner| inner.remove_at(index))
    }

    fn clear(&self) -> Result<()> {
        self.locked("clear", |inner| inner.clear())
    }

    fn index_of(&self, value: &Element) -> Result<Option<usize>> {
        self.locked("index_of", |inner| inner.index_of(value))
    }

    fn copy_to(&self, target: Option<&mut Buffer>, target_start: isize) -> Result<()> {
        self.locked("copy_to", |inner| inner.copy_to(target, target_start))
    }

    fn copy_range_to(
        &self,
        source_index: isize,
        target: Option<&mut Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<()> {
        self.locked("copy_range_to", |inner| {
            inner.copy_range_to(source_index, target, target_start, count)
        })
    }

    fn is_read_only(&self) -> bool {
        self.inner.is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        self.inner.is_fixed_size()
    }

    fn is_synchronized(&self) -> bool {
        true
    }

    fn version(&self) -> u64 {
        self.locked("version", |inner| inner.version())
    }

    fn sync_root(&self) -> Arc<SyncRoot> {
        Arc::clone(&self.root)
    }

    fn clone_list(&self) -> Result<DynList> {
        let copy = self.locked("clone_list", |inner| inner.clone_list())?;
        Ok(Arc::new(Synchronized::new(copy)))
    }

    fn to_vec(&self) -> Result<Vec<Element>> {
        self.locked("to_vec", |inner| inner.to_vec())
    }

    fn contains(&self, value: &Element) -> Result<bool> {
        self.locked("contains", |inner| inner.contains(value))
    }
}
