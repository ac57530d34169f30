use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::buffer::Buffer;
use crate::copy::{self, CopyPlan};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::list::{ArrayList, DynList, List, ListId};

use super::SyncRoot;

/// The capabilities a foreign sequence must offer to be adapted into a
/// [`List`].
///
/// Only the indexed primitives are required; everything else the list
/// contract needs is derived from them by [`Adapter`]. Implementations
/// report their own errors (bounds, read-only, ...), which the adapter
/// passes through untouched.
///
/// `Vec<Element>` implements this trait, so wherever it is imported
/// `vec.get(i)` resolves to [`ListLike::get`] rather than the slice method.
/// Use `vec.as_slice().get(i)` for the `Option` form.
pub trait ListLike: Send + Sync {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Result<Element>;

    fn set(&mut self, index: usize, value: Element) -> Result<()>;

    fn insert(&mut self, index: usize, value: Element) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<()>;

    fn clear(&mut self) -> Result<()> {
        while self.len() > 0 {
            self.remove_at(self.len() - 1)?;
        }
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn is_fixed_size(&self) -> bool {
        false
    }

    /// Structural version, if the source tracks one. Without it the adapter
    /// counts the changes made through itself.
    ///
    /// A reported version must grow by exactly one per structural change;
    /// range views over the adapter rely on it to tell their own changes
    /// from anyone else's.
    fn version(&self) -> Option<u64> {
        None
    }

    /// The source's own lock, if it belongs to a root that has one.
    fn sync_root(&self) -> Option<Arc<SyncRoot>> {
        None
    }
}

impl ListLike for Vec<Element> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Result<Element> {
        self.as_slice()
            .get(index)
            .cloned()
            .ok_or_else(|| Error::index("index", index))
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let slot = self
            .get_mut(index)
            .ok_or_else(|| Error::index("index", index))?;
        *slot = value;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Element) -> Result<()> {
        if index > Vec::len(self) {
            return Err(Error::index("index", index));
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        if index >= Vec::len(self) {
            return Err(Error::index("index", index));
        }
        Vec::remove(self, index);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Vec::clear(self);
        Ok(())
    }
}

// Adapting an `ArrayList` aliases its storage and shares its version and lock.
impl ListLike for ArrayList {
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn get(&self, index: usize) -> Result<Element> {
        List::get(self, index)
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        List::set(self, index, value)
    }

    fn insert(&mut self, index: usize, value: Element) -> Result<()> {
        List::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        List::remove_at(self, index)
    }

    fn clear(&mut self) -> Result<()> {
        List::clear(self)
    }

    fn version(&self) -> Option<u64> {
        Some(List::version(self))
    }

    fn sync_root(&self) -> Option<Arc<SyncRoot>> {
        Some(List::sync_root(self))
    }
}

/// Presents any [`ListLike`] source through the [`List`] contract.
///
/// The adapter adds no policy of its own: each call maps 1:1 onto the
/// source's primitives.
pub struct Adapter<L> {
    id: ListId,
    source: RwLock<L>,
    changes: AtomicU64,
    root: Arc<SyncRoot>,
}

impl<L: ListLike> Adapter<L> {
    pub fn new(source: L) -> Self {
        let id = ListId::next();
        let root = source
            .sync_root()
            .unwrap_or_else(|| Arc::new(SyncRoot::new(id)));
        tracing::debug!(view = %id, root = %root.owner(), "adapter created");
        Self {
            id,
            source: RwLock::new(source),
            changes: AtomicU64::new(0),
            root,
        }
    }

    /// Give back the adapted source.
    pub fn into_inner(self) -> L {
        self.source.into_inner()
    }

    fn changed(&self) {
        self.changes.fetch_add(1, Ordering::Relaxed);
    }
}

// Extracts the planned window before any write, so a failing `get` leaves the
// target untouched.
fn run_copy<L: ListLike>(source: &L, plan: CopyPlan, target: Option<&mut Buffer>) -> Result<()> {
    let window = plan
        .source_window()
        .map(|index| source.get(index))
        .collect::<Result<Vec<_>>>()?;
    let target = target.ok_or(Error::NullTarget)?;
    copy::transfer(&plan, &window, target)
}

impl<L> fmt::Debug for Adapter<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("id", &self.id)
            .field("root", &self.root.owner())
            .finish_non_exhaustive()
    }
}

impl<L: ListLike> List for Adapter<L> {
    fn id(&self) -> ListId {
        self.id
    }

    fn count(&self) -> Result<usize> {
        Ok(self.source.read().len())
    }

    fn get(&self, index: usize) -> Result<Element> {
        self.source.read().get(index)
    }

    fn set(&self, index: usize, value: Element) -> Result<()> {
        self.source.write().set(index, value)
    }

    fn add(&self, value: Element) -> Result<usize> {
        let mut source = self.source.write();
        let index = source.len();
        source.insert(index, value)?;
        self.changed();
        Ok(index)
    }

    fn insert(&self, index: usize, value: Element) -> Result<()> {
        self.source.write().insert(index, value)?;
        self.changed();
        Ok(())
    }

    fn remove(&self, value: &Element) -> Result<()> {
        let mut source = self.source.write();
        for index in 0..source.len() {
            if source.get(index)? == *value {
                source.remove_at(index)?;
                self.changed();
                break;
            }
        }
        Ok(())
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        self.source.write().remove_at(index)?;
        self.changed();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.source.write().clear()?;
        self.changed();
        Ok(())
    }

    fn index_of(&self, value: &Element) -> Result<Option<usize>> {
        let source = self.source.read();
        for index in 0..source.len() {
            if source.get(index)? == *value {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn copy_to(&self, target: Option<&mut Buffer>, target_start: isize) -> Result<()> {
        let source = self.source.read();
        let plan = CopyPlan::whole(source.len(), target.as_deref(), target_start)?;
        run_copy(&*source, plan, target)
    }

    fn copy_range_to(
        &self,
        source_index: isize,
        target: Option<&mut Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<()> {
        let source = self.source.read();
        let plan = CopyPlan::window(
            source.len(),
            source_index,
            target.as_deref(),
            target_start,
            count,
        )?;
        run_copy(&*source, plan, target)
    }

    fn is_read_only(&self) -> bool {
        self.source.read().is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        self.source.read().is_fixed_size()
    }

    fn is_synchronized(&self) -> bool {
        false
    }

    fn version(&self) -> u64 {
        self.source
            .read()
            .version()
            .unwrap_or_else(|| self.changes.load(Ordering::Relaxed))
    }

    fn sync_root(&self) -> Arc<SyncRoot> {
        Arc::clone(&self.root)
    }

    fn clone_list(&self) -> Result<DynList> {
        let items = {
            let source = self.source.read();
            (0..source.len())
                .map(|index| source.get(index))
                .collect::<Result<Vec<_>>>()?
        };
        Ok(Arc::new(Adapter::new(ArrayList::from(items))))
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;
