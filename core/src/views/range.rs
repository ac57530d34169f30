use std::sync::Arc;

use parking_lot::Mutex;

use crate::buffer::Buffer;
use crate::copy::CopyPlan;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::list::{DynList, List, ListId};

use super::SyncRoot;

/// Length and the inner version it was last valid for. `None` once the
/// range has lost track of the inner list; it never becomes valid again.
#[derive(Debug, Clone, Copy)]
struct Window {
    length: usize,
    version: Option<u64>,
}

/// A contiguous window `[offset, offset + length)` of another list.
///
/// Indices are translated by `offset` and bounded by the current length.
/// Adding or removing through the range changes the inner list at the
/// translated position and resizes the window. Any other structural change
/// to the inner list invalidates the range, including one that races with a
/// mutation made through the range: every later call fails with
/// [`Error::StaleView`].
#[derive(Debug)]
pub struct RangeView {
    id: ListId,
    inner: DynList,
    offset: usize,
    window: Mutex<Window>,
}

impl RangeView {
    /// Fails with [`Error::InvalidRange`] if the window does not fit in
    /// `inner`.
    pub fn new(inner: DynList, offset: usize, length: usize) -> Result<Self> {
        let len = inner.count()?;
        if offset.checked_add(length).is_none_or(|end| end > len) {
            return Err(Error::InvalidRange {
                index: offset,
                count: length,
                len,
            });
        }
        let id = ListId::next();
        tracing::debug!(view = %id, inner = %inner.id(), offset, length, "range view created");
        Ok(Self {
            id,
            offset,
            window: Mutex::new(Window {
                length,
                version: Some(inner.version()),
            }),
            inner,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    // The window lock is never held across a call into `inner`.
    fn current(&self) -> Result<(usize, u64)> {
        let window = *self.window.lock();
        match window.version {
            Some(version) if version == self.inner.version() => Ok((window.length, version)),
            _ => {
                tracing::debug!(view = %self.id, inner = %self.inner.id(), "range view is stale");
                Err(Error::stale(self.id))
            }
        }
    }

    fn current_length(&self) -> Result<usize> {
        self.current().map(|(length, _)| length)
    }

    /// Accept the inner list's new version only if the window is unchanged
    /// since `before` and exactly `changes` structural changes happened in
    /// between, all of them made through this range. Anything else means
    /// another handle changed the inner list concurrently.
    fn commit(&self, before: u64, changes: u64, length: usize) {
        let after = self.inner.version();
        let mut window = self.window.lock();
        if window.version == Some(before) && before.checked_add(changes) == Some(after) {
            *window = Window {
                length,
                version: Some(after),
            };
        } else {
            tracing::debug!(
                view = %self.id,
                inner = %self.inner.id(),
                before,
                after,
                "range view lost track of a concurrent change"
            );
            window.version = None;
        }
    }

    fn check_index(index: usize, length: usize) -> Result<()> {
        if index < length {
            Ok(())
        } else {
            Err(Error::index("index", index))
        }
    }
}

impl List for RangeView {
    fn id(&self) -> ListId {
        self.id
    }

    fn count(&self) -> Result<usize> {
        self.current_length()
    }

    fn get(&self, index: usize) -> Result<Element> {
        Self::check_index(index, self.current_length()?)?;
        self.inner.get(self.offset + index)
    }

    fn set(&self, index: usize, value: Element) -> Result<()> {
        Self::check_index(index, self.current_length()?)?;
        self.inner.set(self.offset + index, value)
    }

    fn add(&self, value: Element) -> Result<usize> {
        let (length, version) = self.current()?;
        self.inner.insert(self.offset + length, value)?;
        self.commit(version, 1, length + 1);
        Ok(length)
    }

    fn insert(&self, index: usize, value: Element) -> Result<()> {
        let (length, version) = self.current()?;
        if index > length {
            return Err(Error::index("index", index));
        }
        self.inner.insert(self.offset + index, value)?;
        self.commit(version, 1, length + 1);
        Ok(())
    }

    fn remove(&self, value: &Element) -> Result<()> {
        match self.index_of(value)? {
            Some(index) => self.remove_at(index),
            None => Ok(()),
        }
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        let (length, version) = self.current()?;
        Self::check_index(index, length)?;
        self.inner.remove_at(self.offset + index)?;
        self.commit(version, 1, length - 1);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let (length, version) = self.current()?;
        // Back to front so each removal leaves the remaining positions intact.
        for index in (self.offset..self.offset + length).rev() {
            self.inner.remove_at(index)?;
        }
        self.commit(version, length as u64, 0);
        Ok(())
    }

    fn index_of(&self, value: &Element) -> Result<Option<usize>> {
        let length = self.current_length()?;
        for index in 0..length {
            if self.inner.get(self.offset + index)? == *value {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn copy_to(&self, target: Option<&mut Buffer>, target_start: isize) -> Result<()> {
        let length = self.current_length()?;
        let plan = CopyPlan::whole(length, target.as_deref(), target_start)?.shifted(self.offset);
        forward_copy(self.inner.as_ref(), plan, target)
    }

    fn copy_range_to(
        &self,
        source_index: isize,
        target: Option<&mut Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<()> {
        let length = self.current_length()?;
        let plan = CopyPlan::window(length, source_index, target.as_deref(), target_start, count)?
            .shifted(self.offset);
        forward_copy(self.inner.as_ref(), plan, target)
    }

    fn is_read_only(&self) -> bool {
        self.inner.is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        self.inner.is_fixed_size()
    }

    fn is_synchronized(&self) -> bool {
        self.inner.is_synchronized()
    }

    fn version(&self) -> u64 {
        self.inner.version()
    }

    fn sync_root(&self) -> Arc<SyncRoot> {
        self.inner.sync_root()
    }

    fn clone_list(&self) -> Result<DynList> {
        let length = self.current_length()?;
        let copy = self.inner.clone_list()?;
        Ok(Arc::new(RangeView::new(copy, self.offset, length)?))
    }
}

// Every argument has already passed validation against the range, so the
// inner list only re-checks the translated window.
fn forward_copy(inner: &dyn List, plan: CopyPlan, target: Option<&mut Buffer>) -> Result<()> {
    inner.copy_range_to(
        as_signed(plan.source_index),
        target,
        as_signed(plan.target_start),
        as_signed(plan.count),
    )
}

fn as_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
