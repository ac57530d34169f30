//! The copy protocol shared by every list and view.
//!
//! Copying is split into a pure validation step, which turns the caller's
//! arguments into a [`CopyPlan`], and a transfer step that writes the planned
//! window into the target buffer. The validation order is part of the
//! contract: callers (and tests) rely on which error fires first, so every
//! list kind funnels through these two functions.

use core::ops::Range;

use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::{Error, Result};

/// A validated copy: `count` elements from `source_index` land at
/// `target_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyPlan {
    pub source_index: usize,
    pub target_start: usize,
    pub count: usize,
}

impl CopyPlan {
    /// Validate a whole-source copy (`copy_to(target, target_start)`).
    ///
    /// Order: null target, rank, negative offset, space.
    pub fn whole(source_len: usize, target: Option<&Buffer>, target_start: isize) -> Result<Self> {
        let target = target.ok_or(Error::NullTarget)?;
        check_rank(target)?;
        let target_start = check_offset(target_start)?;
        check_space(target, target_start, source_len)?;
        Ok(Self {
            source_index: 0,
            target_start,
            count: source_len,
        })
    }

    /// Validate a windowed copy (`copy_range_to(source_index, target,
    /// target_start, count)`).
    ///
    /// Order: negative source index, negative count, null target, rank,
    /// negative offset, source window, space.
    pub fn window(
        source_len: usize,
        source_index: isize,
        target: Option<&Buffer>,
        target_start: isize,
        count: isize,
    ) -> Result<Self> {
        let source_index = usize::try_from(source_index).map_err(|_| Error::IndexOutOfRange {
            param: "source_index",
            value: source_index,
        })?;
        let count = usize::try_from(count).map_err(|_| Error::IndexOutOfRange {
            param: "count",
            value: count,
        })?;
        let target = target.ok_or(Error::NullTarget)?;
        check_rank(target)?;
        let target_start = check_offset(target_start)?;
        if source_index
            .checked_add(count)
            .is_none_or(|end| end > source_len)
        {
            return Err(Error::InvalidRange {
                index: source_index,
                count,
                len: source_len,
            });
        }
        check_space(target, target_start, count)?;
        Ok(Self {
            source_index,
            target_start,
            count,
        })
    }

    /// Positions read from the source.
    pub fn source_window(&self) -> Range<usize> {
        self.source_index..self.source_index + self.count
    }

    /// The same plan with the source window shifted by `offset`, used by
    /// views that translate indices into their inner list.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self {
            source_index: self.source_index + offset,
            ..self
        }
    }
}

/// Copy `source` (the planned window, already extracted) into `target`.
///
/// Element kinds are checked before the first write, so a failed transfer
/// leaves `target` untouched.
pub fn transfer(plan: &CopyPlan, source: &[Element], target: &mut Buffer) -> Result<()> {
    debug_assert_eq!(source.len(), plan.count);
    if plan.count == 0 {
        return Ok(());
    }
    target.store_window(plan.target_start, source)
}

/// Whole-source copy out of a slice.
pub(crate) fn copy_slice(
    source: &[Element],
    target: Option<&mut Buffer>,
    target_start: isize,
) -> Result<()> {
    let plan = CopyPlan::whole(source.len(), target.as_deref(), target_start)?;
    run(&plan, source, target)
}

/// Windowed copy out of a slice.
pub(crate) fn copy_slice_range(
    source: &[Element],
    source_index: isize,
    target: Option<&mut Buffer>,
    target_start: isize,
    count: isize,
) -> Result<()> {
    let plan = CopyPlan::window(
        source.len(),
        source_index,
        target.as_deref(),
        target_start,
        count,
    )?;
    run(&plan, source, target)
}

fn run(plan: &CopyPlan, source: &[Element], target: Option<&mut Buffer>) -> Result<()> {
    let target = target.ok_or(Error::NullTarget)?;
    transfer(plan, &source[plan.source_window()], target)
}

fn check_rank(target: &Buffer) -> Result<()> {
    match target.rank() {
        1 => Ok(()),
        rank => Err(Error::RankMismatch { rank }),
    }
}

fn check_offset(target_start: isize) -> Result<usize> {
    usize::try_from(target_start).map_err(|_| Error::OffsetOutOfRange {
        offset: target_start,
    })
}

// Room goes negative when the offset is past the end; even a zero-element copy
// fails then.
fn check_space(target: &Buffer, target_start: usize, needed: usize) -> Result<()> {
    let available = isize::try_from(target.len())
        .unwrap_or(isize::MAX)
        .saturating_sub(isize::try_from(target_start).unwrap_or(isize::MAX));
    let enough = usize::try_from(available).is_ok_and(|available| available >= needed);
    if enough {
        Ok(())
    } else {
        Err(Error::InsufficientSpace { needed, available })
    }
}

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;
