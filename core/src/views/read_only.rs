use std::sync::Arc;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::list::{DynList, List, ListId};

const POLICY: &str = "read-only";

/// Forwards reads and copies; rejects every mutation with
/// [`Error::UnsupportedOperation`].
///
/// Changes made to the wrapped list through other handles remain visible.
#[derive(Debug, Clone)]
pub struct ReadOnly {
    id: ListId,
    inner: DynList,
}

impl ReadOnly {
    pub fn new(inner: DynList) -> Self {
        let id = ListId::next();
        tracing::debug!(view = %id, inner = %inner.id(), "read-only view created");
        Self { id, inner }
    }

    fn reject<T>(&self, op: &'static str) -> Result<T> {
        tracing::debug!(view = %self.id, op, "mutation rejected by read-only view");
        Err(Error::unsupported(op, POLICY))
    }
}

impl List for ReadOnly {
    forward_reads!();

    fn id(&self) -> ListId {
        self.id
    }

    fn set(&self, _index: usize, _value: Element) -> Result<()> {
        self.reject("set")
    }

    fn add(&self, _value: Element) -> Result<usize> {
        self.reject("add")
    }

    fn insert(&self, _index: usize, _value: Element) -> Result<()> {
        self.reject("insert")
    }

    fn remove(&self, _value: &Element) -> Result<()> {
        self.reject("remove")
    }

    fn remove_at(&self, _index: usize) -> Result<()> {
        self.reject("remove_at")
    }

    fn clear(&self) -> Result<()> {
        self.reject("clear")
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn is_fixed_size(&self) -> bool {
        true
    }

    fn clone_list(&self) -> Result<DynList> {
        Ok(Arc::new(ReadOnly::new(self.inner.clone_list()?)))
    }
}
