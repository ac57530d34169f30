use std::sync::Arc;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::list::{DynList, List, ListId};

const POLICY: &str = "fixed-size";

/// Forwards reads, copies and in-place replacement; rejects anything that
/// would change the element count.
#[derive(Debug, Clone)]
pub struct FixedSize {
    id: ListId,
    inner: DynList,
}

impl FixedSize {
    pub fn new(inner: DynList) -> Self {
        let id = ListId::next();
        tracing::debug!(view = %id, inner = %inner.id(), "fixed-size view created");
        Self { id, inner }
    }

    fn reject<T>(&self, op: &'static str) -> Result<T> {
        tracing::debug!(view = %self.id, op, "size change rejected by fixed-size view");
        Err(Error::unsupported(op, POLICY))
    }
}

impl List for FixedSize {
    forward_reads!();

    fn id(&self) -> ListId {
        self.id
    }

    fn set(&self, index: usize, value: Element) -> Result<()> {
        self.inner.set(index, value)
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
        self.inner.is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        true
    }

    fn clone_list(&self) -> Result<DynList> {
        Ok(Arc::new(FixedSize::new(self.inner.clone_list()?)))
    }
}
