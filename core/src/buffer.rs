//! Caller-owned copy target.

use crate::element::{Element, ElementKind};
use crate::error::{Error, Result};

/// Array-like buffer that [`List::copy_to`](crate::List::copy_to) writes into.
///
/// A buffer has a shape (its rank is the number of dimensions) and an element
/// kind. Only rank-1 buffers are valid copy targets. A buffer of a narrower
/// kind than [`ElementKind::Any`] rejects elements of any other kind, except
/// `Null`.
///
/// # Example
///
/// ```
/// use dynlist_core::{Buffer, ElementKind};
///
/// let flat = Buffer::of_kind(ElementKind::Str, 4);
/// assert_eq!((flat.len(), flat.rank()), (4, 1));
///
/// let grid = Buffer::with_shape(&[3, 3]);
/// assert_eq!((grid.len(), grid.rank()), (9, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    shape: Vec<usize>,
    kind: ElementKind,
    slots: Vec<Element>,
}

impl Buffer {
    /// A rank-1 buffer of `len` null slots accepting any element.
    pub fn new(len: usize) -> Self {
        Self::of_kind(ElementKind::Any, len)
    }

    pub fn of_kind(kind: ElementKind, len: usize) -> Self {
        Self {
            shape: vec![len],
            kind,
            slots: vec![Element::Null; len],
        }
    }

    /// A buffer with the given dimensions. Its length is the product of
    /// `shape`.
    pub fn with_shape(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            kind: ElementKind::Any,
            slots: vec![Element::Null; len],
        }
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let slots: Vec<Element> = elements.into_iter().collect();
        Self {
            shape: vec![slots.len()],
            kind: ElementKind::Any,
            slots,
        }
    }

    /// Restrict the kinds this buffer accepts. Fails if a slot already holds
    /// an element the new kind does not admit.
    pub fn with_kind(mut self, kind: ElementKind) -> Result<Self> {
        check_kinds(kind, &self.slots)?;
        self.kind = kind;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.slots.get(index)
    }

    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        if !self.kind.admits(&value) {
            return Err(Error::ElementTypeMismatch {
                index,
                expected: self.kind,
                found: value.kind(),
            });
        }
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| Error::index("index", index))?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.slots.iter()
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.slots
    }

    /// Write `elements` at `start`, all or nothing.
    ///
    /// The caller has already checked that the window fits.
    pub(crate) fn store_window(&mut self, start: usize, elements: &[Element]) -> Result<()> {
        check_kinds(self.kind, elements)?;
        self.slots[start..start + elements.len()].clone_from_slice(elements);
        Ok(())
    }
}

fn check_kinds(kind: ElementKind, elements: &[Element]) -> Result<()> {
    match elements.iter().position(|e| !kind.admits(e)) {
        Some(i) => Err(Error::ElementTypeMismatch {
            index: i,
            expected: kind,
            found: elements[i].kind(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod buffer_test;
