use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::list::DynList;

/// An untyped, possibly-null handle stored in a list.
///
/// Lists hold elements of any kind side by side, including `Null` and other
/// lists (a list may even contain itself). Scalars and strings compare by
/// value; lists and opaque handles compare by identity.
///
/// # Example
///
/// ```
/// use dynlist_core::Element;
///
/// let v = Element::from(42);
/// assert_eq!(v.as_int(), Some(42));
/// assert!(Element::Null.is_null());
/// ```
#[derive(Clone, Default)]
pub enum Element {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(DynList),
    Opaque(Arc<dyn Any + Send + Sync>),
}

/// Runtime kind of an [`Element`], also used as the element constraint of a
/// typed [`Buffer`](crate::Buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Any,
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Opaque,
}

impl ElementKind {
    /// Whether a slot constrained to this kind may hold `element`.
    ///
    /// `Null` fits every slot.
    pub fn admits(self, element: &Element) -> bool {
        match (self, element) {
            (ElementKind::Any, _) | (_, Element::Null) => true,
            (kind, element) => kind == element.kind(),
        }
    }
}

impl Element {
    /// Create a string element.
    pub fn str(value: impl Into<Arc<str>>) -> Self {
        Element::Str(value.into())
    }

    /// Create an opaque element wrapping any shareable value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Element::Opaque(Arc::new(value))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Null => ElementKind::Null,
            Element::Bool(_) => ElementKind::Bool,
            Element::Int(_) => ElementKind::Int,
            Element::Float(_) => ElementKind::Float,
            Element::Str(_) => ElementKind::Str,
            Element::List(_) => ElementKind::List,
            Element::Opaque(_) => ElementKind::Opaque,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Element::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&DynList> {
        match self {
            Element::List(list) => Some(list),
            _ => None,
        }
    }

    /// Downcast an opaque handle to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Element::Opaque(value) => value.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Null, Element::Null) => true,
            (Element::Bool(a), Element::Bool(b)) => a == b,
            (Element::Int(a), Element::Int(b)) => a == b,
            (Element::Float(a), Element::Float(b)) => a == b,
            (Element::Str(a), Element::Str(b)) => a == b,
            // Identity only: comparing contents would recurse through a list
            // that contains itself.
            (Element::List(a), Element::List(b)) => a.id() == b.id(),
            (Element::Opaque(a), Element::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Null => write!(f, "Null"),
            Element::Bool(b) => write!(f, "Bool({b})"),
            Element::Int(i) => write!(f, "Int({i})"),
            Element::Float(x) => write!(f, "Float({x})"),
            Element::Str(s) => write!(f, "Str({s:?})"),
            Element::List(list) => write!(f, "List({})", list.id()),
            Element::Opaque(value) => write!(f, "Opaque({:p})", Arc::as_ptr(value)),
        }
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Int(value.into())
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Str(value.into())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Str(value.into())
    }
}

impl From<DynList> for Element {
    fn from(value: DynList) -> Self {
        Element::List(value)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Element::Null, Into::into)
    }
}

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;
