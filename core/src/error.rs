//! Public error type for list and view operations.
//!
//! Every operation reports failures synchronously through [`Error`]. Views
//! never swallow an error raised by the list they wrap: after their own
//! policy check passes, whatever the inner list returns is handed back
//! unchanged.

use thiserror::Error;

use crate::element::ElementKind;
use crate::list::ListId;

/// Errors raised by [`List`](crate::List) operations and the copy protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The copy target was absent.
    #[error("copy target is null")]
    NullTarget,

    /// The copy target has more than one dimension.
    #[error("copy target must be single-dimensional, found rank {rank}")]
    RankMismatch { rank: usize },

    /// The start offset into the copy target is negative.
    #[error("target offset {offset} is out of range")]
    OffsetOutOfRange { offset: isize },

    /// An index or count argument is negative, or an element index falls
    /// outside the list.
    #[error("`{param}` is out of range: {value}")]
    IndexOutOfRange { param: &'static str, value: isize },

    /// The copy target lacks room from the start offset.
    #[error("copy target has room for {available} element(s) but {needed} are required")]
    InsufficientSpace { needed: usize, available: isize },

    /// The requested source window runs past the end of the source.
    #[error("window [{index}, {index}+{count}) exceeds source length {len}")]
    InvalidRange {
        index: usize,
        count: usize,
        len: usize,
    },

    /// A typed copy target cannot hold one of the elements being copied.
    #[error("element {index} is {found:?}, target only accepts {expected:?}")]
    ElementTypeMismatch {
        index: usize,
        expected: ElementKind,
        found: ElementKind,
    },

    /// The operation is forbidden by the view's policy.
    #[error("`{op}` is not supported on a {policy} list")]
    UnsupportedOperation {
        op: &'static str,
        policy: &'static str,
    },

    /// A range view's underlying list was structurally modified behind it.
    #[error("underlying list of range view {list} changed")]
    StaleView { list: ListId },

    /// Requested capacity cannot hold the elements already present.
    #[error("capacity {requested} is smaller than count {count}")]
    CapacityTooSmall { requested: usize, count: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Builds an [`Error::IndexOutOfRange`] for an unsigned index.
    pub(crate) fn index(param: &'static str, value: usize) -> Self {
        Error::IndexOutOfRange {
            param,
            value: isize::try_from(value).unwrap_or(isize::MAX),
        }
    }

    pub(crate) fn stale(list: ListId) -> Self {
        Error::StaleView { list }
    }

    pub(crate) fn unsupported(op: &'static str, policy: &'static str) -> Self {
        Error::UnsupportedOperation { op, policy }
    }
}
