//! Untyped, growable lists and the views that wrap them.
//!
//! [`ArrayList`] owns its elements. The [`views`] module wraps any list in a
//! read-only, fixed-size, range, synchronized or adapter view that aliases
//! the same storage. Every list kind implements [`List`] and shares one
//! copy protocol (see [`copy`]), so bulk extraction validates and fails the
//! same way whichever handle the caller holds.

#![deny(unsafe_code)]

pub mod buffer;
pub mod copy;
pub mod element;
pub mod error;
pub mod list;
mod store;
pub mod views;

pub use buffer::Buffer;
pub use copy::CopyPlan;
pub use element::{Element, ElementKind};
pub use error::{Error, Result};
pub use list::{ArrayList, DynList, List, ListId};
pub use store::DEFAULT_CAPACITY;
pub use views::{adapt, fixed_size, range, read_only, synchronized};
