//! # Stringify Core
//!
//! Joins a sequence into a single string with a separator, optionally
//! rendering each element through one or more selectors first.
//! This crate is pure and synchronous: no I/O, no shared state.
//!
//! ## Rendering
//!
//! - No selectors: elements render through `Display`.
//! - One selector: its output per element is joined with the separator.
//! - Several selectors: their outputs are appended back to back for each
//!   element, and elements are separated by the separator.
//!
//! Absent inputs are accepted where they make sense: a `None` separator is
//! the empty string and `None` selectors are skipped. A `None` source is an
//! [`Error::InvalidArgument`].

pub mod error;
pub mod selector;
pub mod stringifier;
pub mod ext;
pub mod spec;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result, SelectorError, SpecError};
pub use selector::Selector;
pub use stringifier::{Stringifier, stringify, stringify_by, stringify_default, stringify_selected};
pub use ext::StringifyExt;
pub use spec::SelectorSpec;
