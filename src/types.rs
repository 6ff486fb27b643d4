//! The string view type structures.
//!
//! Everything in this module revolves around one value type: [`StrView`],
//! a read-only window into a shared, write-once byte buffer. There is no
//! trait hierarchy to implement and no session state to hold; every
//! operation is a pure function from immutable inputs to a new view.
use thiserror::Error;

pub mod string;

pub use string::{StrView, StrViewBuilder};

/// The error for [`StrView`] operations that validate their arguments.
///
/// Two kinds cover every failure the type can produce. Both are
/// synchronous and non-retryable: the operation fails before any output
/// exists, and the inputs are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StrViewError {
    /// A construction or slicing argument violated the window contract,
    /// e.g. an offset outside the buffer or a slice length larger than the
    /// view.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A checked unit access outside the visible window.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// Length of the view that rejected it.
        len:   usize,
    },
}
