//! # Strview
//!
//! Immutable, buffer-sharing strings with O(1) slicing.
//!
//! A [`StrView`] is a logical window (offset and length) into a shared,
//! write-once byte buffer. Slicing a view with [`substring`], [`left`] or
//! [`right`] creates a new view over the *same* buffer without copying, so
//! code that repeatedly slices and recombines text (parsers, tokenizers,
//! editors) pays O(1) per derived view instead of O(n).
//!
//! Because a buffer is never written after a view is constructed, any
//! number of views on any number of threads may read it concurrently with
//! no synchronization. Every transforming operation ([`concat`], the
//! replace methods) allocates a fresh buffer and leaves its inputs intact.
//!
//! ## Example
//! ```
//! use strview::StrView;
//!
//! let view = StrView::new("Hello, World");
//! let hello = view.left(5).unwrap();
//! let world = view.right(5).unwrap();
//!
//! assert_eq!(hello, "Hello");
//! assert_eq!(world, "World");
//! assert_eq!(world.concat(&hello), "WorldHello");
//! ```
//!
//! ## Crate features
//! - `std`: Enabled by default. Turns on the std-backed conveniences of
//!   the byte-string layer. The crate itself is `no_std` + `alloc` when
//!   this feature is disabled.
//! - `inline-more`: Inline more functions, at some cost in compile time.
//!
//! [`substring`]: StrView::substring
//! [`left`]: StrView::left
//! [`right`]: StrView::right
//! [`concat`]: StrView::concat
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod macros;
pub mod types;

pub use types::{StrView, StrViewBuilder, StrViewError};
