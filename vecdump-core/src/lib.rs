//! # vecdump-core
//!
//! Shared building blocks for the vecdump crates.
//!
//! ## Main Components
//!
//! - **`SparseVector`**: an ordered set of `index -> value` pairs with a declared dense size
//!   and an optional name
//! - **`TermDictionary`**: positional `index -> term` lookup used to label vector elements
//! - **`utils`**: plain/gzip aware readers and writers used by every file-facing crate
//! - **`io`**: a small line-oriented text format for feeding sparse vectors into the CLI
//!
//! ## Example
//!
//! ```rust
//! use vecdump_core::models::SparseVector;
//!
//! let vector = SparseVector::new(3, vec![(0, 1.5), (2, 3.0)])
//!     .unwrap()
//!     .with_name("v1");
//!
//! assert_eq!(vector.size(), 3);
//! assert_eq!(vector.name(), Some("v1"));
//! assert_eq!(vector.iter_nonzero().count(), 2);
//! ```
//!
pub mod errors;
pub mod io;
pub mod models;
pub mod utils;

pub use errors::*;

pub mod consts {
    pub const COMMENT_PREFIX: char = '#';
    pub const FIELD_SEPARATOR: char = '\t';
    /// Largest entry count a dictionary may declare, the largest signed 32 bit integer.
    pub const MAX_DICTIONARY_LEN: usize = i32::MAX as usize;
}
