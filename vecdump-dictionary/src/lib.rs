//! # vecdump-dictionary
//!
//! Loaders that turn a term dictionary on disk into a [`TermDictionary`], an array
//! where slot `i` holds the term assigned feature index `i`.
//!
//! Two on-disk forms are supported:
//!
//! - **flat text**: first line is the entry count, then `term\tdocFreq\tindex` rows
//! - **sharded records**: a glob of binary shard files, each holding
//!   `(term, index, docFreq)` records
//!
//! ## Example
//!
//! ```rust,no_run
//! use vecdump_dictionary::{load_term_dictionary, load_term_dictionary_from_shards};
//!
//! let dictionary = load_term_dictionary("dictionary.txt").unwrap();
//! let sharded = load_term_dictionary_from_shards("dictionary/dictionary.file-*").unwrap();
//!
//! println!("{:?}", dictionary.get(0));
//! println!("{}", sharded.len());
//! ```
//!
pub mod record;
pub mod shard;
pub mod sharded;
pub mod source;
pub mod text;

// re-export things
pub use record::*;
pub use shard::*;
pub use sharded::*;
pub use source::*;
pub use text::*;

pub use vecdump_core::DictionaryError;
pub use vecdump_core::models::TermDictionary;

pub mod consts {
    pub const SHARD_MAGIC: &[u8; 4] = b"VDSH";
    pub const SHARD_VERSION: u8 = 1;
    pub const SHARD_EXTENSION: &str = "shard";
    pub const DEFAULT_SHARD_PREFIX: &str = "dictionary.file";
    pub const DEFAULT_RECORDS_PER_SHARD: usize = 100_000;
}
