//! # vecdump-format
//!
//! Human readable renderings of a [`SparseVector`](vecdump_core::models::SparseVector).
//!
//! - **CSV**: every cell `0..size`, zeros included, one line per vector. The vector
//!   name can be emitted as a `#<name>` comment line.
//! - **JSON-like**: nonzero cells only, `elts: {<label>:<value>, ...}`, where the label
//!   is the raw index or, given a [`TermDictionary`](vecdump_core::models::TermDictionary),
//!   the term for that index. Keys are not quoted, so this is not strict JSON.
//!
//! Values are written with Rust's `{:?}` float formatting: integral values keep a
//! trailing `.0`, magnitudes print in full without an exponent (`1e7` is `10000000.0`),
//! and non-finite values print as `inf`, `-inf` and `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use vecdump_core::models::{SparseVector, TermDictionary};
//! use vecdump_format::{vector_to_csv_string, vector_to_json_string};
//!
//! let vector = SparseVector::new(3, vec![(0, 1.5), (2, 3.0)]).unwrap();
//! assert_eq!(vector_to_csv_string(&vector, false).unwrap(), "1.5,0.0,3.0\n");
//!
//! let dictionary = TermDictionary::from(vec!["apple", "banana", "cherry"]);
//! assert_eq!(
//!     vector_to_json_string(&vector, Some(&dictionary)).unwrap(),
//!     "elts: {apple:1.5, cherry:3.0}"
//! );
//! ```
//!
pub mod csv;
pub mod error;
pub mod json;

pub use csv::*;
pub use error::*;
pub use json::*;

pub mod consts {
    pub const CSV_SEPARATOR: &str = ",";
    pub const JSON_SEPARATOR: &str = ", ";
    pub const INITIAL_CAPACITY: usize = 2048;
}
