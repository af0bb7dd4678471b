pub mod dictionary;
pub mod vector;

// re-export for cleaner imports
pub use self::dictionary::TermDictionary;
pub use self::vector::{Element, SparseVector};
