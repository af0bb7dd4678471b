use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Element index {index} is out of range for a vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Error parsing vector on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dictionary file is empty, expected the entry count on the first line")]
    MissingHeader,

    #[error("First line of dictionary file is not a valid entry count: {0}")]
    InvalidHeader(String),

    #[error("Invalid term index on line {line}: {value}")]
    InvalidIndex { line: usize, value: String },

    #[error("Term index {index} is out of bounds for a dictionary of {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Dictionary of {len} entries exceeds the limit of {max}")]
    TooManyEntries { len: usize, max: usize },

    #[error("Term {term:?} at index {index} contains a tab, a newline or a leading '#' and cannot be written to a flat dictionary")]
    InvalidTerm { index: usize, term: String },

    #[error("No dictionary shards match pattern: {0}")]
    NoShards(String),

    #[error("Invalid shard glob pattern: {0}")]
    Glob(String),

    #[error("Invalid dictionary shard {path}: {reason}")]
    InvalidShard { path: String, reason: String },

    #[error("Unsupported dictionary shard version: {0}")]
    UnsupportedShardVersion(u8),
}
