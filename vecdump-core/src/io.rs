//!
//! Line-oriented text input for sparse vectors.
//!
//! One vector per line, `[<name>\t]<size>\t<index>:<value>[,<index>:<value>...]`.
//! Empty lines and lines starting with `#` are skipped. An empty element list
//! is an all-zero vector.
//!
use std::io::BufRead;
use std::path::Path;

use crate::consts::{COMMENT_PREFIX, FIELD_SEPARATOR};
use crate::errors::VectorError;
use crate::models::SparseVector;
use crate::utils::get_dynamic_reader;

///
/// Parse a single line of the sparse vector text format.
///
/// # Arguments:
/// - `line`: the line, without its line break
///
/// # Returns:
/// - the vector, or a human readable reason the line is malformed
///
pub fn parse_sparse_vector(line: &str) -> Result<SparseVector, String> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    let (name, size, elements) = match parts.as_slice() {
        [size, elements] => (None, *size, *elements),
        [name, size, elements] => (Some(*name), *size, *elements),
        _ => {
            return Err(format!(
                "expected 2 or 3 tab separated fields, found {}",
                parts.len()
            ));
        }
    };

    let size: usize = size
        .trim()
        .parse()
        .map_err(|_| format!("invalid vector size: {}", size))?;

    let mut pairs = Vec::new();
    for pair in elements.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (index, value) = pair
            .split_once(':')
            .ok_or_else(|| format!("expected <index>:<value>, found {}", pair))?;
        let index: usize = index
            .parse()
            .map_err(|_| format!("invalid element index: {}", index))?;
        let value: f64 = value
            .parse()
            .map_err(|_| format!("invalid element value: {}", value))?;
        pairs.push((index, value));
    }

    let vector = SparseVector::new(size, pairs).map_err(|err| err.to_string())?;

    Ok(match name {
        Some(name) => vector.with_name(name),
        None => vector,
    })
}

///
/// Read every vector from a reader in the sparse vector text format.
///
pub fn read_sparse_vectors_from_reader<R: BufRead>(
    reader: R,
) -> Result<Vec<SparseVector>, VectorError> {
    let mut vectors = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let vector = parse_sparse_vector(&line)
            .map_err(|reason| VectorError::Parse { line: i + 1, reason })?;
        vectors.push(vector);
    }

    Ok(vectors)
}

///
/// Read every vector from a plain or gzip'd file in the sparse vector text format.
///
pub fn read_sparse_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<SparseVector>, VectorError> {
    let reader = get_dynamic_reader(path.as_ref())?;
    read_sparse_vectors_from_reader(reader)
}
