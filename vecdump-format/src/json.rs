use std::fmt::Write;

use vecdump_core::models::{SparseVector, TermDictionary};

use crate::consts::{INITIAL_CAPACITY, JSON_SEPARATOR};
use crate::error::{FormatError, Result};

///
/// Render the nonzero cells of a vector as `elts: {<label>:<value>, ...}`.
///
/// A named vector is prefixed with `name: <name>\t`. Labels are the raw index, or
/// the dictionary term for that index when a dictionary is given.
///
/// # Returns:
/// - `FormatError::MissingTerm` if a dictionary is given but has no term for one
///   of the nonzero indices
///
pub fn vector_to_json_string(
    vector: &SparseVector,
    dictionary: Option<&TermDictionary>,
) -> Result<String> {
    let mut json = String::with_capacity(INITIAL_CAPACITY);

    if let Some(name) = vector.name() {
        write!(json, "name: {}\t", name)?;
    }

    json.push_str("elts: {");
    for (i, element) in vector.iter_nonzero().enumerate() {
        if i > 0 {
            json.push_str(JSON_SEPARATOR);
        }

        match dictionary {
            Some(dictionary) => {
                let term = dictionary
                    .get(element.index)
                    .ok_or(FormatError::MissingTerm {
                        index: element.index,
                        len: dictionary.len(),
                    })?;
                json.push_str(term);
            }
            None => write!(json, "{}", element.index)?,
        }

        write!(json, ":{:?}", element.value)?;
    }
    json.push('}');

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn fruits() -> TermDictionary {
        TermDictionary::from(vec!["apple", "banana", "cherry"])
    }

    #[rstest]
    fn test_nonzero_only() {
        let vector = SparseVector::new(8, vec![(0, 0.0), (1, 2.0), (5, 0.0), (7, 3.0)]).unwrap();
        let json = vector_to_json_string(&vector, None).unwrap();
        assert_eq!(json, "elts: {1:2.0, 7:3.0}");
    }

    #[rstest]
    fn test_dictionary_labels(fruits: TermDictionary) {
        let vector = SparseVector::new(3, vec![(1, 0.5)]).unwrap();
        assert_eq!(
            vector_to_json_string(&vector, Some(&fruits)).unwrap(),
            "elts: {banana:0.5}"
        );
        assert_eq!(vector_to_json_string(&vector, None).unwrap(), "elts: {1:0.5}");
    }

    #[rstest]
    fn test_name_prefix(fruits: TermDictionary) {
        let vector = SparseVector::new(3, vec![(0, 1.0), (2, 4.0)])
            .unwrap()
            .with_name("doc-7");
        assert_eq!(
            vector_to_json_string(&vector, Some(&fruits)).unwrap(),
            "name: doc-7\telts: {apple:1.0, cherry:4.0}"
        );
    }

    #[rstest]
    fn test_all_zero_vector() {
        let vector = SparseVector::new(4, vec![(2, 0.0)]).unwrap();
        assert_eq!(vector_to_json_string(&vector, None).unwrap(), "elts: {}");
    }

    #[rstest]
    fn test_short_dictionary_is_an_error(fruits: TermDictionary) {
        let vector = SparseVector::new(10, vec![(9, 1.0)]).unwrap();
        let result = vector_to_json_string(&vector, Some(&fruits));
        assert!(matches!(
            result,
            Err(FormatError::MissingTerm { index: 9, len: 3 })
        ));
    }

    #[rstest]
    fn test_unset_slot_is_an_error() {
        let dictionary = TermDictionary::from(vec![Some("apple".to_string()), None]);
        let vector = SparseVector::new(2, vec![(1, 1.0)]).unwrap();
        let result = vector_to_json_string(&vector, Some(&dictionary));
        assert!(matches!(
            result,
            Err(FormatError::MissingTerm { index: 1, len: 2 })
        ));
    }
}
