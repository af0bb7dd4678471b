use std::collections::BTreeMap;

use crate::consts::MAX_DICTIONARY_LEN;
use crate::errors::DictionaryError;

///
/// Positional term dictionary: slot `i` holds the term assigned index `i`.
///
/// Slots that were never assigned are unset. Callers decide how to treat them.
/// Only assigned slots take memory, so a large declared length costs nothing up front.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermDictionary {
    len: usize,
    terms: BTreeMap<usize, String>,
}

impl TermDictionary {
    ///
    /// Create a dictionary of `len` unset slots.
    ///
    /// # Returns:
    /// - `DictionaryError::TooManyEntries` if `len` exceeds [`MAX_DICTIONARY_LEN`]
    ///
    pub fn with_len(len: usize) -> Result<Self, DictionaryError> {
        if len > MAX_DICTIONARY_LEN {
            return Err(DictionaryError::TooManyEntries {
                len,
                max: MAX_DICTIONARY_LEN,
            });
        }

        Ok(Self {
            len,
            terms: BTreeMap::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    ///
    /// Get the term for `index`, or `None` if the index is out of bounds or the slot is unset.
    ///
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(&index).map(String::as_str)
    }

    ///
    /// Assign `term` to slot `index`, replacing whatever was there.
    ///
    /// # Returns:
    /// - `DictionaryError::IndexOutOfBounds` if `index >= len`
    ///
    pub fn assign<S: Into<String>>(&mut self, index: usize, term: S) -> Result<(), DictionaryError> {
        if index >= self.len {
            return Err(DictionaryError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.terms.insert(index, term.into());
        Ok(())
    }

    ///
    /// Number of slots holding a term.
    ///
    pub fn assigned(&self) -> usize {
        self.terms.len()
    }

    ///
    /// Iterate `(index, term)` over the assigned slots in index order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.terms.iter().map(|(i, t)| (*i, t.as_str()))
    }
}

impl From<Vec<String>> for TermDictionary {
    fn from(terms: Vec<String>) -> Self {
        Self {
            len: terms.len(),
            terms: terms.into_iter().enumerate().collect(),
        }
    }
}

impl From<Vec<&str>> for TermDictionary {
    fn from(terms: Vec<&str>) -> Self {
        Self {
            len: terms.len(),
            terms: terms
                .into_iter()
                .enumerate()
                .map(|(i, t)| (i, t.to_owned()))
                .collect(),
        }
    }
}

impl From<Vec<Option<String>>> for TermDictionary {
    fn from(terms: Vec<Option<String>>) -> Self {
        Self {
            len: terms.len(),
            terms: terms
                .into_iter()
                .enumerate()
                .filter_map(|(i, t)| t.map(|t| (i, t)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_assign_and_get() {
        let mut dict = TermDictionary::with_len(3).unwrap();
        dict.assign(1, "banana").unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.assigned(), 1);
        assert_eq!(dict.get(1), Some("banana"));
        assert_eq!(dict.get(0), None);
        assert_eq!(dict.get(3), None);
    }

    #[rstest]
    fn test_assign_last_writer_wins() {
        let mut dict = TermDictionary::with_len(1).unwrap();
        dict.assign(0, "first").unwrap();
        dict.assign(0, "second").unwrap();
        assert_eq!(dict.get(0), Some("second"));
    }

    #[rstest]
    fn test_assign_out_of_bounds() {
        let mut dict = TermDictionary::with_len(2).unwrap();
        let result = dict.assign(2, "cherry");
        assert!(matches!(
            result,
            Err(DictionaryError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[rstest]
    fn test_iter_skips_unset_slots() {
        let dict = TermDictionary::from(vec![Some("a".to_string()), None, Some("c".to_string())]);
        let entries: Vec<(usize, &str)> = dict.iter().collect();
        assert_eq!(entries, vec![(0, "a"), (2, "c")]);
    }

    #[rstest]
    fn test_large_declared_len_is_cheap() {
        let mut dict = TermDictionary::with_len(MAX_DICTIONARY_LEN).unwrap();
        dict.assign(MAX_DICTIONARY_LEN - 1, "last").unwrap();

        assert_eq!(dict.len(), MAX_DICTIONARY_LEN);
        assert_eq!(dict.assigned(), 1);
        assert_eq!(dict.get(MAX_DICTIONARY_LEN - 1), Some("last"));
    }

    #[rstest]
    fn test_len_past_limit_is_rejected() {
        let result = TermDictionary::with_len(MAX_DICTIONARY_LEN + 1);
        assert!(matches!(
            result,
            Err(DictionaryError::TooManyEntries { .. })
        ));
    }

    #[rstest]
    fn test_equality_ignores_construction() {
        let mut assigned = TermDictionary::with_len(2).unwrap();
        assigned.assign(1, "b").unwrap();
        assert_eq!(assigned, TermDictionary::from(vec![None, Some("b".to_string())]));
    }
}
