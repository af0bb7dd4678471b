use fxhash::FxHashMap as HashMap;
use log::info;

use vecdump_core::DictionaryError;
use vecdump_core::models::TermDictionary;

use crate::record::DictionaryRecord;
use crate::shard::{ShardGlob, ShardRecords};

///
/// Build a dictionary from a sequence of `(term, index)` records.
///
/// A term seen more than once keeps the index of its last record. The dictionary is
/// sized to hold the largest retained index, so gaps in the index space become unset
/// slots instead of out-of-bounds writes. If two terms share an index, the one whose
/// last record came later wins. A retained index past
/// [`MAX_DICTIONARY_LEN`](vecdump_core::consts::MAX_DICTIONARY_LEN) fails with
/// `DictionaryError::TooManyEntries`.
///
/// # Arguments:
/// - `records`: any finite record source, consumed once
///
pub fn load_term_dictionary_from_records<I>(records: I) -> Result<TermDictionary, DictionaryError>
where
    I: IntoIterator<Item = Result<DictionaryRecord, DictionaryError>>,
{
    // term -> (index, sequence number of the last record for that term)
    let mut term_to_index: HashMap<String, (usize, usize)> = HashMap::default();

    for (seq, record) in records.into_iter().enumerate() {
        let record = record?;
        term_to_index.insert(record.term, (record.index as usize, seq));
    }

    let len = term_to_index
        .values()
        .map(|(index, _)| index + 1)
        .max()
        .map_or(0, |max_len| max_len.max(term_to_index.len()));

    let mut entries: Vec<(String, usize, usize)> = term_to_index
        .into_iter()
        .map(|(term, (index, seq))| (term, index, seq))
        .collect();
    entries.sort_by_key(|(_, _, seq)| *seq);

    let mut dictionary = TermDictionary::with_len(len)?;
    for (term, index, _) in entries {
        dictionary.assign(index, term)?;
    }

    Ok(dictionary)
}

///
/// Load a dictionary from every shard matching a glob pattern,
/// e.g. `dictionary/dictionary.file-*`.
///
pub fn load_term_dictionary_from_shards(pattern: &str) -> Result<TermDictionary, DictionaryError> {
    let shards = ShardGlob::new(pattern)?;
    let num_shards = shards.len();

    let dictionary = load_term_dictionary_from_records(ShardRecords::new(shards))?;

    info!(
        "Loaded {} dictionary entries from {} shard(s) matching {}",
        dictionary.assigned(),
        num_shards,
        pattern
    );

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::shard::write_sharded_dictionary;

    fn records(pairs: &[(&str, u32)]) -> Vec<Result<DictionaryRecord, DictionaryError>> {
        pairs
            .iter()
            .map(|(term, index)| Ok(DictionaryRecord::new(*term, *index, 1)))
            .collect()
    }

    #[rstest]
    fn test_contiguous_records() {
        let dictionary =
            load_term_dictionary_from_records(records(&[("banana", 1), ("apple", 0)])).unwrap();
        assert_eq!(dictionary, TermDictionary::from(vec!["apple", "banana"]));
    }

    #[rstest]
    fn test_duplicate_term_last_writer_wins() {
        let dictionary =
            load_term_dictionary_from_records(records(&[("apple", 5), ("apple", 0)])).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get(0), Some("apple"));
    }

    #[rstest]
    fn test_shared_index_later_term_wins() {
        let dictionary =
            load_term_dictionary_from_records(records(&[("apple", 0), ("apricot", 0)])).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get(0), Some("apricot"));
        assert_eq!(dictionary.get(1), None);
    }

    #[rstest]
    fn test_gappy_indices_leave_unset_slots() {
        let dictionary =
            load_term_dictionary_from_records(records(&[("apple", 0), ("cherry", 4)])).unwrap();
        assert_eq!(dictionary.len(), 5);
        assert_eq!(dictionary.assigned(), 2);
        assert_eq!(dictionary.get(4), Some("cherry"));
    }

    #[rstest]
    fn test_index_past_limit_is_rejected() {
        let result = load_term_dictionary_from_records(records(&[("apple", 0), ("x", u32::MAX)]));
        assert!(matches!(
            result,
            Err(DictionaryError::TooManyEntries { .. })
        ));
    }

    #[rstest]
    fn test_highest_allowed_index() {
        let dictionary =
            load_term_dictionary_from_records(records(&[("x", i32::MAX as u32 - 1)])).unwrap();
        assert_eq!(dictionary.len(), i32::MAX as usize);
        assert_eq!(dictionary.assigned(), 1);
    }

    #[rstest]
    fn test_no_records() {
        let dictionary = load_term_dictionary_from_records(records(&[])).unwrap();
        assert!(dictionary.is_empty());
    }

    #[rstest]
    fn test_record_error_is_propagated() {
        let mut input = records(&[("apple", 0)]);
        input.push(Err(DictionaryError::NoShards("x".to_string())));
        assert!(load_term_dictionary_from_records(input).is_err());
    }

    #[rstest]
    fn test_load_from_shards() {
        let tempdir = tempfile::tempdir().unwrap();
        let dictionary = TermDictionary::from(vec!["apple", "banana", "cherry"]);
        write_sharded_dictionary(&dictionary, tempdir.path(), "dictionary.file", 2).unwrap();

        let pattern = format!("{}/dictionary.file-*", tempdir.path().display());
        let loaded = load_term_dictionary_from_shards(&pattern).unwrap();

        assert_eq!(loaded, dictionary);
    }
}
