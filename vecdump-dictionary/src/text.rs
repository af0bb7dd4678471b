//!
//! Flat text dictionaries.
//!
//! ```text
//! <N>
//! <term>\t<docFreq>\t<index>
//! ...
//! ```
//!
use std::io::{BufRead, Write};
use std::path::Path;

use log::info;

use vecdump_core::DictionaryError;
use vecdump_core::consts::{COMMENT_PREFIX, FIELD_SEPARATOR};
use vecdump_core::models::TermDictionary;
use vecdump_core::utils::{get_dynamic_reader, get_dynamic_writer};

///
/// Read a flat dictionary file (plain or gzip'd).
///
/// # Arguments:
/// - `path`: path to the dictionary file
///
/// # Returns:
/// - the dictionary, sized by the entry count on the first line
///
pub fn load_term_dictionary<P: AsRef<Path>>(path: P) -> Result<TermDictionary, DictionaryError> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let dictionary = load_term_dictionary_from_reader(reader)?;

    info!(
        "Loaded {} of {} dictionary entries from {}",
        dictionary.assigned(),
        dictionary.len(),
        path.display()
    );

    Ok(dictionary)
}

///
/// Read a flat dictionary from any buffered reader.
///
/// The first line must be the entry count. Comment lines and rows with fewer than
/// three tab separated fields are skipped. A later row for the same index replaces
/// an earlier one.
///
pub fn load_term_dictionary_from_reader<R: BufRead>(
    reader: R,
) -> Result<TermDictionary, DictionaryError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(DictionaryError::MissingHeader)??;
    let num_entries: usize = header
        .trim()
        .parse()
        .map_err(|_| DictionaryError::InvalidHeader(header.clone()))?;

    let mut dictionary = TermDictionary::with_len(num_entries)
        .map_err(|_| DictionaryError::InvalidHeader(header.clone()))?;

    // header is line 1
    for (line_number, line) in (2..).zip(lines) {
        let line = line?;
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let mut tokens: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        // trailing empty fields don't count towards the three required ones
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
        if tokens.len() < 3 {
            continue;
        }

        // tokens[1] is the doc freq
        let index: usize = tokens[2]
            .parse()
            .map_err(|_| DictionaryError::InvalidIndex {
                line: line_number,
                value: tokens[2].to_string(),
            })?;

        dictionary.assign(index, tokens[0])?;
    }

    Ok(dictionary)
}

///
/// Write a dictionary in the flat text format, gzip'd if the path ends in `.gz`.
///
/// Unset slots are not written; the doc frequency column is written as `0`.
/// A term that would not load back unchanged fails with `DictionaryError::InvalidTerm`
/// before anything is written.
///
pub fn write_term_dictionary<P: AsRef<Path>>(
    dictionary: &TermDictionary,
    path: P,
) -> Result<(), DictionaryError> {
    if let Some((index, term)) = dictionary.iter().find(|(_, term)| !is_writable_term(term)) {
        return Err(DictionaryError::InvalidTerm {
            index,
            term: term.to_string(),
        });
    }

    let mut writer = get_dynamic_writer(path.as_ref())?;

    writeln!(writer, "{}", dictionary.len())?;
    for (index, term) in dictionary.iter() {
        writeln!(writer, "{}{}0{}{}", term, FIELD_SEPARATOR, FIELD_SEPARATOR, index)?;
    }
    writer.flush()?;

    Ok(())
}

fn is_writable_term(term: &str) -> bool {
    !term.starts_with(COMMENT_PREFIX) && !term.contains([FIELD_SEPARATOR, '\n'])
}
