use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vecdump_core::DictionaryError;
use vecdump_core::models::TermDictionary;

use crate::sharded::load_term_dictionary_from_shards;
use crate::text::load_term_dictionary;

///
/// The on-disk form of a dictionary.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DictionaryType {
    /// A flat text file, the source is a path
    #[default]
    Text,
    /// Binary shards, the source is a glob pattern
    Sharded,
}

impl FromStr for DictionaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(DictionaryType::Text),
            "sharded" | "shards" => Ok(DictionaryType::Sharded),
            _ => Err(format!("Invalid dictionary type: {}", s)),
        }
    }
}

impl Display for DictionaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryType::Text => write!(f, "text"),
            DictionaryType::Sharded => write!(f, "sharded"),
        }
    }
}

///
/// Load a dictionary of the given type.
///
/// # Arguments:
/// - `source`: a file path for `Text`, a glob pattern for `Sharded`
/// - `dictionary_type`: how to interpret `source`
///
pub fn load_dictionary(
    source: &str,
    dictionary_type: DictionaryType,
) -> Result<TermDictionary, DictionaryError> {
    match dictionary_type {
        DictionaryType::Text => load_term_dictionary(source),
        DictionaryType::Sharded => load_term_dictionary_from_shards(source),
    }
}
