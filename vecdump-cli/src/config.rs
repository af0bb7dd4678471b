use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vecdump_dictionary::DictionaryType;

///
/// Defaults for `vecdump dump`, read from a TOML file. Command line flags take
/// precedence over anything set here.
///
/// ```toml
/// dictionary = "dictionary.txt"
/// dictionary_type = "text"
/// csv = false
/// names_as_comments = true
/// output = "vectors.txt"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DumpConfig {
    pub dictionary: Option<String>,
    pub dictionary_type: Option<DictionaryType>,
    pub csv: Option<bool>,
    pub names_as_comments: Option<bool>,
    pub output: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl TryFrom<&Path> for DumpConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
