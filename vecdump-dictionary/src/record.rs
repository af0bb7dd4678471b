///
/// One entry of a sharded dictionary. Loaders keep `term` and `index`;
/// `doc_freq` is carried for completeness.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub term: String,
    pub index: u32,
    pub doc_freq: u32,
}

impl DictionaryRecord {
    pub fn new<S: Into<String>>(term: S, index: u32, doc_freq: u32) -> Self {
        Self {
            term: term.into(),
            index,
            doc_freq,
        }
    }
}
