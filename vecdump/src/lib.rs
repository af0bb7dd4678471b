#[cfg(feature = "core")]
#[doc(inline)]
pub use vecdump_core as core;

#[cfg(feature = "dictionary")]
#[doc(inline)]
pub use vecdump_dictionary as dictionary;

#[cfg(feature = "format")]
#[doc(inline)]
pub use vecdump_format as format;
