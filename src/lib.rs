#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod authority;
mod character_sets;
mod error;
mod host;
mod path;
mod percent;
mod query;
mod suffix;
mod tokenizer;
mod uri;

// Public API
pub use error::UriError;
pub use host::Host;
pub use path::UriPath;
pub use query::QueryParams;
pub use suffix::{PslList, SuffixList};
pub use uri::Uri;

pub type Result<T> = core::result::Result<T, UriError>;
