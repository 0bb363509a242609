//! Loader for ECMA-35 coded character set definitions.
//!
//! A definition is a small text file describing one coded character set: its
//! shape (`Size` positions per byte, `Order` bytes per character, `Shift`
//! subtracted from raw bytes) and a list of mappings from device codes to
//! Unicode values. Definitions may name a `Parent` whose table and parameters
//! they extend.
//!
//! ```text
//! # Size: 94
//! # Order: 1
//! # Shift: 32
//! 21 0021  # EXCLAMATION MARK
//! 41 0041  # LATIN CAPITAL LETTER A
//! ```
//!
//! Loading produces a [`Charset`] whose dense table answers lookups in O(1).
//!
//! ```rust
//! use ccs_charset::{CharsetLoader, LoaderOptions, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with("base", "# Size: 94\n# Order: 1\n# Shift: 32\n41 0041\n")
//!     .with("child", "# Parent: base\n41 0391  # GREEK CAPITAL LETTER ALPHA\n");
//! let loader = CharsetLoader::with_source(source, LoaderOptions::default());
//!
//! let charset = loader.load(Some("child")).unwrap();
//! assert_eq!(charset.lookup_char(b"A"), Some('Α'));
//! ```

mod body;
mod charset;
mod cursor;
mod designation;
mod error;
mod grammar;
mod header;
mod loader;
mod options;
mod source;

#[cfg(test)]
mod tests;

pub use charset::{Charset, DEFAULT_DEPTH};
pub use designation::Designation;
pub use error::{CharsetError, ErrorKind, SemanticError, SyntaxError};
pub use loader::CharsetLoader;
pub use options::LoaderOptions;
pub use source::{DEFAULT_ROOT, DefinitionSource, Directory, MemorySource};
