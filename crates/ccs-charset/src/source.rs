//! Where named definitions come from.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    sync::Arc,
};

/// Directory searched for definitions unless configured otherwise.
pub const DEFAULT_ROOT: &str = "charset";

/// Resolves a definition name to a readable byte stream.
pub trait DefinitionSource {
    /// Reader over one definition.
    type Reader: BufRead;

    /// Opens the definition `name`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying storage reports, typically
    /// [`io::ErrorKind::NotFound`].
    fn open(&self, name: &str) -> io::Result<Self::Reader>;
}

impl<S: DefinitionSource + ?Sized> DefinitionSource for &S {
    type Reader = S::Reader;

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        (**self).open(name)
    }
}

/// Definitions stored as files named after the charset, under one root
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    root: PathBuf,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Directory {
    /// A source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory definitions are looked up in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the definition `name`.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DefinitionSource for Directory {
    type Reader = BufReader<File>;

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        File::open(self.path_of(name)).map(BufReader::new)
    }
}

/// Definitions held in memory, keyed by name.
///
/// ```rust
/// use ccs_charset::{DefinitionSource, MemorySource};
///
/// let source = MemorySource::new().with("empty", "");
/// assert!(source.open("empty").is_ok());
/// assert!(source.open("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    definitions: BTreeMap<String, Arc<[u8]>>,
}

impl MemorySource {
    /// An empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the definition `name`.
    pub fn insert(&mut self, name: impl Into<String>, text: impl AsRef<[u8]>) {
        self.definitions.insert(name.into(), Arc::from(text.as_ref()));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, text: impl AsRef<[u8]>) -> Self {
        self.insert(name, text);
        self
    }
}

impl DefinitionSource for MemorySource {
    type Reader = io::Cursor<Arc<[u8]>>;

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        self.definitions
            .get(name)
            .map(|text| io::Cursor::new(Arc::clone(text)))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}
