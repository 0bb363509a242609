use std::path::PathBuf;

use crate::{charset::DEFAULT_DEPTH, source::DEFAULT_ROOT};

/// Configuration of a [`CharsetLoader`](crate::CharsetLoader).
///
/// # Examples
///
/// ```rust
/// use ccs_charset::{CharsetLoader, LoaderOptions};
///
/// let loader = CharsetLoader::new(LoaderOptions {
///     root: "/usr/share/ccs/charset".into(),
///     ..Default::default()
/// });
/// assert_eq!(loader.options().max_depth, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoaderOptions {
    /// Directory holding the definition files. A definition named `X` is read
    /// from `root/X`.
    ///
    /// # Default
    ///
    /// `charset`, relative to the working directory.
    pub root: PathBuf,

    /// Inheritance hops a single load may take, counting the requested
    /// definition itself. A chain of `Parent` references deeper than this,
    /// including any cycle, fails with "inheritance depth exceeded".
    ///
    /// # Default
    ///
    /// `10`
    pub max_depth: u8,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            max_depth: DEFAULT_DEPTH,
        }
    }
}
