//! Loading charsets by name and resolving `Parent` chains.
//!
//! Every definition is parsed in two phases over one cursor: the header
//! (directives, possibly merging parents recursively) and the body (mapping
//! lines). Both phases write into the same [`Charset`], which carries the
//! remaining inheritance budget. A merge spends one unit of the budget for
//! its own duration and gives it back when done, so only a real chain of
//! `Parent` references uses it up.
//!
//! Any failure releases the table before it is reported. Parameters read so
//! far stay defined.

use std::io::BufRead;

use log::{debug, warn};

use crate::{
    body,
    charset::Charset,
    cursor::Cursor,
    designation::Designation,
    error::{CharsetError, SemanticError},
    header,
    options::LoaderOptions,
    source::{DefinitionSource, Directory},
};

/// Builds [`Charset`]s from named definitions.
#[derive(Debug, Clone)]
pub struct CharsetLoader<S = Directory> {
    source: S,
    options: LoaderOptions,
}

impl Default for CharsetLoader<Directory> {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl CharsetLoader<Directory> {
    /// A loader reading definition files from `options.root`.
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        let source = Directory::new(options.root.clone());
        Self { source, options }
    }
}

impl<S: DefinitionSource> CharsetLoader<S> {
    /// A loader reading definitions from `source`. `options.root` is not
    /// consulted.
    pub fn with_source(source: S, options: LoaderOptions) -> Self {
        Self { source, options }
    }

    /// The configuration in use.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// The definition source in use.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Creates a charset with the configured inheritance budget and, if
    /// `name` is given, merges that definition into it.
    ///
    /// # Errors
    ///
    /// The first failure of the merge. The half-built charset is dropped.
    pub fn load(&self, name: Option<&str>) -> Result<Charset, CharsetError> {
        let mut charset = Charset::with_depth(self.options.max_depth);
        if let Some(name) = name {
            self.merge(&mut charset, name)?;
        }
        Ok(charset)
    }

    /// Merges the definition `name` into `charset`.
    ///
    /// # Errors
    ///
    /// - "inheritance depth exceeded" when the budget is spent, before the
    ///   source is consulted;
    /// - the source's error when `name` cannot be opened;
    /// - any syntax or semantic error of the definition or its parents.
    ///
    /// The table of `charset` is released on every failure.
    pub fn merge(&self, charset: &mut Charset, name: &str) -> Result<(), CharsetError> {
        let result = self.merge_inner(charset, name);
        if result.is_err() {
            charset.table = None;
        }
        result
    }

    fn merge_inner(&self, charset: &mut Charset, name: &str) -> Result<(), CharsetError> {
        if charset.depth == 0 {
            warn!("{name}: inheritance depth exceeded");
            return Err(CharsetError::DepthExceeded);
        }

        let reader = self.source.open(name).inspect_err(|err| {
            warn!("{name}: {err}");
        })?;
        let mut cursor = Cursor::new(reader);

        debug!("merging {name} (depth budget {})", charset.depth);
        let depth = charset.depth;
        charset.depth -= 1;
        let result = self.parse(charset, &mut cursor);
        charset.depth = depth;

        match &result {
            Ok(written) => debug!("merged {name}: {written} entries"),
            Err(err) => warn!("{name}:{}:{}: {err}", cursor.line(), cursor.column()),
        }
        result?;
        Ok(())
    }

    fn parse<R: BufRead>(
        &self,
        charset: &mut Charset,
        cursor: &mut Cursor<R>,
    ) -> Result<usize, CharsetError> {
        header::read_header(self, charset, cursor)?;

        let shape = charset.shape().ok_or(SemanticError::InvalidParameters)?;
        let table = charset
            .table
            .as_deref_mut()
            .ok_or(SemanticError::InvalidParameters)?;
        body::fill(shape, table, cursor)
    }

    /// Finds the charset selected by an escape-sequence designation.
    ///
    /// Mapping designations to definitions is the job of the charset pool;
    /// until it provides that policy nothing is ever found.
    pub fn locate(&self, designation: &Designation) -> Option<Charset> {
        debug!(
            "no charset registered for designation {:#x} {:?}",
            designation.code, designation.arg
        );
        None
    }
}
