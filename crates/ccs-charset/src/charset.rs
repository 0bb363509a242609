use crate::{
    error::{CharsetError, SemanticError},
    loader::CharsetLoader,
    options::LoaderOptions,
};

/// Inheritance hops a fresh charset may take.
pub const DEFAULT_DEPTH: u8 = 10;

/// A coded character set: its code shape and the table mapping device codes to
/// Unicode values.
///
/// `size`, `order` and `shift` start out unset and may each be defined once
/// across a whole inheritance chain. The table is allocated by whichever
/// definition in the chain first completes the shape, and every later
/// definition writes into it.
///
/// Dropping the value releases the table; dropping `None::<Charset>` is the
/// null-handle no-op.
///
/// # Examples
///
/// ```rust
/// use ccs_charset::{CharsetLoader, LoaderOptions, MemorySource};
///
/// let source = MemorySource::new().with(
///     "demo",
///     "# Size: 94\n# Order: 1\n# Shift: 32\n41 0041\n",
/// );
/// let loader = CharsetLoader::with_source(source, LoaderOptions::default());
/// let charset = loader.load(Some("demo")).unwrap();
///
/// assert_eq!(charset.lookup(b"A"), Some(0x41));
/// assert_eq!(charset.lookup_char(b"A"), Some('A'));
/// assert_eq!(charset.lookup(b"B"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Charset {
    pub(crate) size: Option<u32>,
    pub(crate) order: Option<u32>,
    pub(crate) shift: Option<u32>,
    /// Remaining inheritance budget of the merge in progress.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) depth: u8,
    pub(crate) table: Option<Vec<u32>>,
}

impl Default for Charset {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl Charset {
    /// An empty charset: no parameters, no table.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            size: None,
            order: None,
            shift: None,
            depth,
            table: None,
        }
    }

    /// Builds a charset from the definition `name` in the `charset`
    /// directory. `None` yields an empty charset to be filled by
    /// [`merge`](Self::merge).
    ///
    /// # Errors
    ///
    /// Returns the first failure of the load; no partial charset escapes.
    pub fn load(name: Option<&str>) -> Result<Self, CharsetError> {
        CharsetLoader::new(LoaderOptions::default()).load(name)
    }

    /// Layers the definition `name` from the `charset` directory on top of
    /// this charset.
    ///
    /// # Errors
    ///
    /// On failure the table is released; parameters already set stay set.
    pub fn merge(&mut self, name: &str) -> Result<(), CharsetError> {
        CharsetLoader::new(LoaderOptions::default()).merge(self, name)
    }

    /// Positions per byte, once defined.
    #[must_use]
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// Bytes per character, once defined.
    #[must_use]
    pub fn order(&self) -> Option<u32> {
        self.order
    }

    /// Bias subtracted from raw bytes, once defined.
    #[must_use]
    pub fn shift(&self) -> Option<u32> {
        self.shift
    }

    /// The dense table, indexed by mixed-radix code offset.
    #[must_use]
    pub fn table(&self) -> Option<&[u32]> {
        self.table.as_deref()
    }

    /// Whether a table is present.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// The resolved shape backing the table.
    pub(crate) fn shape(&self) -> Option<Shape> {
        self.table.as_ref()?;
        Shape::resolve(self.size, self.order, self.shift).ok()
    }

    /// Maps the device code `code` (exactly `order` raw bytes) to its table
    /// value. Unmapped positions hold zero and yield `None`.
    #[must_use]
    pub fn lookup(&self, code: &[u8]) -> Option<u32> {
        let shape = self.shape()?;
        let offset = shape.offset(code)?;
        self.table.as_deref()?.get(offset).copied().filter(|&value| value != 0)
    }

    /// Like [`lookup`](Self::lookup), for values that are Unicode scalars.
    #[must_use]
    pub fn lookup_char(&self, code: &[u8]) -> Option<char> {
        self.lookup(code).and_then(char::from_u32)
    }
}

/// Validated code shape of a charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape {
    pub(crate) size: usize,
    pub(crate) order: usize,
    pub(crate) shift: usize,
}

impl Shape {
    /// Checks `size ∈ [1, 256]`, `order ∈ {1, 2}` and `shift + size ≤ 256`.
    /// An unset shift counts as zero.
    pub(crate) fn resolve(
        size: Option<u32>,
        order: Option<u32>,
        shift: Option<u32>,
    ) -> Result<Self, SemanticError> {
        let (Some(size), Some(order)) = (size, order) else {
            return Err(SemanticError::InvalidParameters);
        };
        let shift = shift.unwrap_or(0);

        if !(1..=256).contains(&size)
            || !(1..=2).contains(&order)
            || u64::from(shift) + u64::from(size) > 256
        {
            return Err(SemanticError::InvalidParameters);
        }

        Ok(Self {
            size: size as usize,
            order: order as usize,
            shift: shift as usize,
        })
    }

    /// Number of table entries, `size^order`.
    pub(crate) fn len(self) -> usize {
        self.size.pow(self.order as u32)
    }

    /// Zero-based position of one raw byte, if it lies in
    /// `[shift, shift + size)`.
    #[inline]
    pub(crate) fn position(self, byte: u8) -> Option<usize> {
        usize::from(byte)
            .checked_sub(self.shift)
            .filter(|&position| position < self.size)
    }

    /// Table offset of a whole code, most significant byte first.
    pub(crate) fn offset(self, code: &[u8]) -> Option<usize> {
        if code.len() != self.order {
            return None;
        }
        code.iter().try_fold(0, |offset, &byte| {
            Some(offset * self.size + self.position(byte)?)
        })
    }
}
