//! Header directives and table allocation.
//!
//! The header is the run of `#` lines at the top of a definition. Each line
//! may carry one directive:
//!
//! ```text
//! # Size: 94
//! # Order: 1
//! # Shift: 32
//! # Parent: ascii
//! ```
//!
//! A `Parent` is merged the moment it is read, into the same charset, so the
//! parent's header and body land before anything that follows the directive.
//! Once the header ends, the first definition in a chain that sees a complete
//! shape allocates the table; every other definition reuses it.

use std::{borrow::Cow, io::BufRead};

use bstr::ByteSlice;
use log::{debug, trace};

use crate::{
    charset::{Charset, Shape},
    cursor::Cursor,
    error::{CharsetError, SemanticError},
    grammar::{self, HEADER_LINE_MAX},
    loader::CharsetLoader,
    source::DefinitionSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive<'a> {
    Size(u32),
    Order(u32),
    Shift(u32),
    Parent(Cow<'a, str>),
    /// Free text, a comment or a directive this version does not know.
    Other,
}

impl<'a> Directive<'a> {
    pub(crate) fn parse(line: &'a [u8]) -> Self {
        let line = line.trim_start();

        if let Some(value) = line.strip_prefix(b"Size:").and_then(decimal) {
            Self::Size(value)
        } else if let Some(value) = line.strip_prefix(b"Order:").and_then(decimal) {
            Self::Order(value)
        } else if let Some(value) = line.strip_prefix(b"Shift:").and_then(decimal) {
            Self::Shift(value)
        } else if let Some(name) = line.strip_prefix(b"Parent:").map(|name| name.trim()) {
            if name.is_empty() {
                Self::Other
            } else {
                Self::Parent(name.to_str_lossy())
            }
        } else {
            Self::Other
        }
    }
}

/// Leading decimal digits after optional whitespace; anything after them is
/// ignored. Saturates instead of wrapping.
fn decimal(text: &[u8]) -> Option<u32> {
    let text = text.trim_start();
    let digits = text.iter().take_while(|byte| byte.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    Some(text[..digits].iter().fold(0u32, |value, &digit| {
        value
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    }))
}

fn define(slot: &mut Option<u32>, value: u32, taken: SemanticError) -> Result<(), CharsetError> {
    if slot.is_some() {
        return Err(taken.into());
    }
    *slot = Some(value);
    Ok(())
}

/// Consumes the header of one definition, merging parents as they appear,
/// and makes sure the charset has a table afterwards.
pub(crate) fn read_header<S, R>(
    loader: &CharsetLoader<S>,
    charset: &mut Charset,
    cursor: &mut Cursor<R>,
) -> Result<(), CharsetError>
where
    S: DefinitionSource,
    R: BufRead,
{
    let mut line = Vec::with_capacity(HEADER_LINE_MAX);

    while cursor.peek()? == Some(b'#') {
        cursor.next_byte()?;
        grammar::header_line(cursor, &mut line)?;

        match Directive::parse(&line) {
            Directive::Size(size) => {
                define(&mut charset.size, size, SemanticError::SizeAlreadyDefined)?;
            }
            Directive::Order(order) => {
                define(&mut charset.order, order, SemanticError::OrderAlreadyDefined)?;
            }
            Directive::Shift(shift) => {
                define(&mut charset.shift, shift, SemanticError::ShiftAlreadyDefined)?;
            }
            Directive::Parent(name) => loader.merge(charset, &name)?,
            Directive::Other => trace!("ignoring header line {:?}", line.as_bstr()),
        }
    }

    if charset.table.is_none() {
        allocate(charset)?;
    }

    Ok(())
}

/// Validates the shape and allocates a zeroed table for it. The shift is
/// pinned at allocation so the shape cannot change under the table.
fn allocate(charset: &mut Charset) -> Result<(), CharsetError> {
    let shape = Shape::resolve(charset.size, charset.order, charset.shift)?;
    let len = shape.len();

    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| CharsetError::OutOfMemory)?;
    table.resize(len, 0);

    charset.shift.get_or_insert(0);
    charset.table = Some(table);

    debug!(
        "allocated table of {len} entries (size {}, order {}, shift {})",
        shape.size, shape.order, shape.shift
    );
    Ok(())
}
