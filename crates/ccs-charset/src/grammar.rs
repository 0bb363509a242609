//! Lexical primitives of the definition format.
//!
//! Every primitive consumes exactly what it recognizes. On a mismatch the
//! offending byte is pushed back where the caller may want to look at it
//! again (hex digits, blank runs); elsewhere the error ends the load anyway.

use std::io::BufRead;

use crate::{
    cursor::Cursor,
    error::{CharsetError, SyntaxError},
};

/// Longest header line accepted, newline excluded.
pub(crate) const HEADER_LINE_MAX: usize = 76;

/// Longest run of hex digits forming one code value.
const SCALAR_DIGITS_MAX: usize = 8;

#[inline]
fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Reads a lowercase hex digit, or pushes the byte back and returns `None`.
fn try_hex_digit<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Option<u8>, CharsetError> {
    let digit = match cursor.next_byte()? {
        Some(byte @ b'0'..=b'9') => byte - b'0',
        Some(byte @ b'a'..=b'f') => byte - b'a' + 10,
        Some(byte) => {
            cursor.unread(byte);
            return Ok(None);
        }
        None => return Ok(None),
    };
    Ok(Some(digit))
}

pub(crate) fn hex_digit<R: BufRead>(cursor: &mut Cursor<R>) -> Result<u8, CharsetError> {
    try_hex_digit(cursor)?.ok_or_else(|| SyntaxError::HexDigitExpected.into())
}

pub(crate) fn octet<R: BufRead>(cursor: &mut Cursor<R>) -> Result<u8, CharsetError> {
    let high = hex_digit(cursor)?;
    let low = hex_digit(cursor)?;
    Ok((high << 4) | low)
}

/// Reads one to eight hex digits, most significant first.
pub(crate) fn unicode_scalar<R: BufRead>(cursor: &mut Cursor<R>) -> Result<u32, CharsetError> {
    let mut code = u32::from(hex_digit(cursor)?);

    for _ in 1..SCALAR_DIGITS_MAX {
        match try_hex_digit(cursor)? {
            Some(digit) => code = (code << 4) | u32::from(digit),
            None => break,
        }
    }

    Ok(code)
}

fn skip_blanks<R: BufRead>(cursor: &mut Cursor<R>) -> Result<(), CharsetError> {
    while let Some(byte) = cursor.next_byte()? {
        if !is_blank(byte) {
            cursor.unread(byte);
            break;
        }
    }
    Ok(())
}

/// One or more spaces or tabs.
pub(crate) fn horizontal_space<R: BufRead>(cursor: &mut Cursor<R>) -> Result<(), CharsetError> {
    match cursor.next_byte()? {
        Some(byte) if is_blank(byte) => skip_blanks(cursor),
        _ => Err(SyntaxError::SpaceExpected.into()),
    }
}

/// Trailing blanks, then either a `#` comment or a bare newline.
pub(crate) fn end_of_line<R: BufRead>(cursor: &mut Cursor<R>) -> Result<(), CharsetError> {
    skip_blanks(cursor)?;

    match cursor.next_byte()? {
        Some(b'#') => drop_line(cursor),
        Some(b'\n') => Ok(()),
        _ => Err(SyntaxError::EndOfLineExpected.into()),
    }
}

/// Skips through the next newline.
pub(crate) fn drop_line<R: BufRead>(cursor: &mut Cursor<R>) -> Result<(), CharsetError> {
    loop {
        match cursor.next_byte()? {
            Some(b'\n') => return Ok(()),
            Some(_) => {}
            None => return Err(SyntaxError::UnexpectedEndOfFile.into()),
        }
    }
}

/// Collects the rest of a header line into `line`, newline excluded.
pub(crate) fn header_line<R: BufRead>(
    cursor: &mut Cursor<R>,
    line: &mut Vec<u8>,
) -> Result<(), CharsetError> {
    line.clear();

    loop {
        match cursor.next_byte()? {
            Some(b'\n') => return Ok(()),
            Some(_) if line.len() >= HEADER_LINE_MAX => {
                return Err(SyntaxError::HeaderLineTooLong.into());
            }
            Some(byte) => line.push(byte),
            None => return Err(SyntaxError::UnexpectedEndOfFile.into()),
        }
    }
}
