use std::io::BufRead;

use log::trace;

use crate::{
    charset::Shape,
    cursor::Cursor,
    error::{CharsetError, SemanticError},
    grammar,
};

/// Reads mapping lines up to the end of input and writes them into `table`.
/// Returns the number of entries written.
///
/// A mapping line is `order` two-digit octets with no separator, blanks, the
/// code value in one to eight hex digits, and an optional comment:
///
/// ```text
/// 2121 3000   # IDEOGRAPHIC SPACE
/// ```
///
/// Later lines overwrite earlier ones. A line that fails to parse writes
/// nothing.
pub(crate) fn fill<R: BufRead>(
    shape: Shape,
    table: &mut [u32],
    cursor: &mut Cursor<R>,
) -> Result<usize, CharsetError> {
    debug_assert_eq!(table.len(), shape.len());
    let mut written = 0;

    while let Some(byte) = cursor.next_byte()? {
        match byte {
            b'\n' => {}
            b'#' => grammar::drop_line(cursor)?,
            _ => {
                cursor.unread(byte);
                let (offset, code) = entry(shape, cursor)?;
                trace!("table[{offset}] = {code:#x}");
                table[offset] = code;
                written += 1;
            }
        }
    }

    Ok(written)
}

fn entry<R: BufRead>(shape: Shape, cursor: &mut Cursor<R>) -> Result<(usize, u32), CharsetError> {
    let mut offset = 0;
    for _ in 0..shape.order {
        let octet = grammar::octet(cursor)?;
        let position = shape
            .position(octet)
            .ok_or(SemanticError::OctetOutOfRange)?;
        offset = offset * shape.size + position;
    }

    grammar::horizontal_space(cursor)?;
    let code = grammar::unicode_scalar(cursor)?;
    grammar::end_of_line(cursor)?;

    Ok((offset, code))
}
