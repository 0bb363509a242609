//! One-byte-lookahead reader over a buffered byte source.
//!
//! The definition grammar never needs more than a single byte of push-back,
//! so the cursor keeps exactly one pending slot in front of the reader. Bytes
//! come straight out of the reader's own buffer; nothing is copied.
//!
//! Position counters follow the byte that will be returned next, 1-based,
//! and are only used to report where a load stopped.

use std::io::{self, BufRead};

#[derive(Debug)]
pub(crate) struct Cursor<R> {
    reader: R,
    pending: Option<u8>,
    line: usize,
    column: usize,
    /// Column to restore when a newline is pushed back.
    prev_column: usize,
}

impl<R: BufRead> Cursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line: 1,
            column: 1,
            prev_column: 1,
        }
    }

    /// Reads one byte; `None` at end of input.
    pub(crate) fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.pending.take() {
            Some(byte) => Some(byte),
            None => self.read_raw()?,
        };

        if let Some(byte) = byte {
            if byte == b'\n' {
                self.prev_column = self.column;
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        Ok(byte)
    }

    /// Pushes back the byte returned by the last `next_byte` call.
    pub(crate) fn unread(&mut self, byte: u8) {
        debug_assert!(self.pending.is_none(), "only one byte of push-back");
        self.pending = Some(byte);

        if byte == b'\n' {
            self.line -= 1;
            self.column = self.prev_column;
        } else {
            self.column -= 1;
        }
    }

    /// Returns the next byte without consuming it.
    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        let byte = self.next_byte()?;
        if let Some(byte) = byte {
            self.unread(byte);
        }
        Ok(byte)
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    fn read_raw(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let byte = buf.first().copied();
                    if byte.is_some() {
                        self.reader.consume(1);
                    }
                    return Ok(byte);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
