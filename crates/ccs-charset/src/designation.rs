/// A charset designation as decoded from an escape sequence.
///
/// `code` identifies the sequence (its type and final byte); `arg` carries the
/// intermediate bytes that select among registered sets sharing a final byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Designation {
    /// Sequence code.
    pub code: u32,
    /// Argument bytes of the sequence.
    pub arg: Vec<u8>,
}

impl Designation {
    /// A designation for `code` with argument bytes `arg`.
    pub fn new(code: u32, arg: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            arg: arg.into(),
        }
    }
}
