//! Sized message abstraction
//!
//! Every composite message in the request tree implements [`Marshal`]: its
//! exact encoded length is computed once, at construction, and writing
//! trusts that length for the parent's length prefix. The equality of
//! `encoded_len()` and the bytes `write()` emits is the central correctness
//! contract of the encoder.

use std::io::{self, Write};

use crate::encode::field::{self, FieldWriter};

/// A message that knows its exact encoded byte length before writing.
pub trait Marshal {
    /// Exact number of bytes [`Marshal::write`] will emit.
    fn encoded_len(&self) -> usize;

    /// Write the message body. The caller has already emitted any key and
    /// length prefix for it.
    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()>;
}

/// Encoded length of a nested message field, prefix included.
pub(crate) fn message_len<M: Marshal>(tag: u32, message: &M) -> usize {
    let body = message.encoded_len();
    field::key_len(tag) + field::len_prefix_len(body) + body
}

/// Write a nested message field: key, length prefix, body.
pub(crate) fn write_message<W: Write, M: Marshal>(
    tag: u32,
    message: &M,
    out: &mut FieldWriter<W>,
) -> io::Result<()> {
    out.message_header(tag, message.encoded_len())?;
    message.write(out)
}

/// Encoded length of a repeated message field.
pub(crate) fn repeated_len<M: Marshal>(tag: u32, messages: &[M]) -> usize {
    messages.iter().map(|m| message_len(tag, m)).sum()
}

/// Write a repeated message field, one element per entry, in order.
pub(crate) fn write_repeated<W: Write, M: Marshal>(
    tag: u32,
    messages: &[M],
    out: &mut FieldWriter<W>,
) -> io::Result<()> {
    for message in messages {
        write_message(tag, message, out)?;
    }
    Ok(())
}
