//! Wire field sizing and writing
//!
//! Thin glue over the `prost::encoding` primitives. Every field class comes
//! as a size/write pair living side by side; the pair shares one is-default
//! condition so the size pass and the write pass cannot disagree about
//! whether a field is present.
//!
//! Ordinary fields follow the proto3 rule that a default value (empty
//! bytes, zero scalar, zero enum) is omitted entirely. Oneof payloads have
//! explicit presence and use the `oneof_*` variants, which always write.

use std::io::{self, Write};

use prost::encoding::{self, WireType};

/// Streaming protobuf field writer over any [`io::Write`] sink.
///
/// All lengths are precomputed by the caller, so writing is a single
/// forward pass; the only failures are the sink's own.
#[derive(Debug)]
pub struct FieldWriter<W> {
    out: W,
}

impl<W: Write> FieldWriter<W> {
    /// Wrap an output sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn varint(&mut self, value: u64) -> io::Result<()> {
        let mut scratch = [0u8; 10];
        let mut tail = &mut scratch[..];
        encoding::encode_varint(value, &mut tail);
        let written = 10 - tail.len();
        self.out.write_all(&scratch[..written])
    }

    fn key(&mut self, tag: u32, wire_type: WireType) -> io::Result<()> {
        let mut scratch = [0u8; 5];
        let mut tail = &mut scratch[..];
        encoding::encode_key(tag, wire_type, &mut tail);
        let written = 5 - tail.len();
        self.out.write_all(&scratch[..written])
    }

    /// Length-delimited bytes field; empty bytes are omitted.
    pub fn bytes_field(&mut self, tag: u32, value: &[u8]) -> io::Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.key(tag, WireType::LengthDelimited)?;
        self.varint(value.len() as u64)?;
        self.out.write_all(value)
    }

    /// UTF-8 string field; the empty string is omitted.
    pub fn string_field(&mut self, tag: u32, value: &str) -> io::Result<()> {
        self.bytes_field(tag, value.as_bytes())
    }

    /// Varint uint32 field; zero is omitted.
    pub fn uint32_field(&mut self, tag: u32, value: u32) -> io::Result<()> {
        if value == 0 {
            return Ok(());
        }
        self.key(tag, WireType::Varint)?;
        self.varint(u64::from(value))
    }

    /// Varint enum field; the zero (default) variant is omitted.
    pub fn enum_field(&mut self, tag: u32, value: i32) -> io::Result<()> {
        if value == 0 {
            return Ok(());
        }
        self.key(tag, WireType::Varint)?;
        self.varint(value as u64)
    }

    /// Little-endian fixed 64-bit field; zero is omitted.
    pub fn fixed64_field(&mut self, tag: u32, value: u64) -> io::Result<()> {
        if value == 0 {
            return Ok(());
        }
        self.key(tag, WireType::SixtyFourBit)?;
        self.out.write_all(&value.to_le_bytes())
    }

    /// Header of a nested message field: key plus length prefix. The caller
    /// writes exactly `len` body bytes next.
    pub fn message_header(&mut self, tag: u32, len: usize) -> io::Result<()> {
        self.key(tag, WireType::LengthDelimited)?;
        self.varint(len as u64)
    }

    /// Oneof string payload; written even when empty.
    pub fn oneof_string(&mut self, tag: u32, value: &str) -> io::Result<()> {
        self.key(tag, WireType::LengthDelimited)?;
        self.varint(value.len() as u64)?;
        self.out.write_all(value.as_bytes())
    }

    /// Oneof bool payload; written even when false.
    pub fn oneof_bool(&mut self, tag: u32, value: bool) -> io::Result<()> {
        self.key(tag, WireType::Varint)?;
        self.varint(u64::from(value))
    }

    /// Oneof int64 payload; written even when zero.
    pub fn oneof_int64(&mut self, tag: u32, value: i64) -> io::Result<()> {
        self.key(tag, WireType::Varint)?;
        self.varint(value as u64)
    }

    /// Oneof double payload; written even when zero.
    pub fn oneof_double(&mut self, tag: u32, value: f64) -> io::Result<()> {
        self.key(tag, WireType::SixtyFourBit)?;
        self.out.write_all(&value.to_le_bytes())
    }
}

pub(crate) fn key_len(tag: u32) -> usize {
    encoding::key_len(tag)
}

pub(crate) fn len_prefix_len(len: usize) -> usize {
    encoding::encoded_len_varint(len as u64)
}

pub(crate) fn bytes_len(tag: u32, value: &[u8]) -> usize {
    if value.is_empty() {
        return 0;
    }
    key_len(tag) + len_prefix_len(value.len()) + value.len()
}

pub(crate) fn string_len(tag: u32, value: &str) -> usize {
    bytes_len(tag, value.as_bytes())
}

pub(crate) fn uint32_len(tag: u32, value: u32) -> usize {
    if value == 0 {
        return 0;
    }
    key_len(tag) + encoding::encoded_len_varint(u64::from(value))
}

pub(crate) fn enum_len(tag: u32, value: i32) -> usize {
    if value == 0 {
        return 0;
    }
    key_len(tag) + encoding::encoded_len_varint(value as u64)
}

pub(crate) fn fixed64_len(tag: u32, value: u64) -> usize {
    if value == 0 {
        return 0;
    }
    key_len(tag) + 8
}

pub(crate) fn oneof_string_len(tag: u32, value: &str) -> usize {
    key_len(tag) + len_prefix_len(value.len()) + value.len()
}

pub(crate) fn oneof_bool_len(tag: u32) -> usize {
    key_len(tag) + 1
}

pub(crate) fn oneof_int64_len(tag: u32, value: i64) -> usize {
    key_len(tag) + encoding::encoded_len_varint(value as u64)
}

pub(crate) fn oneof_double_len(tag: u32) -> usize {
    key_len(tag) + 8
}
