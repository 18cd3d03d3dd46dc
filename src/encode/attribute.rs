//! Attribute marshalers
//!
//! Encodes `KeyValue` pairs as `opentelemetry.proto.common.v1.KeyValue`
//! messages. The `AnyValue` payload is a oneof with explicit presence, so
//! it is written even when it equals the scalar default; everything else
//! follows the omit-default rule.

use std::io::{self, Write};

use crate::encode::field::{self, FieldWriter};
use crate::encode::marshal::{self, Marshal};
use crate::encode::tags;
use crate::model::{ArrayValue, KeyValue, Value};

/// One `KeyValue` message: key plus nested `AnyValue`.
pub(crate) struct AttributeMarshaler<'a> {
    key: &'a str,
    value: AnyValueMarshaler<'a>,
    size: usize,
}

impl<'a> AttributeMarshaler<'a> {
    pub(crate) fn create_repeated(attributes: &'a [KeyValue]) -> Vec<AttributeMarshaler<'a>> {
        attributes.iter().map(AttributeMarshaler::new).collect()
    }

    fn new(attribute: &'a KeyValue) -> Self {
        let value = AnyValueMarshaler::new(&attribute.value);
        let size = field::string_len(tags::key_value::KEY, &attribute.key)
            + marshal::message_len(tags::key_value::VALUE, &value);
        Self {
            key: &attribute.key,
            value,
            size,
        }
    }
}

impl Marshal for AttributeMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.string_field(tags::key_value::KEY, self.key)?;
        marshal::write_message(tags::key_value::VALUE, &self.value, out)
    }
}

/// One `AnyValue` message holding a single oneof payload.
pub(crate) struct AnyValueMarshaler<'a> {
    payload: Payload<'a>,
    size: usize,
}

enum Payload<'a> {
    Str(&'a str),
    Bool(bool),
    Int(i64),
    Double(f64),
    Array(ArrayValueMarshaler<'a>),
}

impl<'a> AnyValueMarshaler<'a> {
    fn new(value: &'a Value) -> Self {
        match value {
            Value::String(v) => Self {
                size: field::oneof_string_len(tags::any_value::STRING_VALUE, v),
                payload: Payload::Str(v),
            },
            Value::Bool(v) => Self {
                size: field::oneof_bool_len(tags::any_value::BOOL_VALUE),
                payload: Payload::Bool(*v),
            },
            Value::I64(v) => Self {
                size: field::oneof_int64_len(tags::any_value::INT_VALUE, *v),
                payload: Payload::Int(*v),
            },
            Value::F64(v) => Self {
                size: field::oneof_double_len(tags::any_value::DOUBLE_VALUE),
                payload: Payload::Double(*v),
            },
            Value::Array(array) => {
                let array = ArrayValueMarshaler::new(array);
                Self {
                    size: marshal::message_len(tags::any_value::ARRAY_VALUE, &array),
                    payload: Payload::Array(array),
                }
            }
        }
    }

    fn bool_value(value: bool) -> Self {
        Self {
            size: field::oneof_bool_len(tags::any_value::BOOL_VALUE),
            payload: Payload::Bool(value),
        }
    }

    fn int_value(value: i64) -> Self {
        Self {
            size: field::oneof_int64_len(tags::any_value::INT_VALUE, value),
            payload: Payload::Int(value),
        }
    }

    fn double_value(value: f64) -> Self {
        Self {
            size: field::oneof_double_len(tags::any_value::DOUBLE_VALUE),
            payload: Payload::Double(value),
        }
    }

    fn string_value(value: &'a str) -> Self {
        Self {
            size: field::oneof_string_len(tags::any_value::STRING_VALUE, value),
            payload: Payload::Str(value),
        }
    }
}

impl Marshal for AnyValueMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        match &self.payload {
            Payload::Str(v) => out.oneof_string(tags::any_value::STRING_VALUE, v),
            Payload::Bool(v) => out.oneof_bool(tags::any_value::BOOL_VALUE, *v),
            Payload::Int(v) => out.oneof_int64(tags::any_value::INT_VALUE, *v),
            Payload::Double(v) => out.oneof_double(tags::any_value::DOUBLE_VALUE, *v),
            Payload::Array(array) => {
                marshal::write_message(tags::any_value::ARRAY_VALUE, array, out)
            }
        }
    }
}

/// One `ArrayValue` message: a repeated `AnyValue`, one per element.
struct ArrayValueMarshaler<'a> {
    values: Vec<AnyValueMarshaler<'a>>,
    size: usize,
}

impl<'a> ArrayValueMarshaler<'a> {
    fn new(array: &'a ArrayValue) -> Self {
        let values: Vec<AnyValueMarshaler<'a>> = match array {
            ArrayValue::Bool(items) => items
                .iter()
                .map(|v| AnyValueMarshaler::bool_value(*v))
                .collect(),
            ArrayValue::I64(items) => items
                .iter()
                .map(|v| AnyValueMarshaler::int_value(*v))
                .collect(),
            ArrayValue::F64(items) => items
                .iter()
                .map(|v| AnyValueMarshaler::double_value(*v))
                .collect(),
            ArrayValue::String(items) => items
                .iter()
                .map(|v| AnyValueMarshaler::string_value(v))
                .collect(),
        };
        let size = marshal::repeated_len(tags::array_value::VALUES, &values);
        Self { values, size }
    }
}

impl Marshal for ArrayValueMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        marshal::write_repeated(tags::array_value::VALUES, &self.values, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(attribute: &KeyValue) -> Vec<u8> {
        let marshaler = &AttributeMarshaler::create_repeated(std::slice::from_ref(attribute))[0];
        let mut buf = Vec::new();
        let mut writer = FieldWriter::new(&mut buf);
        marshaler.write(&mut writer).unwrap();
        assert_eq!(marshaler.encoded_len(), buf.len());
        buf
    }

    #[test]
    fn scalar_sizes_match_written_bytes() {
        encoded(&KeyValue::new("k", "v"));
        encoded(&KeyValue::new("k", true));
        encoded(&KeyValue::new("k", -42i64));
        encoded(&KeyValue::new("k", 0.5f64));
    }

    #[test]
    fn default_payloads_are_still_written() {
        // A oneof payload has explicit presence; only the key is omitted.
        let bytes = encoded(&KeyValue::new("", ""));
        // value field key, AnyValue length, string_value field key, length 0
        assert_eq!(bytes, vec![0x12, 0x02, 0x0a, 0x00]);
    }

    #[test]
    fn array_sizes_match_written_bytes() {
        encoded(&KeyValue::new("k", ArrayValue::Bool(vec![true, false])));
        encoded(&KeyValue::new("k", ArrayValue::I64(vec![1, -1, 300])));
        encoded(&KeyValue::new("k", ArrayValue::F64(vec![0.0, -2.5])));
        encoded(&KeyValue::new(
            "k",
            ArrayValue::String(vec!["a".into(), String::new()]),
        ));
        encoded(&KeyValue::new("k", ArrayValue::I64(Vec::new())));
    }
}
