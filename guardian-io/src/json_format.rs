//! JSON encoding of redacted records with `", "` and `": "` separators,
//! non-ASCII text written as UTF-8.

use std::io;

use guardian_core::models::FieldMap;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::Formatter;

/// Compact JSON with a space after every `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode a field map, keeping key order.
pub fn encode_fields(fields: &FieldMap) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    fields.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| serde_json::Error::custom(e.to_string()))
}
