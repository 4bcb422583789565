//! Text persistence for graphic objects.
//!
//! A document is the number of top-level objects followed by one record per
//! object:
//!
//! ```text
//! 2
//! Circle
//! 100 100
//! 10
//! 4294967295
//! Aggregate
//! 1
//! Rectangle
//! 200 100
//! 20 30
//! 4294967295
//! ```
//!
//! Leaf records are a tag, a position line, a geometry line and a packed RGBA
//! color. Aggregate records are the tag, a child count and the child records.

use std::io::{Read, Write};

use egui::Color32;

mod reader;
mod registry;
mod writer;

pub use crate::error::{CodecError, CodecResult};
pub use reader::{MAX_DEPTH, RecordReader};
pub use registry::{Constructor, Registry};
pub use writer::RecordWriter;

use crate::object::{GraphicObject, Object};

/// Pack a color as `0xRRGGBBAA`
pub fn pack_rgba(color: Color32) -> u32 {
    u32::from_be_bytes(color.to_array())
}

/// Inverse of [`pack_rgba`]; the bytes are stored untouched
pub fn unpack_rgba(packed: u32) -> Color32 {
    let [r, g, b, a] = packed.to_be_bytes();
    Color32::from_rgba_premultiplied(r, g, b, a)
}

/// Encode a single record, without the top-level count
pub fn encode_object(object: &Object) -> String {
    let mut out = RecordWriter::new();
    object.encode(&mut out);
    out.into_string()
}

/// Encode a whole document: the top-level count followed by every record
pub fn encode_objects(objects: &[Object]) -> String {
    let mut out = RecordWriter::new();
    out.count(objects.len());
    for object in objects {
        object.encode(&mut out);
    }
    out.into_string()
}

/// Decode a single record with the standard registry
pub fn decode_object(source: &str) -> CodecResult<Object> {
    let mut reader = RecordReader::new(source, Registry::standard());
    reader.read_object()
}

/// Decode a whole document. Either every object is returned or none.
pub fn decode_objects(source: &str) -> CodecResult<Vec<Object>> {
    let mut objects = Vec::new();
    decode_into(source, Registry::standard(), &mut objects)?;
    Ok(objects)
}

/// Decode a document, appending each top-level object to `objects` as soon as
/// its record is complete.
///
/// This is not transactional: when a record fails, the objects decoded before
/// it stay in `objects` and the failing record is discarded.
/// Returns the number of objects appended.
pub fn decode_into(
    source: &str,
    registry: &Registry,
    objects: &mut Vec<Object>,
) -> CodecResult<usize> {
    let mut reader = RecordReader::new(source, registry);
    let count = reader.read_count()?;

    for _ in 0..count {
        objects.push(reader.read_object()?);
    }

    if !reader.is_exhausted() {
        log::warn!(
            "Ignoring {} trailing tokens after {} objects, starting at line {}",
            reader.remaining(),
            count,
            reader.line()
        );
    }

    Ok(count)
}

/// Write a whole document to `writer`
pub fn save<W: Write>(mut writer: W, objects: &[Object]) -> CodecResult<()> {
    let encoded = encode_objects(objects);
    writer
        .write_all(encoded.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| CodecError::io("write", e))?;

    log::info!("Saved {} objects ({} bytes)", objects.len(), encoded.len());
    Ok(())
}

/// Read a whole document from `reader` and append it to `objects`.
///
/// See [`decode_into`] for what happens to `objects` on a malformed record.
pub fn load<R: Read>(mut reader: R, objects: &mut Vec<Object>) -> CodecResult<usize> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| CodecError::io("read", e))?;

    let source = std::str::from_utf8(&bytes).map_err(|e| {
        let line = bytes[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        CodecError::malformed(line, "stream is not valid UTF-8")
    })?;

    let count = decode_into(source, Registry::standard(), objects)?;
    log::info!("Loaded {} objects", count);
    Ok(count)
}
