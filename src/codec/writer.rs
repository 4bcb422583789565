use std::fmt::Write as _;

use egui::Color32;

use super::pack_rgba;
use crate::object::ObjectKind;

/// Line-oriented sink for encoded records.
///
/// Floats use the shortest decimal form that parses back to the same value.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: String,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&mut self, kind: ObjectKind) {
        self.line(kind.tag());
    }

    pub fn count(&mut self, count: usize) {
        self.line(count);
    }

    pub fn floats(&mut self, values: &[f32]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.buf.push(' ');
            }
            // Writing to a String cannot fail
            let _ = write!(self.buf, "{}", value);
        }
        self.buf.push('\n');
    }

    pub fn color(&mut self, color: Color32) {
        self.line(pack_rgba(color));
    }

    fn line(&mut self, value: impl std::fmt::Display) {
        let _ = writeln!(self.buf, "{}", value);
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
