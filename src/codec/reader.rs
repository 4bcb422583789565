use egui::{Color32, Pos2};

use super::{Registry, unpack_rgba};
use crate::error::{CodecError, CodecResult};
use crate::object::{GraphicObject, Object};

/// Deepest aggregate nesting accepted while decoding
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    line: usize,
    text: &'a str,
}

/// Whitespace-separated token stream over an encoded document.
///
/// Line breaks only matter for error messages; a record may be split or
/// joined across lines freely.
pub struct RecordReader<'a> {
    tokens: Vec<Token<'a>>,
    cursor: usize,
    last_line: usize,
    registry: &'a Registry,
    depth: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(source: &'a str, registry: &'a Registry) -> Self {
        let tokens: Vec<Token<'a>> = source
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                line.split_whitespace().map(move |text| Token { line: i + 1, text })
            })
            .collect();
        let last_line = source.lines().count().max(1);

        Self {
            tokens,
            cursor: 0,
            last_line,
            registry,
            depth: 0,
        }
    }

    /// True once every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Number of tokens not consumed yet
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.cursor)
    }

    /// Line of the next token, or of the end of input
    pub fn line(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map_or(self.last_line, |token| token.line)
    }

    fn next(&mut self, what: &str) -> CodecResult<Token<'a>> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(*token)
            }
            None => Err(CodecError::malformed(
                self.last_line,
                format!("unexpected end of input, expected {}", what),
            )),
        }
    }

    /// Read a finite float
    pub fn read_float(&mut self, what: &str) -> CodecResult<f32> {
        let token = self.next(what)?;
        match token.text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CodecError::malformed(
                token.line,
                format!("expected {} as a finite number, found '{}'", what, token.text),
            )),
        }
    }

    /// Read a finite, non-negative float
    pub fn read_extent(&mut self, what: &str) -> CodecResult<f32> {
        let line = self.line();
        let value = self.read_float(what)?;
        if value < 0.0 {
            return Err(CodecError::malformed(
                line,
                format!("{} must not be negative, found {}", what, value),
            ));
        }
        Ok(value)
    }

    pub fn read_pos(&mut self) -> CodecResult<Pos2> {
        let x = self.read_float("position x")?;
        let y = self.read_float("position y")?;
        Ok(Pos2::new(x, y))
    }

    pub fn read_color(&mut self) -> CodecResult<Color32> {
        let token = self.next("color")?;
        token.text.parse::<u32>().map(unpack_rgba).map_err(|_| {
            CodecError::malformed(
                token.line,
                format!("expected packed RGBA color, found '{}'", token.text),
            )
        })
    }

    pub fn read_count(&mut self) -> CodecResult<usize> {
        let token = self.next("object count")?;
        token.text.parse::<usize>().map_err(|_| {
            CodecError::malformed(
                token.line,
                format!("expected object count, found '{}'", token.text),
            )
        })
    }

    /// Read one complete record: tag, then the body of the matching object.
    ///
    /// On failure nothing of the record is returned.
    pub fn read_object(&mut self) -> CodecResult<Object> {
        let tag = self.next("type tag")?;
        let mut object = self.registry.construct(tag.text).ok_or_else(|| {
            CodecError::malformed(tag.line, format!("unknown type tag '{}'", tag.text))
        })?;

        if self.depth >= MAX_DEPTH {
            return Err(CodecError::malformed(
                tag.line,
                format!("objects nested deeper than {}", MAX_DEPTH),
            ));
        }

        self.depth += 1;
        let result = object.decode(self);
        self.depth -= 1;
        result?;

        log::debug!("Decoded {} record from line {}", tag.text, tag.line);
        Ok(object)
    }
}
