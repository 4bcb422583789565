use egui::{Color32, Shape, Vec2};

use super::{GraphicObject, Object, ObjectKind};
use crate::codec::{CodecResult, RecordReader, RecordWriter};

/// A group of objects that is moved, recolored, resized and hidden as one.
///
/// Children are owned exclusively and visited in insertion order. The
/// aggregate's own visibility flag is bookkeeping of the last
/// [`GraphicObject::set_visible`] call; it is not derived from the children.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    children: Vec<Object>,
    visible: bool,
}

impl Aggregate {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            visible: true,
        }
    }

    pub fn with_children(children: impl IntoIterator<Item = Object>) -> Self {
        Self {
            children: children.into_iter().collect(),
            visible: true,
        }
    }

    /// Append a child, taking ownership of it
    pub fn add_child(&mut self, child: impl Into<Object>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Object] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicObject for Aggregate {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Aggregate
    }

    fn paint(&self, shapes: &mut Vec<Shape>) {
        for child in &self.children {
            child.paint(shapes);
        }
    }

    fn translate(&mut self, delta: Vec2) {
        for child in &mut self.children {
            child.translate(delta);
        }
    }

    fn change_color(&mut self, color: Color32) {
        for child in &mut self.children {
            child.change_color(color);
        }
    }

    fn change_size(&mut self, target: f32) {
        for child in &mut self.children {
            child.change_size(target);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        for child in &mut self.children {
            child.set_visible(visible);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn encode(&self, out: &mut RecordWriter) {
        out.tag(self.kind());
        out.count(self.children.len());
        for child in &self.children {
            child.encode(out);
        }
    }

    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()> {
        let count = input.read_count()?;

        let mut children = Vec::new();
        for _ in 0..count {
            children.push(input.read_object()?);
        }

        *self = Self::with_children(children);
        Ok(())
    }
}
