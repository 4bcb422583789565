use egui::{Color32, Pos2, Rect, Shape, Vec2};

use super::common::{self, Fill};
use super::{GraphicObject, ObjectKind};
use crate::codec::{CodecResult, RecordReader, RecordWriter};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    position: Pos2,
    size: Vec2,
    fill: Fill,
}

impl Rectangle {
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(20.0, 30.0);
    pub const DEFAULT_POSITION: Pos2 = Pos2::new(200.0, 100.0);

    pub fn new(position: Pos2, size: Vec2, color: Color32) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
            fill: Fill::new(color),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Self::DEFAULT_SIZE, Color32::WHITE)
    }
}

impl GraphicObject for Rectangle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Rectangle
    }

    fn paint(&self, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::rect_filled(self.rect(), 0.0, self.fill.displayed()));
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn change_color(&mut self, color: Color32) {
        self.fill.set_color(color);
    }

    /// Scale so the longer side becomes `target`, keeping the aspect ratio.
    /// A 0x0 rectangle has no aspect ratio and becomes a `target` square.
    fn change_size(&mut self, target: f32) {
        let target = common::clamp_size(target);
        let factor = target / self.size.max_elem();
        self.size = if factor.is_finite() {
            self.size * factor
        } else {
            Vec2::splat(target)
        };
    }

    fn set_visible(&mut self, visible: bool) {
        self.fill.set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        self.fill.is_visible()
    }

    fn encode(&self, out: &mut RecordWriter) {
        out.tag(self.kind());
        out.floats(&[self.position.x, self.position.y]);
        out.floats(&[self.size.x, self.size.y]);
        out.color(self.fill.stored());
    }

    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()> {
        let position = input.read_pos()?;
        let width = input.read_extent("width")?;
        let height = input.read_extent("height")?;
        let color = input.read_color()?;

        *self = Self::new(position, Vec2::new(width, height), color);
        Ok(())
    }
}
