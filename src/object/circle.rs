use egui::{Color32, Pos2, Shape, Vec2};

use super::common::{self, Fill};
use super::{GraphicObject, ObjectKind};
use crate::codec::{CodecResult, RecordReader, RecordWriter};

/// Circle positioned by the top-left corner of its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    position: Pos2,
    radius: f32,
    fill: Fill,
}

impl Circle {
    pub const DEFAULT_RADIUS: f32 = 10.0;
    pub const DEFAULT_POSITION: Pos2 = Pos2::new(100.0, 100.0);

    pub fn new(position: Pos2, radius: f32, color: Color32) -> Self {
        Self {
            position,
            radius: radius.max(0.0),
            fill: Fill::new(color),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Pos2 {
        self.position + Vec2::splat(self.radius)
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Self::DEFAULT_RADIUS, Color32::WHITE)
    }
}

impl GraphicObject for Circle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Circle
    }

    fn paint(&self, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::circle_filled(
            self.center(),
            self.radius,
            self.fill.displayed(),
        ));
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn change_color(&mut self, color: Color32) {
        self.fill.set_color(color);
    }

    fn change_size(&mut self, target: f32) {
        self.radius = common::clamp_size(target);
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
        out.floats(&[self.radius]);
        out.color(self.fill.stored());
    }

    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()> {
        let position = input.read_pos()?;
        let radius = input.read_extent("radius")?;
        let color = input.read_color()?;

        *self = Self::new(position, radius, color);
        Ok(())
    }
}
