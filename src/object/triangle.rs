use egui::{Color32, Pos2, Shape, Stroke, Vec2};

use super::common::{self, Fill};
use super::{GraphicObject, ObjectKind};
use crate::codec::{CodecResult, RecordReader, RecordWriter};

/// Triangle whose vertices are stored as offsets from `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    position: Pos2,
    vertices: [Vec2; 3],
    fill: Fill,
}

impl Triangle {
    pub const DEFAULT_SIZE: f32 = 20.0;
    pub const DEFAULT_POSITION: Pos2 = Pos2::new(300.0, 100.0);

    /// Equilateral triangle pointing up, with every vertex `size` away from `position`
    pub fn new(position: Pos2, size: f32, color: Color32) -> Self {
        Self::from_vertices(position, equilateral(size), color)
    }

    pub fn from_vertices(position: Pos2, vertices: [Vec2; 3], color: Color32) -> Self {
        Self {
            position,
            vertices,
            fill: Fill::new(color),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        self.vertices
    }

    /// Vertex positions in scene coordinates
    pub fn points(&self) -> [Pos2; 3] {
        self.vertices.map(|offset| self.position + offset)
    }

    /// Distance from `position` to the first vertex
    pub fn extent(&self) -> f32 {
        self.vertices[0].length()
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }
}

fn equilateral(size: f32) -> [Vec2; 3] {
    let half_base = size * 3f32.sqrt() / 2.0;
    [
        Vec2::new(0.0, -size),
        Vec2::new(half_base, size / 2.0),
        Vec2::new(-half_base, size / 2.0),
    ]
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Self::DEFAULT_SIZE, Color32::WHITE)
    }
}

impl GraphicObject for Triangle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Triangle
    }

    fn paint(&self, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::convex_polygon(
            self.points().to_vec(),
            self.fill.displayed(),
            Stroke::NONE,
        ));
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn change_color(&mut self, color: Color32) {
        self.fill.set_color(color);
    }

    /// Scale every vertex uniformly so the first one ends up `target` away
    /// from the position. When no finite factor exists (first vertex on the
    /// position) the triangle is rebuilt as an equilateral one.
    fn change_size(&mut self, target: f32) {
        let target = common::clamp_size(target);
        let factor = target / self.extent();
        if factor.is_finite() {
            for vertex in &mut self.vertices {
                *vertex *= factor;
            }
        } else {
            self.vertices = equilateral(target);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.fill.set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        self.fill.is_visible()
    }

    fn encode(&self, out: &mut RecordWriter) {
        let [a, b, c] = self.vertices;
        out.tag(self.kind());
        out.floats(&[self.position.x, self.position.y]);
        out.floats(&[a.x, a.y, b.x, b.y, c.x, c.y]);
        out.color(self.fill.stored());
    }

    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()> {
        let position = input.read_pos()?;
        let mut vertices = [Vec2::ZERO; 3];
        for vertex in &mut vertices {
            vertex.x = input.read_float("vertex x")?;
            vertex.y = input.read_float("vertex y")?;
        }
        let color = input.read_color()?;

        *self = Self::from_vertices(position, vertices, color);
        Ok(())
    }
}
