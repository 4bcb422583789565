use std::fmt;

use egui::{Color32, Painter, Shape, Vec2};
use serde::{Deserialize, Serialize};

use crate::codec::{CodecResult, RecordReader, RecordWriter, pack_rgba};

mod aggregate;
mod circle;
mod common;
mod rectangle;
mod triangle;

pub use aggregate::Aggregate;
pub use circle::Circle;
pub use common::{Fill, INVISIBLE, MIN_SIZE};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// Common trait that all graphic objects must implement
pub trait GraphicObject {
    /// Which variant this is; also decides the record tag
    fn kind(&self) -> ObjectKind;

    /// Append the primitives that make up this object, in paint order
    fn paint(&self, shapes: &mut Vec<Shape>);

    /// Draw the object using the provided painter
    fn draw(&self, painter: &Painter) {
        let mut shapes = Vec::new();
        self.paint(&mut shapes);
        painter.extend(shapes);
    }

    /// Translate the object by the given delta
    fn translate(&mut self, delta: Vec2);

    /// Set the fill color. Hidden objects keep painting transparent until shown.
    fn change_color(&mut self, color: Color32);

    /// Resize the object so its characteristic extent becomes `target`
    fn change_size(&mut self, target: f32);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Write this object as one record, tag line included
    fn encode(&self, out: &mut RecordWriter);

    /// Populate this object from the record body following its tag
    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()>;
}

/// The kinds of graphic objects, one per record tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Circle,
    Rectangle,
    Triangle,
    Aggregate,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::Circle,
        ObjectKind::Rectangle,
        ObjectKind::Triangle,
        ObjectKind::Aggregate,
    ];

    /// The tag that starts a record of this kind
    pub fn tag(self) -> &'static str {
        match self {
            ObjectKind::Circle => "Circle",
            ObjectKind::Rectangle => "Rectangle",
            ObjectKind::Triangle => "Triangle",
            ObjectKind::Aggregate => "Aggregate",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Enumeration of all graphic object types
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Aggregate(Aggregate),
}

impl Object {
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Object::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Object::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Object::Triangle(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<&Aggregate> {
        match self {
            Object::Aggregate(a) => Some(a),
            _ => None,
        }
    }
}

impl GraphicObject for Object {
    fn kind(&self) -> ObjectKind {
        match self {
            Object::Circle(c) => c.kind(),
            Object::Rectangle(r) => r.kind(),
            Object::Triangle(t) => t.kind(),
            Object::Aggregate(a) => a.kind(),
        }
    }

    fn paint(&self, shapes: &mut Vec<Shape>) {
        match self {
            Object::Circle(c) => c.paint(shapes),
            Object::Rectangle(r) => r.paint(shapes),
            Object::Triangle(t) => t.paint(shapes),
            Object::Aggregate(a) => a.paint(shapes),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            Object::Circle(c) => c.translate(delta),
            Object::Rectangle(r) => r.translate(delta),
            Object::Triangle(t) => t.translate(delta),
            Object::Aggregate(a) => a.translate(delta),
        }
    }

    fn change_color(&mut self, color: Color32) {
        match self {
            Object::Circle(c) => c.change_color(color),
            Object::Rectangle(r) => r.change_color(color),
            Object::Triangle(t) => t.change_color(color),
            Object::Aggregate(a) => a.change_color(color),
        }
    }

    fn change_size(&mut self, target: f32) {
        match self {
            Object::Circle(c) => c.change_size(target),
            Object::Rectangle(r) => r.change_size(target),
            Object::Triangle(t) => t.change_size(target),
            Object::Aggregate(a) => a.change_size(target),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            Object::Circle(c) => c.set_visible(visible),
            Object::Rectangle(r) => r.set_visible(visible),
            Object::Triangle(t) => t.set_visible(visible),
            Object::Aggregate(a) => a.set_visible(visible),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            Object::Circle(c) => c.is_visible(),
            Object::Rectangle(r) => r.is_visible(),
            Object::Triangle(t) => t.is_visible(),
            Object::Aggregate(a) => a.is_visible(),
        }
    }

    fn encode(&self, out: &mut RecordWriter) {
        match self {
            Object::Circle(c) => c.encode(out),
            Object::Rectangle(r) => r.encode(out),
            Object::Triangle(t) => t.encode(out),
            Object::Aggregate(a) => a.encode(out),
        }
    }

    fn decode(&mut self, input: &mut RecordReader<'_>) -> CodecResult<()> {
        match self {
            Object::Circle(c) => c.decode(input),
            Object::Rectangle(r) => r.decode(input),
            Object::Triangle(t) => t.decode(input),
            Object::Aggregate(a) => a.decode(input),
        }
    }
}

impl From<Circle> for Object {
    fn from(circle: Circle) -> Self {
        Object::Circle(circle)
    }
}

impl From<Rectangle> for Object {
    fn from(rectangle: Rectangle) -> Self {
        Object::Rectangle(rectangle)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}

impl From<Aggregate> for Object {
    fn from(aggregate: Aggregate) -> Self {
        Object::Aggregate(aggregate)
    }
}

/// One-line summary, without children
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hidden = if self.is_visible() { "" } else { " (hidden)" };
        match self {
            Object::Circle(c) => write!(
                f,
                "Circle at ({}, {}) radius {} color #{:08X}{}",
                c.position().x,
                c.position().y,
                c.radius(),
                pack_rgba(c.fill().stored()),
                hidden
            ),
            Object::Rectangle(r) => write!(
                f,
                "Rectangle at ({}, {}) size {}x{} color #{:08X}{}",
                r.position().x,
                r.position().y,
                r.size().x,
                r.size().y,
                pack_rgba(r.fill().stored()),
                hidden
            ),
            Object::Triangle(t) => write!(
                f,
                "Triangle at ({}, {}) extent {} color #{:08X}{}",
                t.position().x,
                t.position().y,
                t.extent(),
                pack_rgba(t.fill().stored()),
                hidden
            ),
            Object::Aggregate(a) => write!(f, "Aggregate of {}{}", a.len(), hidden),
        }
    }
}

/// Factory functions for creating objects
pub mod factory {
    use super::*;

    /// Create an object of the given kind with its default geometry
    pub fn create(kind: ObjectKind) -> Object {
        match kind {
            ObjectKind::Circle => Object::Circle(Circle::default()),
            ObjectKind::Rectangle => Object::Rectangle(Rectangle::default()),
            ObjectKind::Triangle => Object::Triangle(Triangle::default()),
            ObjectKind::Aggregate => Object::Aggregate(Aggregate::default()),
        }
    }

    pub fn create_circle(position: egui::Pos2, radius: f32, color: Color32) -> Object {
        Object::Circle(Circle::new(position, radius, color))
    }

    pub fn create_rectangle(position: egui::Pos2, size: Vec2, color: Color32) -> Object {
        Object::Rectangle(Rectangle::new(position, size, color))
    }

    pub fn create_triangle(position: egui::Pos2, size: f32, color: Color32) -> Object {
        Object::Triangle(Triangle::new(position, size, color))
    }

    pub fn create_aggregate(children: impl IntoIterator<Item = Object>) -> Object {
        Object::Aggregate(Aggregate::with_children(children))
    }
}
