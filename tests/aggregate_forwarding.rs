use egui::{Color32, Pos2, Vec2};
use graphic_objects::object::{GraphicObject, INVISIBLE, Object, factory};
use graphic_objects::{Aggregate, Circle, Rectangle, Triangle};

/// Circle, Rectangle, and an inner aggregate holding a Triangle and another
/// aggregate with a Circle
fn nested() -> Aggregate {
    let mut innermost = Aggregate::new();
    innermost.add_child(Circle::new(Pos2::new(1.0, 2.0), 3.0, Color32::WHITE));

    let mut inner = Aggregate::new();
    inner.add_child(Triangle::default());
    inner.add_child(innermost);

    let mut outer = Aggregate::new();
    outer.add_child(Circle::default());
    outer.add_child(Rectangle::default());
    outer.add_child(inner);
    outer
}

/// Every leaf, depth-first
fn leaves(object: &Object, out: &mut Vec<Object>) {
    match object {
        Object::Aggregate(a) => a.children().iter().for_each(|child| leaves(child, out)),
        leaf => out.push(leaf.clone()),
    }
}

fn all_leaves(aggregate: &Aggregate) -> Vec<Object> {
    let mut out = Vec::new();
    leaves(&Object::Aggregate(aggregate.clone()), &mut out);
    out
}

fn position(leaf: &Object) -> Pos2 {
    match leaf {
        Object::Circle(c) => c.position(),
        Object::Rectangle(r) => r.position(),
        Object::Triangle(t) => t.position(),
        Object::Aggregate(_) => unreachable!(),
    }
}

#[test]
fn test_move_reaches_every_descendant() {
    let mut aggregate = nested();
    let before = all_leaves(&aggregate);
    aggregate.translate(Vec2::new(7.0, -3.0));
    let after = all_leaves(&aggregate);

    assert_eq!(before.len(), 4);
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(position(new) - position(old), Vec2::new(7.0, -3.0));
    }
}

#[test]
fn test_recolor_reaches_every_descendant() {
    let mut aggregate = nested();
    aggregate.change_color(Color32::RED);
    for leaf in all_leaves(&aggregate) {
        let fill = match &leaf {
            Object::Circle(c) => *c.fill(),
            Object::Rectangle(r) => *r.fill(),
            Object::Triangle(t) => *t.fill(),
            Object::Aggregate(_) => unreachable!(),
        };
        assert_eq!(fill.displayed(), Color32::RED);
        assert_eq!(fill.stored(), Color32::RED);
    }
}

#[test]
fn test_visibility_is_stored_and_forwarded() {
    let mut aggregate = nested();
    aggregate.set_visible(false);
    assert!(!aggregate.is_visible());
    for leaf in all_leaves(&aggregate) {
        assert!(!leaf.is_visible());
    }

    let mut shapes = Vec::new();
    aggregate.paint(&mut shapes);
    assert_eq!(shapes.len(), 4);

    aggregate.set_visible(true);
    assert!(aggregate.is_visible());
    for leaf in all_leaves(&aggregate) {
        assert!(leaf.is_visible());
    }
}

#[test]
fn test_own_flag_is_independent_of_children() {
    let mut hidden = Circle::default();
    hidden.set_visible(false);

    let mut aggregate = Aggregate::new();
    aggregate.add_child(hidden);
    assert!(aggregate.is_visible());
    assert!(!aggregate.children()[0].is_visible());
}

#[test]
fn test_resize_is_forwarded() {
    let mut aggregate = Aggregate::with_children([
        factory::create_circle(Pos2::ZERO, 5.0, Color32::WHITE),
        factory::create_aggregate([factory::create_circle(Pos2::ZERO, 1.0, Color32::WHITE)]),
    ]);
    aggregate.change_size(12.0);

    for leaf in all_leaves(&aggregate) {
        assert_eq!(leaf.as_circle().map(Circle::radius), Some(12.0));
    }
}

#[test]
fn test_hidden_children_paint_transparent() {
    let mut aggregate = nested();
    aggregate.set_visible(false);
    let mut shapes = Vec::new();
    aggregate.paint(&mut shapes);
    for shape in shapes {
        let fill = match shape {
            egui::Shape::Circle(c) => c.fill,
            egui::Shape::Rect(r) => r.fill,
            egui::Shape::Path(p) => p.fill,
            other => panic!("unexpected primitive {other:?}"),
        };
        assert_eq!(fill, INVISIBLE);
    }
}

#[test]
fn test_empty_aggregate_is_inert() {
    let mut aggregate = Aggregate::new();
    aggregate.translate(Vec2::new(1.0, 1.0));
    aggregate.change_color(Color32::RED);
    aggregate.change_size(0.0);
    let mut shapes = Vec::new();
    aggregate.paint(&mut shapes);
    assert!(shapes.is_empty());
    assert_eq!(aggregate.len(), 0);
}
