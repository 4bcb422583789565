use std::collections::HashMap;
use std::sync::LazyLock;

use crate::object::{Aggregate, Circle, Object, ObjectKind, Rectangle, Triangle};

/// Builds an empty object that a record body is decoded into
pub type Constructor = fn() -> Object;

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Maps record tags to the constructors of the objects they describe
#[derive(Debug, Clone)]
pub struct Registry {
    constructors: HashMap<&'static str, Constructor>,
}

impl Registry {
    /// A registry knowing every built-in object kind
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ObjectKind::Circle.tag(), || Object::Circle(Circle::default()));
        registry.register(ObjectKind::Rectangle.tag(), || Object::Rectangle(Rectangle::default()));
        registry.register(ObjectKind::Triangle.tag(), || Object::Triangle(Triangle::default()));
        registry.register(ObjectKind::Aggregate.tag(), || Object::Aggregate(Aggregate::default()));
        registry
    }

    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Shared registry of the built-in kinds
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    /// Register a constructor, replacing any previous one for the same tag
    pub fn register(&mut self, tag: &'static str, constructor: Constructor) {
        self.constructors.insert(tag, constructor);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Build a fresh default object for `tag`, if the tag is known
    pub fn construct(&self, tag: &str) -> Option<Object> {
        self.constructors.get(tag).map(|constructor| constructor())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
