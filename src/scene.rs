use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use egui::{Color32, Painter, Shape, Vec2};

use crate::codec::{self, CodecError, CodecResult};
use crate::config::SceneConfig;
use crate::object::{GraphicObject, Object, ObjectKind, factory};

/// The top-level objects being edited, plus which one is selected.
///
/// Commands act on the selected object and quietly do nothing while the
/// scene is empty.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Object>,
    selected: usize,
    scale: f32,
    config: SceneConfig,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            objects: Vec::new(),
            selected: 0,
            scale: config.initial_scale,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Scale applied by the last grow or shrink
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Append an object and select it
    pub fn push(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
        self.selected = self.objects.len() - 1;
    }

    /// Append a default object of `kind` and select it
    pub fn create(&mut self, kind: ObjectKind) {
        log::debug!("Creating {}", kind);
        self.push(factory::create(kind));
    }

    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.objects.len()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&Object> {
        self.objects.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut Object> {
        self.objects.get_mut(self.selected)
    }

    /// Select the following object, wrapping around to the first
    pub fn select_next(&mut self) {
        self.selected += 1;
        if self.selected >= self.objects.len() {
            self.selected = 0;
        }
    }

    pub fn move_selected(&mut self, delta: Vec2) -> bool {
        self.with_selected(|object| object.translate(delta))
    }

    pub fn recolor_selected(&mut self, color: Color32) -> bool {
        self.with_selected(|object| object.change_color(color))
    }

    pub fn toggle_selected_visibility(&mut self) -> bool {
        self.with_selected(|object| {
            let visible = object.is_visible();
            object.set_visible(!visible);
        })
    }

    /// Bump the scale by one increment and resize the selection to it
    pub fn grow_selected(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.scale += self.config.scale_increment;
        let scale = self.scale;
        self.with_selected(|object| object.change_size(scale))
    }

    /// Lower the scale by one increment, never below `min_scale`, and resize
    /// the selection to it
    pub fn shrink_selected(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.scale = (self.scale - self.config.scale_increment).max(self.config.min_scale);
        let scale = self.scale;
        self.with_selected(|object| object.change_size(scale))
    }

    fn with_selected(&mut self, f: impl FnOnce(&mut Object)) -> bool {
        match self.selected_mut() {
            Some(object) => {
                f(object);
                true
            }
            None => false,
        }
    }

    /// Drop every object
    pub fn clear(&mut self) {
        self.objects.clear();
        self.selected = 0;
    }

    pub fn paint(&self, shapes: &mut Vec<Shape>) {
        for object in &self.objects {
            object.paint(shapes);
        }
    }

    pub fn draw(&self, painter: &Painter) {
        for object in &self.objects {
            object.draw(painter);
        }
    }

    pub fn save_to<W: Write>(&self, writer: W) -> CodecResult<()> {
        codec::save(writer, &self.objects)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> CodecResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CodecError::io_at(path, e))?;
        log::info!("Saving scene to {}", path.display());
        self.save_to(BufWriter::new(file))
    }

    /// Append the objects read from `reader`.
    ///
    /// Objects decoded before a malformed record are kept.
    pub fn load_from<R: Read>(&mut self, reader: R) -> CodecResult<usize> {
        codec::load(reader, &mut self.objects)
    }

    /// Append the objects stored at `path`. The scene is left untouched if the
    /// file cannot be opened.
    pub fn load(&mut self, path: impl AsRef<Path>) -> CodecResult<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CodecError::io_at(path, e))?;
        log::info!("Loading scene from {}", path.display());
        self.load_from(BufReader::new(file))
    }

    /// Indented tree of every object, one per line, selection marked with `>`
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (i, object) in self.objects.iter().enumerate() {
            let marker = if Some(i) == self.selected_index() { '>' } else { ' ' };
            outline_object(&mut out, object, marker, 0);
        }
        out
    }
}

fn outline_object(out: &mut String, object: &Object, marker: char, depth: usize) {
    let _ = writeln!(out, "{}{}{}", marker, "  ".repeat(depth), object);
    if let Some(aggregate) = object.as_aggregate() {
        for child in aggregate.children() {
            outline_object(out, child, ' ', depth + 1);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Object>> for Scene {
    fn from(objects: Vec<Object>) -> Self {
        Self {
            objects,
            ..Self::new()
        }
    }
}
