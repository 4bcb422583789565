use egui::Color32;

// Common constants for all object types
pub const MIN_SIZE: f32 = 0.1;

/// Color shown while an object is hidden
pub const INVISIBLE: Color32 = Color32::TRANSPARENT;

/// Fill state shared by every leaf shape.
///
/// `stored` is the color the user asked for. `displayed` is what gets painted,
/// which is [`INVISIBLE`] while the shape is hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    displayed: Color32,
    stored: Color32,
    visible: bool,
}

impl Fill {
    pub fn new(color: Color32) -> Self {
        Self {
            displayed: color,
            stored: color,
            visible: true,
        }
    }

    /// The color currently painted
    pub fn displayed(&self) -> Color32 {
        self.displayed
    }

    /// The color restored when the shape becomes visible again
    pub fn stored(&self) -> Color32 {
        self.stored
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_color(&mut self, color: Color32) {
        self.stored = color;
        if self.visible {
            self.displayed = color;
        }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.displayed = if visible { self.stored } else { INVISIBLE };
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

/// Clamp a requested size to something every shape can be scaled to.
///
/// Positive finite targets pass through untouched. Zero, negatives, NaN and
/// infinities become [`MIN_SIZE`].
pub(crate) fn clamp_size(target: f32) -> f32 {
    if target > 0.0 && target.is_finite() {
        target
    } else {
        log::warn!("Size {} is out of range, clamping to {}", target, MIN_SIZE);
        MIN_SIZE
    }
}
