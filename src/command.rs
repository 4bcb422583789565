use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::object::ObjectKind;
use crate::scene::Scene;

/// Direction of a one-step nudge. Screen coordinates: y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self, step: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
        }
    }
}

/// Editing actions a front end can apply to a [`Scene`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add a default object of this kind and select it
    Create(ObjectKind),
    /// Cycle the selection
    SelectNext,
    /// Move the selection by the configured step
    Nudge(Direction),
    /// Move the selection by an arbitrary delta
    Move { delta: Vec2 },
    Recolor(Color32),
    Grow,
    Shrink,
    ToggleVisibility,
    Clear,
}

impl Command {
    /// The recolor presets offered by the editor
    pub const PALETTE: [Color32; 3] = [Color32::RED, Color32::GREEN, Color32::BLUE];

    /// Apply the command. Returns false when it had nothing to act on.
    pub fn execute(&self, scene: &mut Scene) -> bool {
        log::debug!("Executing {:?}", self);
        match self {
            Command::Create(kind) => {
                scene.create(*kind);
                true
            }
            Command::SelectNext => {
                scene.select_next();
                !scene.is_empty()
            }
            Command::Nudge(direction) => {
                let delta = direction.delta(scene.config().move_step);
                scene.move_selected(delta)
            }
            Command::Move { delta } => scene.move_selected(*delta),
            Command::Recolor(color) => scene.recolor_selected(*color),
            Command::Grow => scene.grow_selected(),
            Command::Shrink => scene.shrink_selected(),
            Command::ToggleVisibility => scene.toggle_selected_visibility(),
            Command::Clear => {
                let had_objects = !scene.is_empty();
                scene.clear();
                had_objects
            }
        }
    }
}
