#![warn(clippy::all, rust_2018_idioms)]

pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod object;
pub mod scene;

pub use codec::{CodecError, CodecResult, Registry};
pub use command::{Command, Direction};
pub use config::SceneConfig;
pub use error::ConfigError;
pub use object::{Aggregate, Circle, GraphicObject, Object, ObjectKind, Rectangle, Triangle};
pub use scene::Scene;
