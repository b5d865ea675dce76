#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod collection;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod style;
pub mod tools;

pub use app::DrawApp;
pub use collection::ShapeCollection;
pub use config::AppConfig;
pub use error::{CollectionError, ConfigError};
pub use geometry::BoundingBox;
pub use id_generator::ShapeId;
pub use input::{InputHandler, PointerEvent};
pub use interaction::{InteractionController, Operation};
pub use renderer::{PainterTarget, RenderTarget, RepaintSink};
pub use shape::{Shape, ShapeKind};
pub use style::{FillStyle, NamedColor, StrokeStyle};
pub use tools::{ToolChange, ToolSettings};
