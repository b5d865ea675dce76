mod settings;

pub use settings::{ToolChange, ToolSettings};
