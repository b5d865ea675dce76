use log::info;

use crate::shape::ShapeKind;
use crate::style::{FillStyle, StrokeStyle};

/// A tool-selection notification coming from the menus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolChange {
    Kind(ShapeKind),
    Stroke(StrokeStyle),
    Fill(FillStyle),
    /// Canvas background; not stored here, only forwarded
    Background(FillStyle),
}

impl ToolChange {
    pub fn is_background(&self) -> bool {
        matches!(self, ToolChange::Background(_))
    }
}

/// What the next created shape will look like.
///
/// Changes only affect shapes created afterwards; existing and in-progress
/// shapes keep the style they were created with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolSettings {
    pending_kind: ShapeKind,
    stroke: StrokeStyle,
    fill: FillStyle,
}

impl ToolSettings {
    pub fn new(pending_kind: ShapeKind, stroke: StrokeStyle, fill: FillStyle) -> Self {
        Self {
            pending_kind,
            stroke,
            fill,
        }
    }

    pub fn set_pending_kind(&mut self, kind: ShapeKind) {
        self.pending_kind = kind;
    }

    pub fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.stroke = stroke;
    }

    pub fn set_fill(&mut self, fill: FillStyle) {
        self.fill = fill;
    }

    pub fn current_kind(&self) -> ShapeKind {
        self.pending_kind
    }

    pub fn current_stroke(&self) -> StrokeStyle {
        self.stroke
    }

    pub fn current_fill(&self) -> FillStyle {
        self.fill
    }

    /// Route a tool-selection notification to the matching setter
    pub fn apply(&mut self, change: ToolChange) {
        match change {
            ToolChange::Kind(kind) => {
                info!("Next shape: {}", kind.name());
                self.set_pending_kind(kind);
            }
            ToolChange::Stroke(stroke) => {
                info!("Pen changed to {:?}", stroke.color);
                self.set_stroke(stroke);
            }
            ToolChange::Fill(fill) => {
                info!("Brush changed to {:?}", fill.color);
                self.set_fill(fill);
            }
            ToolChange::Background(_) => {}
        }
    }
}
