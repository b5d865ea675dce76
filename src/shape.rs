use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::id_generator::{self, ShapeId};
use crate::renderer::RenderTarget;
use crate::style::{FillStyle, StrokeStyle};

/// The closed set of shapes the editor can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Line, ShapeKind::Ellipse, ShapeKind::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

/// A committed or in-progress shape: a kind, a bounding box and the style
/// captured when it was created.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    bounds: BoundingBox,
    stroke: StrokeStyle,
    fill: FillStyle,
}

impl Shape {
    /// Create a zero-sized shape anchored at `anchor`
    pub fn create(kind: ShapeKind, anchor: Pos2, stroke: StrokeStyle, fill: FillStyle) -> Self {
        Self {
            id: id_generator::generate_id(),
            kind,
            bounds: BoundingBox::from_point(anchor),
            stroke,
            fill,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    pub fn fill(&self) -> FillStyle {
        self.fill
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Resize by moving the bottom-right corner; the anchor stays put
    pub fn set_right_bottom(&mut self, pos: Pos2) {
        self.bounds.set_bottom_right(pos);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.bounds.translate(offset);
    }

    /// Apply this shape's style to `target`, then emit its geometry
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.set_stroke(self.stroke);
        target.set_fill(self.fill);
        match self.kind {
            ShapeKind::Line => target.draw_line(self.bounds.top_left(), self.bounds.bottom_right()),
            ShapeKind::Ellipse => target.draw_ellipse(&self.bounds),
            ShapeKind::Rectangle => target.draw_rectangle(&self.bounds),
        }
    }
}
