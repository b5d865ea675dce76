use egui::{Pos2, Rect, Vec2};

/// Axis-aligned bounding box spanned by two corners.
///
/// The corners are kept exactly as given: dragging up or left of the anchor
/// produces a negative width/height rather than swapping the corners.
/// Use [`BoundingBox::to_rect`] when a normalized rectangle is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    top_left: Pos2,
    bottom_right: Pos2,
}

impl BoundingBox {
    pub fn new(top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// A zero-sized box with both corners at `point`
    pub fn from_point(point: Pos2) -> Self {
        Self::new(point, point)
    }

    pub fn top_left(&self) -> Pos2 {
        self.top_left
    }

    pub fn bottom_right(&self) -> Pos2 {
        self.bottom_right
    }

    /// Signed width, `bottom_right.x - top_left.x`
    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Signed height, `bottom_right.y - top_left.y`
    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn size(&self) -> Vec2 {
        self.bottom_right - self.top_left
    }

    /// True iff both width and height are exactly zero.
    ///
    /// A box that collapsed to a horizontal or vertical line is not empty.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    /// Inclusive containment test against the normalized extent of the box
    pub fn contains(&self, point: Pos2) -> bool {
        let rect = self.to_rect();
        point.x >= rect.min.x && point.x <= rect.max.x && point.y >= rect.min.y && point.y <= rect.max.y
    }

    /// Replaces the second corner, leaving the top-left corner alone
    pub fn set_bottom_right(&mut self, point: Pos2) {
        self.bottom_right = point;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.top_left += offset;
        self.bottom_right += offset;
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_two_pos(self.top_left, self.bottom_right)
    }
}
