// src/renderer.rs
use egui::epaint::EllipseShape;
use egui::{Painter, Pos2};

use crate::geometry::BoundingBox;
use crate::style::{FillStyle, StrokeStyle};

/// Something shapes can be drawn onto.
///
/// Style calls are sticky: every draw call uses the most recently set
/// stroke and fill, the same way a pen/brush device context works.
pub trait RenderTarget {
    fn set_stroke(&mut self, stroke: StrokeStyle);
    fn set_fill(&mut self, fill: FillStyle);
    fn draw_line(&mut self, from: Pos2, to: Pos2);
    /// Draw the ellipse inscribed in `bounds`
    fn draw_ellipse(&mut self, bounds: &BoundingBox);
    fn draw_rectangle(&mut self, bounds: &BoundingBox);
}

/// Receives "the picture changed, redraw" notifications
pub trait RepaintSink {
    fn request_repaint(&self);
}

impl RepaintSink for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// [`RenderTarget`] backed by an egui [`Painter`]
pub struct PainterTarget<'a> {
    painter: &'a Painter,
    stroke: StrokeStyle,
    fill: FillStyle,
}

impl<'a> PainterTarget<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            stroke: StrokeStyle::default(),
            fill: FillStyle::default(),
        }
    }
}

impl RenderTarget for PainterTarget<'_> {
    fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.stroke = stroke;
    }

    fn set_fill(&mut self, fill: FillStyle) {
        self.fill = fill;
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        self.painter.line_segment([from, to], self.stroke.to_egui());
    }

    fn draw_ellipse(&mut self, bounds: &BoundingBox) {
        let rect = bounds.to_rect();
        self.painter.add(egui::Shape::Ellipse(EllipseShape {
            center: rect.center(),
            radius: rect.size() / 2.0,
            fill: self.fill.color,
            stroke: self.stroke.to_egui(),
        }));
    }

    fn draw_rectangle(&mut self, bounds: &BoundingBox) {
        let rect = bounds.to_rect();
        self.painter.rect_filled(rect, 0.0, self.fill.color);
        self.painter.rect_stroke(rect, 0.0, self.stroke.to_egui());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2, vec2};

    /// Run one egui pass, letting `paint` draw on the background layer, and
    /// return the shapes that pass produced.
    fn painted_shapes(mut paint: impl FnMut(&mut PainterTarget<'_>)) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut target = PainterTarget::new(&painter);
            paint(&mut target);
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    #[test]
    fn test_nothing_drawn_paints_nothing() {
        assert!(painted_shapes(|_| {}).is_empty());
    }

    #[test]
    fn test_painter_target_emits_each_primitive() {
        let bounds = BoundingBox::new(pos2(10.0, 10.0), pos2(60.0, 40.0));
        let shapes = painted_shapes(|target| {
            target.set_stroke(StrokeStyle::new(Color32::RED, 2.0));
            target.set_fill(FillStyle::new(Color32::BLUE));
            target.draw_line(bounds.top_left(), bounds.bottom_right());
            target.draw_ellipse(&bounds);
            target.draw_rectangle(&bounds);
        });

        // line, ellipse, rectangle fill + rectangle outline
        assert_eq!(shapes.len(), 4);
        assert!(matches!(shapes[0], egui::Shape::LineSegment { .. }));
        assert!(matches!(shapes[2], egui::Shape::Rect(_)));
        assert!(matches!(shapes[3], egui::Shape::Rect(_)));
    }

    #[test]
    fn test_ellipse_is_inscribed_in_normalized_bounds() {
        // Dragged up-left of the anchor
        let bounds = BoundingBox::new(pos2(50.0, 40.0), pos2(10.0, 20.0));
        let shapes = painted_shapes(|target| {
            target.set_stroke(StrokeStyle::new(Color32::BLACK, 1.0));
            target.set_fill(FillStyle::new(Color32::GREEN));
            target.draw_ellipse(&bounds);
        });

        let egui::Shape::Ellipse(ellipse) = &shapes[0] else {
            panic!("expected an ellipse, got {:?}", shapes[0]);
        };
        assert_eq!(ellipse.center, pos2(30.0, 30.0));
        assert_eq!(ellipse.radius, vec2(20.0, 10.0));
        assert_eq!(ellipse.fill, Color32::GREEN);
        assert_eq!(ellipse.stroke, egui::Stroke::new(1.0, Color32::BLACK));
    }
}
