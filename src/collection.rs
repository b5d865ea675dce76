use egui::Pos2;
use log::debug;

use crate::error::CollectionError;
use crate::id_generator::ShapeId;
use crate::shape::Shape;

/// Committed shapes in paint order: index 0 is painted first, the last
/// element ends up visually on top.
#[derive(Debug, Default)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add `shape` as the new topmost shape
    pub fn append(&mut self, shape: Shape) {
        debug!("Appending shape {} ({})", shape.id(), shape.kind().name());
        self.shapes.push(shape);
    }

    /// Remove the shape with the given identity and hand ownership back.
    ///
    /// Paint order of the remaining shapes is preserved.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, CollectionError> {
        let index = self
            .shapes
            .iter()
            .position(|shape| shape.id() == id)
            .ok_or(CollectionError::NotFound(id))?;
        Ok(self.shapes.remove(index))
    }

    /// The visually topmost shape containing `pos`; later insertions win ties
    pub fn find_topmost_containing(&self, pos: Pos2) -> Option<&Shape> {
        self.shapes.iter().rev().find(|shape| shape.contains(pos))
    }

    /// Lift the topmost shape under `pos` out of the collection
    pub fn take_topmost_containing(&mut self, pos: Pos2) -> Option<Shape> {
        let index = self.shapes.iter().rposition(|shape| shape.contains(pos))?;
        Some(self.shapes.remove(index))
    }

    /// Shapes in paint order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains_id(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|shape| shape.id() == id)
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
