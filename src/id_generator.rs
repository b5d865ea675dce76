use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

/// Process-unique identity of a shape, stable across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn generate_id() -> ShapeId {
    ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst))
}
