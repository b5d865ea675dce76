//! Pointer-driven state machine for placing, moving and resizing shapes.
//!
//! ```text
//!                 down on a shape          move: translate by delta
//!            ┌────────────────────► Moving ──┐
//!            │                        ▲      │
//!            │                        └──────┘
//!  ┌──────┐  │
//!  │ Idle ├──┤                         up: commit or discard
//!  └──▲───┘  │                               │
//!     │      │    down on empty canvas       │
//!     │      └────────────────────► Dragging ┤
//!     │                               ▲      │
//!     │                               └──────┘ move: set bottom-right
//!     └──────────────────────────────────────┘
//! ```
//!
//! The active shape is owned by the current state. Picking a shape up moves
//! it out of the [`ShapeCollection`]; releasing either moves it back in or
//! drops it, so a shape is never held by both at once.
//!
//! Release only keeps the active shape when its bounding box is empty. A shape
//! that was dragged or moved to a non-empty box is dropped on release.

use egui::Pos2;
use log::{debug, error};

use crate::collection::ShapeCollection;
use crate::input::PointerEvent;
use crate::renderer::{RenderTarget, RepaintSink};
use crate::shape::Shape;
use crate::tools::{ToolChange, ToolSettings};

/// Which manipulation, if any, is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    None,
    Moving,
    Dragging,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::None => "Idle",
            Operation::Moving => "Moving",
            Operation::Dragging => "Dragging",
        }
    }
}

#[derive(Debug, Default)]
enum Interaction {
    #[default]
    Idle,
    /// An existing shape lifted out of the collection
    Moving { shape: Shape, last_move_pos: Pos2 },
    /// A freshly created shape whose bottom-right corner follows the pointer
    Dragging { shape: Shape },
}

#[derive(Debug, Default)]
pub struct InteractionController {
    shapes: ShapeCollection,
    settings: ToolSettings,
    interaction: Interaction,
}

impl InteractionController {
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            shapes: ShapeCollection::new(),
            settings,
            interaction: Interaction::Idle,
        }
    }

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn operation(&self) -> Operation {
        match self.interaction {
            Interaction::Idle => Operation::None,
            Interaction::Moving { .. } => Operation::Moving,
            Interaction::Dragging { .. } => Operation::Dragging,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    /// The shape currently being moved or dragged
    pub fn active_shape(&self) -> Option<&Shape> {
        match &self.interaction {
            Interaction::Idle => None,
            Interaction::Moving { shape, .. } | Interaction::Dragging { shape } => Some(shape),
        }
    }

    /// Last pointer position seen while moving a shape
    pub fn last_move_position(&self) -> Option<Pos2> {
        match self.interaction {
            Interaction::Moving { last_move_pos, .. } => Some(last_move_pos),
            _ => None,
        }
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent, repaint: &dyn RepaintSink) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos, repaint),
            PointerEvent::Move(pos) => self.pointer_move(pos, repaint),
            PointerEvent::Up => self.pointer_up(repaint),
        }
    }

    /// Start moving the topmost shape under `pos`, or start dragging out a
    /// new one from the current tool settings.
    ///
    /// # Panics
    ///
    /// If an interaction is already in progress. The event source must
    /// deliver an up before the next down.
    pub fn pointer_down(&mut self, pos: Pos2, repaint: &dyn RepaintSink) {
        if !self.is_idle() {
            error!(
                "Pointer down at {:?} while {} is in progress",
                pos,
                self.operation().name()
            );
            panic!("pointer down received while not idle");
        }

        self.interaction = match self.shapes.take_topmost_containing(pos) {
            Some(shape) => {
                debug!("Picked up shape {} at {:?}", shape.id(), pos);
                Interaction::Moving {
                    shape,
                    last_move_pos: pos,
                }
            }
            None => {
                let shape = Shape::create(
                    self.settings.current_kind(),
                    pos,
                    self.settings.current_stroke(),
                    self.settings.current_fill(),
                );
                debug!(
                    "Started {} {} at {:?}",
                    shape.kind().name(),
                    shape.id(),
                    pos
                );
                Interaction::Dragging { shape }
            }
        };
        repaint.request_repaint();
    }

    pub fn pointer_move(&mut self, pos: Pos2, repaint: &dyn RepaintSink) {
        match &mut self.interaction {
            Interaction::Idle => return,
            Interaction::Moving {
                shape,
                last_move_pos,
            } => {
                let offset = pos - *last_move_pos;
                *last_move_pos = pos;
                shape.translate(offset);
            }
            Interaction::Dragging { shape } => shape.set_right_bottom(pos),
        }
        repaint.request_repaint();
    }

    pub fn pointer_up(&mut self, repaint: &dyn RepaintSink) {
        let shape = match std::mem::take(&mut self.interaction) {
            Interaction::Idle => return,
            Interaction::Moving { shape, .. } | Interaction::Dragging { shape } => shape,
        };

        if !shape.is_empty() {
            debug!("Discarding shape {} ({:?})", shape.id(), shape.bounds());
        } else {
            self.shapes.append(shape);
        }
        repaint.request_repaint();
    }

    /// Forward a tool-selection change. Only background changes alter what is
    /// on screen right away.
    pub fn tool_changed(&mut self, change: ToolChange, repaint: &dyn RepaintSink) {
        self.settings.apply(change);
        if change.is_background() {
            repaint.request_repaint();
        }
    }

    /// Committed shapes in paint order, then the active shape on top
    pub fn paint(&self, target: &mut dyn RenderTarget) {
        for shape in &self.shapes {
            shape.draw(target);
        }
        if let Some(shape) = self.active_shape() {
            shape.draw(target);
        }
    }
}
