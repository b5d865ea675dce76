use egui::{Context, Event, PointerButton, Pos2, Rect};

/// Pointer events the interaction state machine consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(Pos2),
    /// Pointer moved (with or without the button held)
    Move(Pos2),
    /// Primary button released
    Up,
}

/// Turns the frame's raw egui events into discrete [`PointerEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// A `Down` was emitted and its `Up` hasn't been yet
    press_open: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            press_open: false,
        }
    }

    /// Process this frame's egui input. Presses only count inside `canvas_rect`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let events = ctx.input(|input| input.events.clone());
        self.translate(&events, canvas_rect)
    }

    /// Translate raw events in the order they arrived, so a release and the
    /// next press within one frame come out as `Up` then `Down`.
    ///
    /// Every emitted `Down` is preceded by an `Up` for any press still open.
    pub fn translate(&mut self, events: &[Event], canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut out = Vec::new();

        for event in events {
            match event {
                Event::PointerMoved(pos) => self.move_to(*pos, &mut out),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if !canvas_rect.contains(*pos) {
                        continue;
                    }
                    self.move_to(*pos, &mut out);
                    if self.press_open {
                        // The release was lost (e.g. it happened outside the window)
                        out.push(PointerEvent::Up);
                    }
                    out.push(PointerEvent::Down(*pos));
                    self.press_open = true;
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if !self.press_open {
                        continue;
                    }
                    // Released outside the canvas still ends the interaction
                    self.move_to(*pos, &mut out);
                    out.push(PointerEvent::Up);
                    self.press_open = false;
                }
                Event::PointerGone => self.last_pointer_pos = None,
                _ => {}
            }
        }

        out
    }

    fn move_to(&mut self, pos: Pos2, out: &mut Vec<PointerEvent>) {
        if self.last_pointer_pos != Some(pos) {
            out.push(PointerEvent::Move(pos));
            self.last_pointer_pos = Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, pos2};

    use crate::interaction::InteractionController;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::PointerMoved(pos2(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_move_only_when_position_changes() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.translate(&[moved(5.0, 5.0)], canvas()),
            vec![PointerEvent::Move(pos2(5.0, 5.0))]
        );
        assert!(handler.translate(&[moved(5.0, 5.0)], canvas()).is_empty());
    }

    #[test]
    fn test_press_inside_canvas() {
        let mut handler = InputHandler::new();
        handler.translate(&[moved(10.0, 10.0)], canvas());

        assert_eq!(
            handler.translate(&[button(10.0, 10.0, true)], canvas()),
            vec![PointerEvent::Down(pos2(10.0, 10.0))]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let events = [moved(150.0, 10.0), button(150.0, 10.0, true), button(150.0, 10.0, false)];
        assert_eq!(
            handler.translate(&events, canvas()),
            vec![PointerEvent::Move(pos2(150.0, 10.0))]
        );
    }

    #[test]
    fn test_release_outside_canvas_ends_press() {
        let mut handler = InputHandler::new();
        handler.translate(&[button(10.0, 10.0, true)], canvas());

        assert_eq!(
            handler.translate(&[button(140.0, 30.0, false)], canvas()),
            vec![PointerEvent::Move(pos2(140.0, 30.0)), PointerEvent::Up]
        );
    }

    #[test]
    fn test_release_then_press_in_one_frame_keeps_order() {
        let mut handler = InputHandler::new();
        let first = handler.translate(&[button(10.0, 10.0, true)], canvas());
        let second = handler.translate(&[button(10.0, 10.0, false), button(10.0, 10.0, true)], canvas());

        assert_eq!(
            first,
            vec![PointerEvent::Move(pos2(10.0, 10.0)), PointerEvent::Down(pos2(10.0, 10.0))]
        );
        assert_eq!(second, vec![PointerEvent::Up, PointerEvent::Down(pos2(10.0, 10.0))]);
    }

    #[test]
    fn test_fast_double_click_drives_controller_without_panic() {
        let repaint = egui::Context::default();
        let mut handler = InputHandler::new();
        let mut controller = InteractionController::default();

        let frames = [
            vec![button(10.0, 10.0, true)],
            vec![button(10.0, 10.0, false), button(10.0, 10.0, true)],
            vec![button(10.0, 10.0, false)],
        ];
        for frame in &frames {
            for event in handler.translate(frame, canvas()) {
                controller.handle_pointer_event(event, &repaint);
            }
        }

        assert!(controller.is_idle());
        assert_eq!(controller.shapes().len(), 1);
    }

    #[test]
    fn test_lost_release_is_closed_before_next_press() {
        let mut handler = InputHandler::new();
        handler.translate(&[button(10.0, 10.0, true)], canvas());

        assert_eq!(
            handler.translate(&[button(40.0, 40.0, true)], canvas()),
            vec![
                PointerEvent::Move(pos2(40.0, 40.0)),
                PointerEvent::Up,
                PointerEvent::Down(pos2(40.0, 40.0)),
            ]
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut handler = InputHandler::new();
        handler.translate(&[moved(10.0, 10.0)], canvas());
        assert!(handler.translate(&[button(10.0, 10.0, false)], canvas()).is_empty());
    }
}
