use crate::controllers::interactive::events::{
    InputEvent, PointerButton, PointerButtons, WheelDirection,
};
use crate::core::data::point::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Tracks cursor position and held buttons so winit's separate window
/// events can be turned into self-contained [`InputEvent`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    position: Point,
    buttons: PointerButtons,
}

impl PointerInput {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => Some(self.wheel(*delta)),
            WindowEvent::CursorLeft { .. } => Some(self.cursor_left()),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.position = Point::new(position.x, position.y);

        InputEvent::PointerMove {
            position: self.position,
            buttons: self.buttons,
        }
    }

    /// Secondary presses become context-menu requests; the secondary
    /// button is otherwise only read as a held button during moves.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            _ => return None,
        };

        match state {
            ElementState::Pressed => {
                self.buttons.set(button, true);

                if button == PointerButton::Secondary {
                    return Some(InputEvent::ContextMenu);
                }

                Some(InputEvent::PointerDown {
                    button,
                    position: self.position,
                })
            }
            ElementState::Released => {
                self.buttons.set(button, false);
                Some(InputEvent::PointerUp)
            }
        }
    }

    pub fn wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(offset) => offset.y,
        };

        let direction = if vertical > 0.0 {
            WheelDirection::Away
        } else {
            WheelDirection::Toward
        };

        InputEvent::Wheel {
            position: self.position,
            direction,
        }
    }

    pub fn cursor_left(&mut self) -> InputEvent {
        self.buttons = PointerButtons::NONE;
        InputEvent::PointerLeave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    fn held_buttons(input: &mut PointerInput) -> PointerButtons {
        match input.cursor_moved(at(0.0, 0.0)) {
            InputEvent::PointerMove { buttons, .. } => buttons,
            other => panic!("expected a pointer move, got {other:?}"),
        }
    }

    #[test]
    fn cursor_moves_report_held_buttons() {
        let mut input = PointerInput::default();

        assert_eq!(
            input.cursor_moved(at(5.0, 6.0)),
            InputEvent::PointerMove {
                position: Point::new(5.0, 6.0),
                buttons: PointerButtons::NONE,
            }
        );

        input.mouse_input(ElementState::Pressed, MouseButton::Right);

        assert_eq!(
            input.cursor_moved(at(7.0, 8.0)),
            InputEvent::PointerMove {
                position: Point::new(7.0, 8.0),
                buttons: PointerButtons::SECONDARY,
            }
        );
    }

    #[test]
    fn left_press_starts_pointer_down_at_cursor() {
        let mut input = PointerInput::default();
        input.cursor_moved(at(12.0, 34.0));

        assert_eq!(
            input.mouse_input(ElementState::Pressed, MouseButton::Left),
            Some(InputEvent::PointerDown {
                button: PointerButton::Primary,
                position: Point::new(12.0, 34.0),
            })
        );
        assert!(held_buttons(&mut input).primary);
    }

    #[test]
    fn right_press_requests_context_menu() {
        let mut input = PointerInput::default();

        assert_eq!(
            input.mouse_input(ElementState::Pressed, MouseButton::Right),
            Some(InputEvent::ContextMenu)
        );
        assert!(held_buttons(&mut input).secondary_only());
    }

    #[test]
    fn any_release_is_pointer_up() {
        let mut input = PointerInput::default();
        input.mouse_input(ElementState::Pressed, MouseButton::Middle);

        assert_eq!(
            input.mouse_input(ElementState::Released, MouseButton::Middle),
            Some(InputEvent::PointerUp)
        );
        assert_eq!(held_buttons(&mut input), PointerButtons::NONE);
    }

    #[test]
    fn extra_buttons_are_ignored() {
        let mut input = PointerInput::default();

        assert_eq!(
            input.mouse_input(ElementState::Pressed, MouseButton::Back),
            None
        );
        assert_eq!(held_buttons(&mut input), PointerButtons::NONE);
    }

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        let mut input = PointerInput::default();
        input.cursor_moved(at(1.0, 2.0));

        assert_eq!(
            input.wheel(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Wheel {
                position: Point::new(1.0, 2.0),
                direction: WheelDirection::Away,
            }
        );
        assert_eq!(
            input.wheel(MouseScrollDelta::PixelDelta(at(0.0, -40.0))),
            InputEvent::Wheel {
                position: Point::new(1.0, 2.0),
                direction: WheelDirection::Toward,
            }
        );
    }

    #[test]
    fn horizontal_only_scroll_zooms_out() {
        let input = PointerInput::default();

        assert!(matches!(
            input.wheel(MouseScrollDelta::LineDelta(3.0, 0.0)),
            InputEvent::Wheel {
                direction: WheelDirection::Toward,
                ..
            }
        ));
    }

    #[test]
    fn leaving_releases_all_buttons() {
        let mut input = PointerInput::default();
        input.mouse_input(ElementState::Pressed, MouseButton::Left);
        input.mouse_input(ElementState::Pressed, MouseButton::Right);

        assert_eq!(input.cursor_left(), InputEvent::PointerLeave);
        assert_eq!(held_buttons(&mut input), PointerButtons::NONE);
    }
}
