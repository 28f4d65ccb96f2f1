use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Buttons held while the pointer moves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const NONE: Self = Self {
        primary: false,
        secondary: false,
        middle: false,
    };

    pub const SECONDARY: Self = Self {
        primary: false,
        secondary: true,
        middle: false,
    };

    #[must_use]
    pub fn secondary_only(self) -> bool {
        self == Self::SECONDARY
    }

    pub fn set(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.primary = held,
            PointerButton::Secondary => self.secondary = held,
            PointerButton::Middle => self.middle = held,
        }
    }
}

/// Scroll direction relative to the user: `Away` is wheel-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Away,
    Toward,
}

/// Host-neutral input consumed by the renderer. Positions are in surface
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        position: Point,
    },
    PointerMove {
        position: Point,
        buttons: PointerButtons,
    },
    PointerUp,
    PointerLeave,
    Wheel {
        position: Point,
        direction: WheelDirection,
    },
    ContextMenu,
    FractalKindChanged(FractalKind),
    ResetView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_only_rejects_chords() {
        let mut buttons = PointerButtons::NONE;
        assert!(!buttons.secondary_only());

        buttons.set(PointerButton::Secondary, true);
        assert!(buttons.secondary_only());

        buttons.set(PointerButton::Primary, true);
        assert!(!buttons.secondary_only());

        buttons.set(PointerButton::Primary, false);
        buttons.set(PointerButton::Middle, true);
        assert!(!buttons.secondary_only());
    }
}
