/// What the host should do after the renderer handled an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// The host's default action (page scroll, context menu) must not run.
    pub suppress_default: bool,
    /// A new frame was handed to the presenter.
    pub presented: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        suppress_default: false,
        presented: false,
    };

    #[must_use]
    pub const fn redrawn(presented: bool) -> Self {
        Self {
            suppress_default: false,
            presented,
        }
    }
}
