//! Port definitions for the interactive renderer.
//!
//! Contains the traits the renderer uses to hand finished frames to the
//! display surface.

pub mod presenter;

pub use presenter::FramePresenterPort;
