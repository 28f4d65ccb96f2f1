//! Interactive renderer for real-time fractal exploration.
//!
//! Turns pointer and wheel input into view changes and keeps the display
//! responsive by drawing a coarse preview while the user interacts, then a
//! single full-resolution pass once input settles.
//!
//! # Architecture
//!
//! The renderer follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated from the host window
//! - **Output**: `FramePresenterPort` trait receiving each finished frame
//! - **Core**: Uses domain actions from `core/` for the actual computation

pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod renderer;
mod settle_timer;

pub use data::RendererConfig;
pub use errors::RendererError;
pub use events::{EventResponse, InputEvent, PointerButton, PointerButtons, WheelDirection};
pub use ports::FramePresenterPort;
pub use renderer::{InteractiveRenderer, PassReport, RendererSnapshot};
pub use settle_timer::SettleTimer;
