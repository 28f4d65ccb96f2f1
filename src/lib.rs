pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::interactive::{
    EventResponse, FramePresenterPort, InputEvent, InteractiveRenderer, PointerButton,
    PointerButtons, RendererConfig, RendererError, WheelDirection,
};
pub use crate::core::actions::draw_fractal::resolution::Resolution;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::surface::SurfaceSize;
pub use crate::core::fractals::fractal_kinds::FractalKind;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
