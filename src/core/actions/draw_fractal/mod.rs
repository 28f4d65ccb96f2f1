#[allow(clippy::module_inception)]
pub mod draw_fractal;
pub mod ports;
pub mod resolution;
