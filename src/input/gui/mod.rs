//! Windowed front end: winit for the window and pointer input, pixels for
//! the framebuffer and egui for the control panel.

pub mod app;
pub mod commands;
