pub mod renderer;

pub use renderer::RendererError;
