pub mod interaction_state;
pub mod renderer_config;

pub use interaction_state::InteractionState;
pub use renderer_config::RendererConfig;
