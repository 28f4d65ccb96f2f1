pub mod input;
pub mod response;

pub use input::{InputEvent, PointerButton, PointerButtons, WheelDirection};
pub use response::EventResponse;
