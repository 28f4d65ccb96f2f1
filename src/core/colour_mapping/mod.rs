pub mod errors;
pub mod grayscale;
