/// A position in surface pixel space. Pointer events arrive with sub-pixel
/// precision, so coordinates are kept as `f64`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn from_pixel(x: u32, y: u32) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}
