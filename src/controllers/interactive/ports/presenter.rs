use crate::core::actions::draw_fractal::resolution::Resolution;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives each finished pass as one whole-surface write.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &PixelBuffer, resolution: Resolution);
}
