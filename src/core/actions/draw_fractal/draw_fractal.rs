use crate::core::actions::draw_fractal::ports::colour_map::ColourMap;
use crate::core::actions::draw_fractal::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DrawFractalError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for DrawFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for DrawFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for DrawFractalError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Overwrites `buffer` with the fractal seen through `view`.
///
/// Samples every `step`-th pixel on both axes and tiles each sampled colour
/// across the `step × step` block it stands for, clipped at the surface
/// edges. A `step` of 1 evaluates every pixel.
pub fn draw_fractal<A, C>(
    buffer: &mut PixelBuffer,
    view: &ViewState,
    algorithm: &A,
    colour_map: &C,
    step: u32,
) -> Result<(), DrawFractalError>
where
    A: EscapeTimeAlgorithm,
    C: ColourMap<T = u32>,
    C::Failure: 'static,
{
    let surface = buffer.surface();
    let step = step.max(1);

    for y in (0..surface.height()).step_by(step as usize) {
        for x in (0..surface.width()).step_by(step as usize) {
            let point = pixel_to_complex_coords(Point::from_pixel(x, y), view, surface);
            let iterations = algorithm.compute(point);
            let colour = colour_map
                .map(iterations)
                .map_err(|err| DrawFractalError::ColourMap(Box::new(err)))?;

            buffer.fill_block(x, y, step, colour)?;
        }
    }

    Ok(())
}
