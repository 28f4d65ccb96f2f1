use crate::core::actions::draw_fractal::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;

/// Maps escape counts to grey levels with `255 * sqrt(n / cap)`. The square
/// root stretches the low counts found near the set boundary; points that
/// never escape are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayscaleColourMap {
    max_iterations: u32,
}

impl ColourMap for GrayscaleColourMap {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let intensity = (255.0 * t.sqrt()).round_ties_even().clamp(0.0, 255.0) as u8;

        Ok(Colour::grey(intensity))
    }
}

impl GrayscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
