use crate::core::actions::draw_fractal::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::orbit::escape_time;

/// Julia set for a fixed constant `k`: the orbit is seeded with the sampled
/// point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    parameter: Complex,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        escape_time(point, self.parameter, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    pub fn new(parameter: Complex, max_iterations: u32) -> Result<Self, AlgorithmError> {
        if max_iterations == 0 {
            return Err(AlgorithmError::ZeroMaxIterations);
        }

        Ok(Self {
            parameter,
            max_iterations,
        })
    }

    #[must_use]
    pub fn with_parameter(self, parameter: Complex) -> Self {
        Self { parameter, ..self }
    }
}
