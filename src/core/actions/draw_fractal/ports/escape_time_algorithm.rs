use crate::core::data::complex::Complex;

pub trait EscapeTimeAlgorithm {
    /// Iterations before the orbit of `point` escapes, or exactly
    /// `max_iterations()` if it never does.
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
