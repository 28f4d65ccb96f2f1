use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// `|z|² ≥ 4` means the orbit has left the radius-2 disc and will diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + k` from `z0` and counts the steps taken before
/// `|z|²` reaches [`ESCAPE_RADIUS_SQUARED`], capped at `max_iterations`.
#[must_use]
pub fn escape_time(z0: Complex, k: Complex, max_iterations: u32) -> u32 {
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z * z + k)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
