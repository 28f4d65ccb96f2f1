use std::time::Duration;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_LOW_RES_STEP: u32 = 4;
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Escape-time cap; points reaching it are drawn black.
    pub max_iterations: u32,
    /// Sampling stride of the preview pass on both axes.
    pub low_res_step: u32,
    /// Quiet period after an interaction ends before the full pass runs.
    pub settle_delay: Duration,
    /// Zoom multiplier applied per wheel tick.
    pub zoom_factor: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            low_res_step: DEFAULT_LOW_RES_STEP,
            settle_delay: DEFAULT_SETTLE_DELAY,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_interactive_tuning() {
        let config = RendererConfig::default();

        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.low_res_step, 4);
        assert_eq!(config.settle_delay, Duration::from_millis(200));
        assert_eq!(config.zoom_factor, 1.1);
    }
}
