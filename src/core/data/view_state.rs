use crate::core::data::complex::Complex;
use crate::core::data::surface::SurfaceSize;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::pixel_to_complex_coords::pixels_per_unit;

const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan, zoom and fractal selection for the single view being explored.
///
/// `zoom` stays strictly positive: it only ever changes by multiplying or
/// dividing by a positive factor, or by resetting to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub fractal_kind: FractalKind,
    pub parameter: Complex,
    pub center: Complex,
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(FractalKind::default())
    }
}

impl ViewState {
    #[must_use]
    pub fn new(fractal_kind: FractalKind) -> Self {
        Self {
            fractal_kind,
            parameter: fractal_kind.default_parameter().unwrap_or(Complex::ZERO),
            center: Complex::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Selects `fractal_kind` and restores its default view. The Julia
    /// parameter is reset only when switching to Julia; Mandelbrot ignores it.
    pub fn switch_to(&mut self, fractal_kind: FractalKind) {
        self.fractal_kind = fractal_kind;
        self.reset_view();

        if let Some(parameter) = fractal_kind.default_parameter() {
            self.parameter = parameter;
        }
    }

    pub fn reset_view(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.center = Complex::ZERO;
    }

    /// Moves the view opposite to a pointer drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f64, dy: f64, surface: SurfaceSize) {
        self.center.real -= dx / pixels_per_unit(surface.width(), self.zoom);
        self.center.imag -= dy / pixels_per_unit(surface.height(), self.zoom);
    }

    pub fn zoom_in(&mut self, factor: f64) {
        self.zoom *= factor;
        self.check_zoom();
    }

    pub fn zoom_out(&mut self, factor: f64) {
        self.zoom /= factor;
        self.check_zoom();
    }

    /// Zooms by `factor` and pulls the center toward `anchor` by
    /// `1 - 1/factor` of the distance. For zooming in this keeps `anchor` at
    /// the same pixel; zooming out applies the same pull.
    pub fn zoom_about(&mut self, anchor: Complex, direction: ZoomDirection, factor: f64) {
        match direction {
            ZoomDirection::In => self.zoom_in(factor),
            ZoomDirection::Out => self.zoom_out(factor),
        }

        self.center = self.center + (anchor - self.center).scale(1.0 - 1.0 / factor);
    }

    /// Width and height of the complex-plane region currently on screen.
    #[must_use]
    pub fn visible_span(&self, surface: SurfaceSize) -> (f64, f64) {
        (
            f64::from(surface.width()) / pixels_per_unit(surface.width(), self.zoom),
            f64::from(surface.height()) / pixels_per_unit(surface.height(), self.zoom),
        )
    }

    fn check_zoom(&self) {
        debug_assert!(
            self.zoom > 0.0 && self.zoom.is_finite(),
            "zoom must stay positive and finite, got {}",
            self.zoom
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

    const TOLERANCE: f64 = 1e-12;

    fn surface_800x600() -> SurfaceSize {
        SurfaceSize::new(800, 600).unwrap()
    }

    #[test]
    fn test_default_view_is_julia_at_origin() {
        let view = ViewState::default();

        assert_eq!(view.fractal_kind, FractalKind::Julia);
        assert_eq!(view.parameter, Complex::new(-0.54, 0.54));
        assert_eq!(view.center, Complex::ZERO);
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn test_switch_to_mandelbrot_resets_view_and_keeps_parameter() {
        let mut view = ViewState::default();
        view.parameter = Complex::new(0.3, -0.1);
        view.center = Complex::new(1.0, 1.0);
        view.zoom_in(5.0);

        view.switch_to(FractalKind::Mandelbrot);

        assert_eq!(view.fractal_kind, FractalKind::Mandelbrot);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.center, Complex::ZERO);
        assert_eq!(view.parameter, Complex::new(0.3, -0.1));
    }

    #[test]
    fn test_switch_to_julia_resets_parameter() {
        let mut view = ViewState::new(FractalKind::Mandelbrot);
        view.parameter = Complex::new(0.3, -0.1);

        view.switch_to(FractalKind::Julia);

        assert_eq!(view.parameter, Complex::new(-0.54, 0.54));
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut view = ViewState::default();
        view.pan(10.0, 0.0, surface_800x600());

        assert_eq!(view.center.real, -10.0 / 200.0);
        assert_eq!(view.center.imag, 0.0);

        view.zoom_in(2.0);
        view.pan(0.0, -30.0, surface_800x600());

        assert!((view.center.imag - 30.0 / 300.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zoom_in_keeps_anchor_fixed_on_screen() {
        let surface = surface_800x600();
        let pointer = Point::new(123.0, 456.0);
        let mut view = ViewState::default();
        view.center = Complex::new(-0.2, 0.35);
        view.zoom_in(3.0);

        let anchor = pixel_to_complex_coords(pointer, &view, surface);
        view.zoom_about(anchor, ZoomDirection::In, 1.1);
        let after = pixel_to_complex_coords(pointer, &view, surface);

        assert!((after.real - anchor.real).abs() < TOLERANCE);
        assert!((after.imag - anchor.imag).abs() < TOLERANCE);
    }

    #[test]
    fn test_zoom_out_divides_zoom_and_pulls_center_toward_anchor() {
        let mut view = ViewState::default();
        let anchor = Complex::new(1.1, -2.2);

        view.zoom_about(anchor, ZoomDirection::Out, 1.1);

        let pull = 1.0 - 1.0 / 1.1;
        assert!((view.zoom() - 1.0 / 1.1).abs() < TOLERANCE);
        assert!((view.center.real - 1.1 * pull).abs() < TOLERANCE);
        assert!((view.center.imag + 2.2 * pull).abs() < TOLERANCE);
    }

    #[test]
    fn test_repeated_zoom_out_stays_positive() {
        let mut view = ViewState::default();

        for _ in 0..500 {
            view.zoom_out(1.1);
        }

        assert!(view.zoom() > 0.0);
    }

    #[test]
    fn test_visible_span_shrinks_with_zoom() {
        let mut view = ViewState::default();

        assert_eq!(view.visible_span(surface_800x600()), (4.0, 4.0));

        view.zoom_in(4.0);

        assert_eq!(view.visible_span(surface_800x600()), (1.0, 1.0));
    }
}
