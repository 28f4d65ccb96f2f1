use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::view_state::ViewState;

/// At zoom 1, half of the surface extent spans two complex-plane units.
const BASE_FIELD_OF_VIEW: f64 = 4.0;

/// Pixels per complex-plane unit along an axis of length `extent`.
#[must_use]
pub fn pixels_per_unit(extent: u32, zoom: f64) -> f64 {
    f64::from(extent) / BASE_FIELD_OF_VIEW * zoom
}

#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, view: &ViewState, surface: SurfaceSize) -> Complex {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());

    let real = (pixel.x - width / 2.0) / pixels_per_unit(surface.width(), view.zoom())
        + view.center.real;
    let imag = (pixel.y - height / 2.0) / pixels_per_unit(surface.height(), view.zoom())
        + view.center.imag;

    Complex { real, imag }
}

#[must_use]
pub fn complex_to_pixel_coords(point: Complex, view: &ViewState, surface: SurfaceSize) -> Point {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());

    let x = (point.real - view.center.real) * pixels_per_unit(surface.width(), view.zoom())
        + width / 2.0;
    let y = (point.imag - view.center.imag) * pixels_per_unit(surface.height(), view.zoom())
        + height / 2.0;

    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKind;

    const TOLERANCE: f64 = 1e-9;

    fn surface_800x600() -> SurfaceSize {
        SurfaceSize::new(800, 600).unwrap()
    }

    #[test]
    fn test_surface_center_maps_to_view_center() {
        let view = ViewState::new(FractalKind::Julia);
        let result = pixel_to_complex_coords(Point::new(400.0, 300.0), &view, surface_800x600());

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_top_left_at_zoom_one() {
        let view = ViewState::new(FractalKind::Mandelbrot);
        let result = pixel_to_complex_coords(Point::new(0.0, 0.0), &view, surface_800x600());

        // 400 / 200 = 2, 300 / 150 = 2
        assert_eq!(result, Complex::new(-2.0, -2.0));
    }

    #[test]
    fn test_zoom_and_center_are_applied() {
        let mut view = ViewState::new(FractalKind::Mandelbrot);
        view.center = Complex::new(-0.5, 0.25);
        view.zoom_in(2.0);

        let result = pixel_to_complex_coords(Point::new(800.0, 600.0), &view, surface_800x600());

        // 400 / (200 * 2) = 1, 300 / (150 * 2) = 1
        assert!((result.real - 0.5).abs() < TOLERANCE);
        assert!((result.imag - 1.25).abs() < TOLERANCE);
    }

    #[test]
    fn test_round_trip_recovers_pixel() {
        let surface = SurfaceSize::new(1024, 768).unwrap();
        let pixels = [
            Point::new(0.0, 0.0),
            Point::new(1023.0, 767.0),
            Point::new(17.0, 503.0),
            Point::new(512.5, 383.25),
        ];
        let zooms = [0.01, 1.0, 1.1, 37.5, 12_345.0];
        let centers = [
            Complex::ZERO,
            Complex::new(-0.75, 0.1),
            Complex::new(3.0, -2.5),
        ];

        for &zoom in &zooms {
            for &center in &centers {
                let mut view = ViewState::new(FractalKind::Julia);
                view.center = center;
                view.zoom_in(zoom);

                for &pixel in &pixels {
                    let complex = pixel_to_complex_coords(pixel, &view, surface);
                    let back = complex_to_pixel_coords(complex, &view, surface);

                    assert!(
                        (back.x - pixel.x).abs() < 1e-6 && (back.y - pixel.y).abs() < 1e-6,
                        "{pixel:?} -> {complex:?} -> {back:?} at zoom {zoom}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_pixels_per_unit() {
        assert_eq!(pixels_per_unit(800, 1.0), 200.0);
        assert_eq!(pixels_per_unit(600, 2.0), 300.0);
    }
}
