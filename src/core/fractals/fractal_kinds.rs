use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Julia,
    Mandelbrot,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Julia, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Julia => "Julia",
            Self::Mandelbrot => "Mandelbrot",
        }
    }

    /// The constant `k` a freshly selected fractal starts from. Only Julia
    /// sets read it; Mandelbrot takes `k` from the sampled point.
    #[must_use]
    pub const fn default_parameter(self) -> Option<Complex> {
        match self {
            Self::Julia => Some(Complex::new(-0.54, 0.54)),
            Self::Mandelbrot => None,
        }
    }

    #[must_use]
    pub const fn uses_parameter(self) -> bool {
        matches!(self, Self::Julia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julia_is_the_startup_kind() {
        assert_eq!(FractalKind::default(), FractalKind::Julia);
    }

    #[test]
    fn only_julia_has_a_default_parameter() {
        assert_eq!(
            FractalKind::Julia.default_parameter(),
            Some(Complex::new(-0.54, 0.54))
        );
        assert_eq!(FractalKind::Mandelbrot.default_parameter(), None);
        assert!(FractalKind::Julia.uses_parameter());
        assert!(!FractalKind::Mandelbrot.uses_parameter());
    }

    #[test]
    fn all_lists_every_kind_once() {
        assert_eq!(FractalKind::ALL.len(), 2);
        assert!(FractalKind::ALL.contains(&FractalKind::Julia));
        assert!(FractalKind::ALL.contains(&FractalKind::Mandelbrot));
    }
}
