use crate::core::data::surface::SurfaceError;
use crate::core::fractals::errors::AlgorithmError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RendererError {
    Surface(SurfaceError),
    Algorithm(AlgorithmError),
    ZeroLowResStep,
    InvalidZoomFactor(f64),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "surface error: {}", err),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ZeroLowResStep => write!(f, "low resolution step must be greater than zero"),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be finite and greater than one, got {}", factor)
            }
        }
    }
}

impl Error for RendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::ZeroLowResStep | Self::InvalidZoomFactor(_) => None,
        }
    }
}

impl From<SurfaceError> for RendererError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<AlgorithmError> for RendererError {
    fn from(err: AlgorithmError) -> Self {
        Self::Algorithm(err)
    }
}
