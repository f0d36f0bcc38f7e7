use thiserror::Error;

/// Rejected scene or render input. Raised at construction time so that degenerate geometry
/// never reaches the renderer as NaNs.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("sphere center must be finite")]
    NonFiniteCenter,
    #[error("index of refraction must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f64),
    #[error("camera look-from and look-at points coincide")]
    CoincidentEyeAndTarget,
    #[error("camera up vector is parallel to the view direction")]
    DegenerateUpVector,
    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),
    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("samples per pixel must be at least 1")]
    NoSamples,
    #[error("thread count must be at least 1")]
    NoThreads,
}
