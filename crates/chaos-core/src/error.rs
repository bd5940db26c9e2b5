use thiserror::Error;

/// Operations on the chaos-game session that can be rejected.
///
/// Degenerate geometry (zero-area canvas, zooms that would collapse the
/// scale) is not reported here; those inputs are absorbed as no-ops.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChaosError {
    #[error("unsupported batch size {0}; expected 100, 1000 or 10000")]
    UnsupportedBatchSize(usize),
    #[error("an animated run is already in progress")]
    AnimationRunning,
    #[error("viewport scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}
