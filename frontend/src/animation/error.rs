use thiserror::Error;

/// Reasons an animation could not start or keep running. None of these are
/// shown to the visitor; widgets log them and fall back to a static display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("typewriter needs at least one word")]
    EmptyWords,
    #[error("count-up bound is not a finite number: {0}")]
    NonFiniteBound(f64),
    #[error("no browser window available")]
    NoWindow,
    #[error("requestAnimationFrame failed: {0}")]
    FrameRequest(String),
}
