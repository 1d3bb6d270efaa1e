use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("typing effect needs at least one phrase")]
    EmptyPhrases,
    #[error("smoothing factor {0} is outside (0, 1]")]
    InvalidSmoothing(f32),
    #[error("{0} interval must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("visibility threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
    #[error("link distance {0} must be positive and finite")]
    InvalidDistance(f32),
    #[error("particle count {0} exceeds the maximum of {1}")]
    TooManyParticles(usize, usize),
}

pub type FxResult<T> = Result<T, FxError>;
