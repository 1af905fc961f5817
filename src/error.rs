use thiserror::Error;

/// Everything that can go wrong configuring or running a smoother.
/// All of these are raised before the first step,
/// a run that starts always finishes.
#[derive(Debug, Error)]
pub enum SmoothError {
    #[error("sequence must have at least one value")]
    EmptySequence,

    #[error("cannot pin {pins} values in a sequence of length {len}")]
    TooManyPins { pins: usize, len: usize },

    #[error("pin position {position} is outside a sequence of length {len}")]
    PinOutOfRange { position: usize, len: usize },

    #[error("position {position} is pinned more than once")]
    DuplicatePin { position: usize },

    #[error("pin at position {position} has non-finite value {value}")]
    NonFinitePin { position: usize, value: f64 },

    #[error("sequence value at position {position} is not finite: {value}")]
    NonFiniteValue { position: usize, value: f64 },

    #[error("{ic} initial condition needs a positive finite dial, got {dial}")]
    InvalidDial { ic: &'static str, dial: f64 },

    #[error("expected a sequence of length {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type SmoothResult<T> = Result<T, SmoothError>;
