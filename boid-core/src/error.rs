use thiserror::Error;

/// Construction-time precondition violations.
///
/// Degenerate numeric situations during a tick (zero-length vectors, no
/// neighbors in range, an agent sitting on its target) are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f32 },

    #[error("bounds must have a positive, finite size, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("{name} must be finite, got ({x}, {y})")]
    NonFiniteVector { name: &'static str, x: f32, y: f32 },
}

/// Returned when a behavior name does not match any known behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown behavior `{0}`")]
pub struct UnknownBehavior(pub alloc::string::String);

/// Accepts finite values `>= 0`.
pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NegativeOrNonFinite { name, value })
    }
}

pub(crate) fn finite_vector(
    name: &'static str,
    v: crate::Vector2D,
) -> Result<crate::Vector2D, ConfigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::NonFiniteVector { name, x: v.x, y: v.y })
    }
}
