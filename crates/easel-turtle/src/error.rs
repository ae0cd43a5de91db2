use std::fmt;

/// Errors raised by turtle drawing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TurtleError {
    /// A geometric argument was out of range. Nothing was drawn.
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// `begin_fill` was called while a fill was already open.
    FillAlreadyOpen,
    /// `end_fill` was called without a matching `begin_fill`.
    NoOpenFill,
}

impl TurtleError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        TurtleError::InvalidParameter { name, value, reason }
    }
}

impl fmt::Display for TurtleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurtleError::InvalidParameter { name, value, reason } => {
                write!(f, "invalid parameter `{name}` = {value}: {reason}")
            }
            TurtleError::FillAlreadyOpen => f.write_str("begin_fill called while a fill is open"),
            TurtleError::NoOpenFill => f.write_str("end_fill called without begin_fill"),
        }
    }
}

impl std::error::Error for TurtleError {}

/// Accepts finite lengths `>= 0`.
pub(crate) fn ensure_length(name: &'static str, value: f64) -> Result<(), TurtleError> {
    if !value.is_finite() {
        return Err(TurtleError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(TurtleError::invalid(name, value, "must not be negative"));
    }
    Ok(())
}

/// Accepts finite values `> 0`.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), TurtleError> {
    if !value.is_finite() {
        return Err(TurtleError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(TurtleError::invalid(name, value, "must be greater than zero"));
    }
    Ok(())
}

/// Accepts any finite value.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), TurtleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TurtleError::invalid(name, value, "must be finite"))
    }
}
