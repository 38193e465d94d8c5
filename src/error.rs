use thiserror::Error;

/// Fault returned by the division family when the divisor is zero.
///
/// On this path the caller's output instances are left unspecified and must
/// not be read as results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivideByZero;
