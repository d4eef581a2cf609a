// Error Types - Engine and boundary failure taxonomy

use thiserror::Error;

/// Failures raised by the calculation layer itself.
///
/// Every variant is local, synchronous and deterministic: retrying the same
/// call with the same input fails identically, so callers surface these
/// verbatim instead of retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Non-physical input: non-positive size/mass/velocity/density, entry
    /// angle outside (0, 90], negative lead time, or a non-finite value.
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Deflection method string outside the closed set.
    #[error("unsupported deflection method: {0:?}")]
    UnsupportedMethod(String),

    /// A derived physical quantity came out non-finite or negative from valid
    /// inputs. Indicates a formula bug; the offending value travels in the
    /// error instead of being clamped away.
    #[error("result out of range: {name} = {value}")]
    OutOfRangeResult { name: &'static str, value: f64 },
}

/// Failures raised at the request boundary, before or around the engine.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A request field violates the validated range the caller contract
    /// allows. Rejected before the engine runs (client error).
    #[error("`{field}` = {value} outside allowed range {min}..={max}")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The engine rejected the computation.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Malformed request JSON.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject non-finite and non-positive inputs before any arithmetic runs.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::InvalidParameter {
            name,
            value,
            reason: "must be a positive finite number",
        });
    }
    Ok(value)
}

/// Post-condition check on derived quantities (see `OutOfRangeResult`).
pub(crate) fn check_in_range(name: &'static str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::OutOfRangeResult { name, value });
    }
    Ok(())
}
