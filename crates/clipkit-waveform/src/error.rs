//! Error types for waveform analysis.

use thiserror::Error;

/// Result type for waveform operations.
pub type WaveformResult<T> = Result<T, WaveformError>;

/// Errors that can occur during waveform analysis.
///
/// Cancellation is the only failure the engine produces: malformed
/// numeric input is normalized (clamped, floored, defaulted) rather than
/// rejected, so callers can distinguish "superseded" from "broken".
#[derive(Debug, Error)]
pub enum WaveformError {
    #[error("Analysis cancelled")]
    Cancelled,
}

impl WaveformError {
    /// Whether this error came from a cancellation handle firing.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_display() {
        assert_eq!(WaveformError::Cancelled.to_string(), "Analysis cancelled");
        assert!(WaveformError::Cancelled.is_cancelled());
    }
}
