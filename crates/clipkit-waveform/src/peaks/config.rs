//! Configuration for peak extraction.

use serde::{Deserialize, Serialize};

/// Buckets reduced per cooperative chunk when no explicit size is set.
pub(crate) const DEFAULT_CHUNK_SIZE: usize = 32;

/// How samples inside one bucket are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Min/max extrema per bucket — the classic waveform silhouette.
    Peaks,
    /// Root-mean-square magnitude per bucket, emitted as a symmetric
    /// `(-rms, rms)` pair — a smoother loudness envelope.
    Rms,
}

/// Configuration for peak extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeaksConfig {
    /// Per-bucket aggregation.
    pub mode: AggregationMode,

    /// Number of pyramid levels to derive, including the base.
    ///
    /// - 1: base resolution only (the default)
    /// - N > 1: N-1 additional levels, each halving the bucket count of
    ///   the previous one
    ///
    /// Levels beyond the base are only materialized when
    /// `return_pyramid` is set.
    pub pyramid_levels: usize,

    /// Whether to return the full pyramid alongside the base peaks.
    pub return_pyramid: bool,

    /// Buckets reduced between yield points.
    ///
    /// - Smaller values (8-16): more responsive host, more scheduling
    ///   overhead
    /// - Default (32): keeps each chunk well under a frame budget for
    ///   typical bucket widths
    /// - Larger values (128+): near-batch behavior, only for offline use
    pub chunk_size: usize,
}

impl Default for PeaksConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Peaks,
            pyramid_levels: 1,
            return_pyramid: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl PeaksConfig {
    /// Builder-style setter for the aggregation mode.
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder-style setter for pyramid depth. Floored to at least 1.
    pub fn with_pyramid_levels(mut self, levels: usize) -> Self {
        self.pyramid_levels = levels.max(1);
        self
    }

    /// Builder-style setter for returning the pyramid.
    pub fn with_return_pyramid(mut self, return_pyramid: bool) -> Self {
        self.return_pyramid = return_pyramid;
        self
    }

    /// Builder-style setter for the chunk size. Floored to at least 1.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}
