//! Waveform peak models.
//!
//! Peaks are the fundamental rendering and recommendation unit: a
//! fixed-size buffer of signed 16-bit values, two per bucket, interleaved
//! as `(lo, hi)` pairs. A pyramid stacks progressively coarser peak
//! buffers so a renderer can pick a level matching its zoom without
//! re-reducing samples.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interleaved `(lo, hi)` peak buffer for one resolution level.
///
/// Invariants:
/// - `len() == 2 * bucket_count()`
/// - peaks aggregation: `lo <= hi` for every bucket (empty buckets are
///   `(0, 0)`)
/// - rms aggregation: `lo == -hi` for every bucket
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WaveformPeaks(Vec<i16>);

impl WaveformPeaks {
    /// Wrap an interleaved `(lo, hi)` buffer.
    ///
    /// An odd-length buffer has its trailing value dropped so the
    /// two-entries-per-bucket invariant holds.
    pub fn from_interleaved(mut data: Vec<i16>) -> Self {
        if data.len() % 2 != 0 {
            data.pop();
        }
        Self(data)
    }

    /// An all-zero buffer for `bucket_count` buckets.
    pub fn zeroed(bucket_count: usize) -> Self {
        Self(vec![0; bucket_count * 2])
    }

    /// Number of buckets (half the buffer length).
    pub fn bucket_count(&self) -> usize {
        self.0.len() / 2
    }

    /// The `(lo, hi)` pair for one bucket.
    pub fn bucket(&self, index: usize) -> Option<(i16, i16)> {
        let lo = *self.0.get(index * 2)?;
        let hi = *self.0.get(index * 2 + 1)?;
        Some((lo, hi))
    }

    /// Raw interleaved values.
    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }

    /// Total number of interleaved values (`2 * bucket_count`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer holds no buckets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Multi-resolution stack of peak buffers.
///
/// Level 0 is the finest (the base extraction); each subsequent level
/// halves the bucket count of the previous one (ceiling division).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WaveformPyramid {
    levels: Vec<WaveformPeaks>,
}

impl WaveformPyramid {
    /// Build a pyramid from pre-computed levels, finest first.
    pub fn new(levels: Vec<WaveformPeaks>) -> Self {
        Self { levels }
    }

    /// All levels, finest first.
    pub fn levels(&self) -> &[WaveformPeaks] {
        &self.levels
    }

    /// One level by index (0 = finest).
    pub fn level(&self, index: usize) -> Option<&WaveformPeaks> {
        self.levels.get(index)
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the pyramid holds no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Pick the coarsest level that still carries at least
    /// `target_buckets` buckets.
    ///
    /// A renderer drawing `w` bars wants the cheapest level with `>= w`
    /// buckets. Falls back to the finest level when even that is below
    /// the target; `None` only for an empty pyramid.
    pub fn level_for(&self, target_buckets: usize) -> Option<&WaveformPeaks> {
        self.levels
            .iter()
            .rev()
            .find(|level| level.bucket_count() >= target_buckets)
            .or_else(|| self.levels.first())
    }
}
