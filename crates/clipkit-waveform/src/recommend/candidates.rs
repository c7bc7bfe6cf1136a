//! Candidate segment enumeration.
//!
//! A candidate is a contiguous bucket range the selection stage may pick.
//! Scoring any range in O(1) rests on a prefix-sum array over per-bucket
//! normalized amplitude; enumeration then sweeps every start offset over
//! a derived `[min, max]` length window at a coarse stride.

use clipkit_models::{WaveformPeaks, MIN_TRIM_GAP_MS};

/// Running amplitude sums over a peak buffer.
///
/// `prefix[i]` is the summed normalized amplitude of buckets `0..i`, so
/// any range `[a, b)` scores as `prefix[b] - prefix[a]`.
pub(crate) struct AmplitudeSums {
    pub(crate) bucket_count: usize,
    pub(crate) prefix: Vec<f64>,
}

impl AmplitudeSums {
    /// Total amplitude over the whole buffer.
    pub(crate) fn total(&self) -> f64 {
        self.prefix.last().copied().unwrap_or(0.0)
    }
}

/// Build the prefix-sum array. Per-bucket amplitude is
/// `(|lo| + |hi|) / (2 * 32767)`, normalizing a full-scale bucket to 1.
pub(crate) fn build_amplitude_sums(peaks: &WaveformPeaks) -> AmplitudeSums {
    let bucket_count = peaks.bucket_count();
    let data = peaks.as_slice();
    let mut prefix = vec![0.0f64; bucket_count + 1];

    for i in 0..bucket_count {
        let lo = f64::from(data[i * 2]).abs();
        let hi = f64::from(data[i * 2 + 1]).abs();
        let amplitude = (lo + hi) / (2.0 * f64::from(i16::MAX));
        prefix[i + 1] = prefix[i] + amplitude;
    }

    AmplitudeSums {
        bucket_count,
        prefix,
    }
}

/// Admissible candidate lengths, in buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SegmentWindow {
    pub(crate) min_buckets: usize,
    pub(crate) max_buckets: usize,
}

impl SegmentWindow {
    pub(crate) fn is_empty(&self) -> bool {
        self.min_buckets == 0 || self.max_buckets == 0
    }
}

/// Derive the candidate length window from the target segment hint.
///
/// The hint defaults to a sixth of the duration and acts as a center
/// rather than a strict size: candidates range from 0.6x to 1.6x the
/// target, bounded below by a multiple of the minimum trim gap.
pub(crate) fn derive_segment_window(
    duration_ms: f64,
    bucket_count: usize,
    target_segment_ms: Option<f64>,
) -> SegmentWindow {
    if duration_ms <= 0.0 || bucket_count == 0 {
        return SegmentWindow {
            min_buckets: 0,
            max_buckets: 0,
        };
    }

    let hint = match target_segment_ms {
        Some(ms) if ms.is_finite() => ms,
        _ => (duration_ms / 6.0).round(),
    };
    let target = MIN_TRIM_GAP_MS.max(hint.min(duration_ms));
    let min_ms = (MIN_TRIM_GAP_MS * 4.0).max((target * 0.6).round());
    let max_ms = (min_ms + MIN_TRIM_GAP_MS).max((target * 1.6).round());

    let bucket_from_ms =
        |ms: f64| (((ms / duration_ms) * bucket_count as f64).round()).max(1.0) as usize;

    let min_buckets = bucket_from_ms(min_ms);
    let max_buckets = min_buckets.max(bucket_from_ms(max_ms));

    SegmentWindow {
        min_buckets,
        max_buckets,
    }
}

/// One scored candidate segment, as a half-open bucket range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) start_bucket: usize,
    pub(crate) end_bucket: usize,
    pub(crate) score: f64,
}

/// Enumerate candidates for every start offset.
///
/// Lengths step by half the minimum length; the maximum admissible
/// length at each offset is always included even when the stride would
/// skip it, so the window's upper edge stays reachable.
pub(crate) fn build_candidates(sums: &AmplitudeSums, window: SegmentWindow) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if window.is_empty() {
        return candidates;
    }

    let length_step = (window.min_buckets / 2).max(1);
    let score = |start: usize, end: usize| sums.prefix[end] - sums.prefix[start];

    for start in 0..sums.bucket_count {
        let available = sums.bucket_count - start;
        let max_len = window.max_buckets.min(available);

        let mut len = window.min_buckets;
        while len <= max_len {
            candidates.push(Candidate {
                start_bucket: start,
                end_bucket: start + len,
                score: score(start, start + len),
            });
            len += length_step;
        }

        if max_len >= window.min_buckets && (max_len - window.min_buckets) % length_step != 0 {
            candidates.push(Candidate {
                start_bucket: start,
                end_bucket: start + max_len,
                score: score(start, start + max_len),
            });
        }
    }

    candidates
}
