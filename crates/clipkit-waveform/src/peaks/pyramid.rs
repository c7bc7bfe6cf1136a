//! Multi-resolution pyramid construction.
//!
//! Coarser levels combine the *pre-quantization* float state of the
//! level below: min/max union for extrema, summed energy/count for RMS.
//! Re-deriving a level from the previous level's quantized integers
//! would compound rounding error with every halving.

use clipkit_models::{WaveformPeaks, WaveformPyramid};

use super::config::AggregationMode;
use super::reduce::{energy, finish_rms, float_to_i16, min_max};

/// Pre-quantization per-bucket state for one pyramid level.
pub(crate) enum LevelState {
    /// Raw `(min, max)` extrema per bucket.
    Extrema(Vec<(f32, f32)>),
    /// Summed squared energy and sample count per bucket.
    Energy(Vec<(f64, usize)>),
}

impl LevelState {
    /// Empty state ready to receive `bucket_count` buckets.
    pub(crate) fn with_capacity(mode: AggregationMode, bucket_count: usize) -> Self {
        match mode {
            AggregationMode::Peaks => Self::Extrema(Vec::with_capacity(bucket_count)),
            AggregationMode::Rms => Self::Energy(Vec::with_capacity(bucket_count)),
        }
    }

    /// Reduce `samples[start..end)` into the next bucket.
    pub(crate) fn push_bucket(&mut self, samples: &[f32], start: usize, end: usize) {
        match self {
            Self::Extrema(buckets) => buckets.push(min_max(samples, start, end)),
            Self::Energy(buckets) => buckets.push(energy(samples, start, end)),
        }
    }

    pub(crate) fn bucket_count(&self) -> usize {
        match self {
            Self::Extrema(buckets) => buckets.len(),
            Self::Energy(buckets) => buckets.len(),
        }
    }

    /// The next coarser level: pairwise combination, an odd trailing
    /// bucket carried over unchanged. Bucket count becomes
    /// `ceil(current / 2)`.
    pub(crate) fn combine_pairs(&self) -> Self {
        match self {
            Self::Extrema(buckets) => Self::Extrema(
                buckets
                    .chunks(2)
                    .map(|pair| {
                        pair.iter().copied().reduce(|(lo_a, hi_a), (lo_b, hi_b)| {
                            (lo_a.min(lo_b), hi_a.max(hi_b))
                        })
                        .unwrap_or((0.0, 0.0))
                    })
                    .collect(),
            ),
            Self::Energy(buckets) => Self::Energy(
                buckets
                    .chunks(2)
                    .map(|pair| {
                        pair.iter()
                            .fold((0.0, 0), |(sum, count), &(s, c)| (sum + s, count + c))
                    })
                    .collect(),
            ),
        }
    }

    /// Quantize this level into an interleaved `(lo, hi)` peak buffer.
    pub(crate) fn quantize(&self) -> WaveformPeaks {
        let mut data = Vec::with_capacity(self.bucket_count() * 2);
        match self {
            Self::Extrema(buckets) => {
                for &(min, max) in buckets {
                    data.push(float_to_i16(min));
                    data.push(float_to_i16(max));
                }
            }
            Self::Energy(buckets) => {
                for &(sum, count) in buckets {
                    // Emitting lo as -hi keeps the symmetry invariant
                    // exact even where the i16 clamp is asymmetric.
                    let hi = float_to_i16(finish_rms(sum, count));
                    data.push(-hi);
                    data.push(hi);
                }
            }
        }
        WaveformPeaks::from_interleaved(data)
    }
}

/// Derive a full pyramid from the base level's float state.
///
/// Level 0 is the quantized base; each further level halves the bucket
/// count until `levels` levels exist.
pub(crate) fn build_pyramid(base: LevelState, levels: usize) -> WaveformPyramid {
    let levels = levels.max(1);
    let mut out = Vec::with_capacity(levels);
    let mut current = base;
    out.push(current.quantize());

    for _ in 1..levels {
        current = current.combine_pairs();
        out.push(current.quantize());
    }

    WaveformPyramid::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extrema(values: &[(f32, f32)]) -> LevelState {
        LevelState::Extrema(values.to_vec())
    }

    #[test]
    fn test_combine_pairs_extrema() {
        let state = extrema(&[(-1.0, -0.5), (0.5, 1.0), (-0.25, 0.25)]);
        let coarser = state.combine_pairs();
        match coarser {
            LevelState::Extrema(buckets) => {
                assert_eq!(buckets, vec![(-1.0, 1.0), (-0.25, 0.25)]);
            }
            LevelState::Energy(_) => panic!("mode changed during combination"),
        }
    }

    #[test]
    fn test_combine_pairs_energy_sums_not_averages() {
        let state = LevelState::Energy(vec![(1.0, 4), (3.0, 4)]);
        let coarser = state.combine_pairs();
        match coarser {
            LevelState::Energy(buckets) => assert_eq!(buckets, vec![(4.0, 8)]),
            LevelState::Extrema(_) => panic!("mode changed during combination"),
        }
    }

    #[test]
    fn test_level_size_law() {
        // 2 * ceil((prev_len / 2) / 2) at every step.
        let state = extrema(&vec![(0.0, 0.0); 13]);
        let pyramid = build_pyramid(state, 5);
        let sizes: Vec<usize> = pyramid.levels().iter().map(|l| l.len()).collect();
        assert_eq!(sizes, vec![26, 14, 8, 4, 2]);
        for k in 1..sizes.len() {
            let prev_buckets = sizes[k - 1] / 2;
            assert_eq!(sizes[k], 2 * prev_buckets.div_ceil(2));
        }
    }

    #[test]
    fn test_pyramid_quantizes_from_float_state() {
        // Base buckets: -1, -0.5, 0.5, 1. The top level must recover the
        // true (-1, 1) extrema, not a re-reduction of quantized values.
        let state = extrema(&[(-1.0, -1.0), (-0.5, -0.5), (0.5, 0.5), (1.0, 1.0)]);
        let pyramid = build_pyramid(state, 3);

        let base = pyramid.level(0).unwrap();
        assert_eq!(base.bucket(0), Some((-32768, -32768)));
        assert_eq!(base.bucket(3), Some((32767, 32767)));

        let top = pyramid.level(2).unwrap();
        assert_eq!(top.bucket_count(), 1);
        assert_eq!(top.bucket(0), Some((-32768, 32767)));
    }

    #[test]
    fn test_rms_symmetry_survives_quantization() {
        // A full-scale bucket has rms 1.0; the asymmetric clamp must not
        // leak through as (-32768, 32767).
        let state = LevelState::Energy(vec![(4.0, 4), (1.0, 4)]);
        let peaks = state.quantize();
        assert_eq!(peaks.bucket(0), Some((-32767, 32767)));
        let (lo, hi) = peaks.bucket(1).unwrap();
        assert_eq!(lo, -hi);
        assert_eq!(hi, float_to_i16(0.5));
    }

    #[test]
    fn test_single_level_pyramid() {
        let pyramid = build_pyramid(extrema(&[(0.1, 0.2)]), 1);
        assert_eq!(pyramid.len(), 1);
    }
}
