//! Recommendation entry point.

use clipkit_models::{TrimRecommendation, WaveformPeaks};
use tracing::debug;

use super::candidates::{build_amplitude_sums, build_candidates, derive_segment_window};
use super::config::RecommendationOptions;
use super::select::select_non_overlapping;

/// Recommend up to `options.count` non-overlapping trim segments.
///
/// Synchronous and stateless: a pure function of the peaks, the nominal
/// duration, and the options. Returns an empty vector when the peaks are
/// empty, the duration is not positive, or the derived segment window is
/// empty. When the window covers the whole clip, a single recommendation
/// spanning `[0, duration_ms]` is returned regardless of `count`.
///
/// Results are sorted by ascending start and carry their original
/// (non-inverted) energy scores; scores are comparable only within one
/// call.
pub fn recommend_trim_segments(
    peaks: &WaveformPeaks,
    duration_ms: f64,
    options: &RecommendationOptions,
) -> Vec<TrimRecommendation> {
    if peaks.is_empty() || !duration_ms.is_finite() || duration_ms <= 0.0 {
        return Vec::new();
    }

    let sums = build_amplitude_sums(peaks);
    let window = derive_segment_window(duration_ms, sums.bucket_count, options.segment_ms);
    if window.is_empty() {
        return Vec::new();
    }

    debug!(
        buckets = sums.bucket_count,
        duration_ms,
        mode = ?options.mode,
        min_buckets = window.min_buckets,
        max_buckets = window.max_buckets,
        "Starting trim recommendation"
    );

    if window.max_buckets >= sums.bucket_count {
        // The admissible window swallows the whole clip: recommend it
        // outright instead of enumerating identical candidates.
        return vec![TrimRecommendation {
            start_ms: 0.0,
            end_ms: duration_ms,
            score: sums.total(),
        }];
    }

    let candidates = build_candidates(&sums, window);
    if candidates.is_empty() {
        return Vec::new();
    }
    let candidate_count = candidates.len();

    let selected = select_non_overlapping(&candidates, options.mode, options.count);

    let bucket_to_ms = |bucket: usize| (bucket as f64 / sums.bucket_count as f64 * duration_ms).round();
    let recommendations: Vec<TrimRecommendation> = selected
        .iter()
        .map(|c| TrimRecommendation {
            start_ms: bucket_to_ms(c.start_bucket),
            end_ms: bucket_to_ms(c.end_bucket).min(duration_ms),
            score: c.score,
        })
        .collect();

    debug!(
        candidates = candidate_count,
        selected = recommendations.len(),
        "Trim recommendation complete"
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use clipkit_models::RecommendationMode;

    use super::*;

    fn symmetric_peaks(values: &[i16]) -> WaveformPeaks {
        let mut data = Vec::with_capacity(values.len() * 2);
        for &v in values {
            data.push(-v);
            data.push(v);
        }
        WaveformPeaks::from_interleaved(data)
    }

    fn options(mode: RecommendationMode, count: usize, segment_ms: f64) -> RecommendationOptions {
        RecommendationOptions {
            mode,
            count,
            segment_ms: Some(segment_ms),
        }
    }

    #[test]
    fn test_empty_inputs_yield_no_recommendations() {
        let peaks = symmetric_peaks(&[1000, 2000]);
        let opts = RecommendationOptions::default();
        assert!(recommend_trim_segments(&WaveformPeaks::zeroed(0), 4000.0, &opts).is_empty());
        assert!(recommend_trim_segments(&peaks, 0.0, &opts).is_empty());
        assert!(recommend_trim_segments(&peaks, -100.0, &opts).is_empty());
        assert!(recommend_trim_segments(&peaks, f64::NAN, &opts).is_empty());
    }

    #[test]
    fn test_highlight_selects_high_energy() {
        let peaks = symmetric_peaks(&[1000, 9000, 9500, 1200]);
        let recs = recommend_trim_segments(
            &peaks,
            4000.0,
            &options(RecommendationMode::Highlight, 2, 1000.0),
        );

        assert_eq!(recs.len(), 2);
        let highest = recs
            .iter()
            .cloned()
            .reduce(|a, b| if a.score >= b.score { a } else { b })
            .unwrap();
        assert_eq!(highest.start_ms, 2000.0);

        let starts: Vec<f64> = recs.iter().map(|r| r.start_ms).collect();
        assert!(starts[0] >= 0.0);
        assert!(starts[1] > starts[0]);
    }

    #[test]
    fn test_prefers_longer_high_energy_spans() {
        let peaks = symmetric_peaks(&[1000, 2000, 9000, 9000]);
        let recs = recommend_trim_segments(
            &peaks,
            4000.0,
            &options(RecommendationMode::Highlight, 1, 2000.0),
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].start_ms, 1000.0);
        assert_eq!(recs[0].end_ms, 4000.0);
    }

    #[test]
    fn test_remove_selects_low_energy() {
        let peaks = symmetric_peaks(&[1000, 9000, 9500, 1200]);
        let recs = recommend_trim_segments(
            &peaks,
            4000.0,
            &options(RecommendationMode::Remove, 2, 1000.0),
        );

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].start_ms, 0.0);
        assert_eq!(recs[1].start_ms, 3000.0);
    }

    #[test]
    fn test_recommendations_never_overlap() {
        let peaks = symmetric_peaks(&[500, 8000, 300, 7000, 200, 9000, 100, 6000]);
        let recs = recommend_trim_segments(
            &peaks,
            8000.0,
            &options(RecommendationMode::Highlight, 4, 1000.0),
        );

        assert!(recs.len() <= 4);
        for pair in recs.windows(2) {
            assert!(pair[0].end_ms <= pair[1].start_ms);
        }
    }

    #[test]
    fn test_full_track_short_circuit() {
        // Segment hint as long as the clip: the window covers everything.
        let peaks = symmetric_peaks(&[1000, 2000, 3000, 4000]);
        let recs = recommend_trim_segments(
            &peaks,
            4000.0,
            &options(RecommendationMode::Highlight, 5, 4000.0),
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].start_ms, 0.0);
        assert_eq!(recs[0].end_ms, 4000.0);
    }

    #[test]
    fn test_scores_are_original_in_remove_mode() {
        let peaks = symmetric_peaks(&[1000, 9000, 9500, 1200]);
        let recs = recommend_trim_segments(
            &peaks,
            4000.0,
            &options(RecommendationMode::Remove, 2, 1000.0),
        );

        // Low-energy segments carry their own (small) energy, not the
        // inverted selection weight.
        let max_amplitude = 9500.0 / 32767.0;
        for rec in recs {
            assert!(rec.score < max_amplitude);
            assert!(rec.score >= 0.0);
        }
    }
}
