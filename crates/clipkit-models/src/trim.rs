//! Trim range and recommendation models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum span of a usable trim range, in milliseconds.
///
/// Ranges shorter than this are indistinguishable from a click on the
/// timeline and are rejected during normalization.
pub const MIN_TRIM_GAP_MS: f64 = 50.0;

/// A half-open time window `[start_ms, end_ms)` inside one clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrimRange {
    /// Start timestamp in milliseconds.
    pub start_ms: f64,
    /// End timestamp in milliseconds.
    pub end_ms: f64,
}

impl TrimRange {
    /// Normalize raw endpoints into a valid range.
    ///
    /// Both endpoints are clamped into `[0, duration_ms]`. Returns `None`
    /// when any input is non-finite, the duration is not positive, or the
    /// clamped span is shorter than [`MIN_TRIM_GAP_MS`].
    pub fn clamped(start_ms: f64, end_ms: f64, duration_ms: f64) -> Option<Self> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return None;
        }
        if !start_ms.is_finite() || !end_ms.is_finite() {
            return None;
        }

        let start = start_ms.clamp(0.0, duration_ms);
        let end = end_ms.clamp(0.0, duration_ms);

        if end - start < MIN_TRIM_GAP_MS {
            return None;
        }

        Some(Self {
            start_ms: start,
            end_ms: end,
        })
    }

    /// Span of this range in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls inside this range.
    pub fn contains_ms(&self, ms: f64) -> bool {
        ms >= self.start_ms && ms < self.end_ms
    }
}

/// What the recommendation engine should optimize for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    /// Select the highest-energy segments (keep the interesting parts).
    Highlight,
    /// Select the lowest-energy segments (find removable dead air).
    Remove,
}

/// A recommended trim range with its aggregate energy score.
///
/// Scores are unit-less and comparable only within one computation run.
/// A set of recommendations for one request is ordered by ascending
/// `start_ms` and is pairwise non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrimRecommendation {
    /// Start timestamp in milliseconds.
    pub start_ms: f64,
    /// End timestamp in milliseconds.
    pub end_ms: f64,
    /// Aggregate energy over the recommended window.
    pub score: f64,
}

impl TrimRecommendation {
    /// The recommended window as a [`TrimRange`].
    pub fn range(&self) -> TrimRange {
        TrimRange {
            start_ms: self.start_ms,
            end_ms: self.end_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_valid_range() {
        let range = TrimRange::clamped(100.0, 900.0, 1000.0).unwrap();
        assert_eq!(range.start_ms, 100.0);
        assert_eq!(range.end_ms, 900.0);
        assert_eq!(range.duration_ms(), 800.0);
    }

    #[test]
    fn test_clamped_out_of_bounds() {
        let range = TrimRange::clamped(-500.0, 5000.0, 1000.0).unwrap();
        assert_eq!(range.start_ms, 0.0);
        assert_eq!(range.end_ms, 1000.0);
    }

    #[test]
    fn test_clamped_rejects_short_span() {
        assert!(TrimRange::clamped(100.0, 120.0, 1000.0).is_none());
        // Exactly at the gap is allowed.
        assert!(TrimRange::clamped(100.0, 150.0, 1000.0).is_some());
    }

    #[test]
    fn test_clamped_rejects_non_finite() {
        assert!(TrimRange::clamped(f64::NAN, 500.0, 1000.0).is_none());
        assert!(TrimRange::clamped(0.0, f64::INFINITY, 1000.0).is_none());
        assert!(TrimRange::clamped(0.0, 500.0, f64::NAN).is_none());
        assert!(TrimRange::clamped(0.0, 500.0, 0.0).is_none());
    }

    #[test]
    fn test_contains_ms() {
        let range = TrimRange {
            start_ms: 100.0,
            end_ms: 200.0,
        };
        assert!(range.contains_ms(100.0));
        assert!(range.contains_ms(199.9));
        assert!(!range.contains_ms(200.0));
        assert!(!range.contains_ms(50.0));
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&RecommendationMode::Highlight).unwrap(),
            "\"highlight\""
        );
        assert_eq!(
            serde_json::to_string(&RecommendationMode::Remove).unwrap(),
            "\"remove\""
        );
    }

    #[test]
    fn test_recommendation_range() {
        let rec = TrimRecommendation {
            start_ms: 2000.0,
            end_ms: 3000.0,
            score: 0.5,
        };
        assert_eq!(rec.range().duration_ms(), 1000.0);
    }
}
