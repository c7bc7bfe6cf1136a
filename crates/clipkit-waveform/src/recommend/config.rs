//! Configuration for trim recommendation.

use clipkit_models::RecommendationMode;
use serde::{Deserialize, Serialize};

/// Options for one recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationOptions {
    /// Whether to chase the highest-energy or lowest-energy segments.
    pub mode: RecommendationMode,

    /// Maximum number of segments to recommend.
    ///
    /// The engine returns fewer when fewer non-overlapping candidates
    /// exist; zero is normalized to one.
    pub count: usize,

    /// Optional target segment length in milliseconds.
    ///
    /// Acts as a hint rather than a strict fixed size: the engine
    /// searches lengths around this target. Defaults to roughly a sixth
    /// of the clip duration when omitted.
    pub segment_ms: Option<f64>,
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            mode: RecommendationMode::Highlight,
            count: 3,
            segment_ms: None,
        }
    }
}

impl RecommendationOptions {
    /// Options tuned for picking highlights.
    pub fn highlight(count: usize) -> Self {
        Self {
            mode: RecommendationMode::Highlight,
            count,
            segment_ms: None,
        }
    }

    /// Options tuned for finding removable low-energy stretches.
    pub fn remove(count: usize) -> Self {
        Self {
            mode: RecommendationMode::Remove,
            count,
            segment_ms: None,
        }
    }

    /// Builder-style setter for the target segment length.
    pub fn with_segment_ms(mut self, segment_ms: f64) -> Self {
        self.segment_ms = Some(segment_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RecommendationOptions::default();
        assert_eq!(options.mode, RecommendationMode::Highlight);
        assert_eq!(options.count, 3);
        assert!(options.segment_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let options = RecommendationOptions::remove(2).with_segment_ms(1500.0);
        assert_eq!(options.mode, RecommendationMode::Remove);
        assert_eq!(options.count, 2);
        assert_eq!(options.segment_ms, Some(1500.0));
    }
}
