//! Cooperative peak extraction.
//!
//! Extraction reduces the whole sample buffer into a fixed bucket count
//! without monopolizing the host runtime: it processes a bounded chunk of
//! buckets, yields to the scheduler, and checks its cancellation handle
//! at every chunk boundary. Buckets are always computed in strictly
//! increasing index order, and each invocation owns its output buffer
//! exclusively.

use clipkit_models::{WaveformPeaks, WaveformPyramid};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::error::{WaveformError, WaveformResult};

use super::config::PeaksConfig;
use super::pyramid::{build_pyramid, LevelState};
use super::reduce::bucket_bounds;

/// Callback type for extraction progress, invoked with the completed
/// fraction in `[0, 1]` at each chunk boundary and on completion.
pub type ProgressCallback = Box<dyn Fn(f32) + Send + Sync + 'static>;

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct PeaksOutput {
    /// Base-resolution peaks (pyramid level 0).
    pub peaks: WaveformPeaks,
    /// Coarser levels, present when the config requested a pyramid.
    pub pyramid: Option<WaveformPyramid>,
}

/// Runner for peak extraction with cancellation and progress tracking.
pub struct PeaksExtractor {
    config: PeaksConfig,
    /// Cancellation signal receiver
    cancel_rx: Option<watch::Receiver<bool>>,
    /// Progress callback
    progress: Option<ProgressCallback>,
}

impl PeaksExtractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: PeaksConfig) -> Self {
        Self {
            config,
            cancel_rx: None,
            progress: None,
        }
    }

    /// Set a cancellation signal.
    ///
    /// The handle is checked once before any work and again at each chunk
    /// boundary. A cancellation mid-chunk lets the in-progress chunk
    /// finish but discards all partial results.
    pub fn with_cancel(mut self, cancel_rx: watch::Receiver<bool>) -> Self {
        self.cancel_rx = Some(cancel_rx);
        self
    }

    /// Set a progress callback.
    pub fn with_progress(mut self, callback: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Reduce `samples` into `bucket_count` buckets.
    ///
    /// `bucket_count` is floored to at least 1. Empty input resolves
    /// immediately with an all-zero buffer of the requested size — not an
    /// error, and deliberately ahead of the cancellation check. The only
    /// failure mode is [`WaveformError::Cancelled`].
    pub async fn compute(&self, samples: &[f32], bucket_count: usize) -> WaveformResult<PeaksOutput> {
        let buckets = bucket_count.max(1);

        if samples.is_empty() {
            self.report_progress(1.0);
            return Ok(PeaksOutput {
                peaks: WaveformPeaks::zeroed(buckets),
                pyramid: None,
            });
        }

        self.ensure_not_cancelled()?;

        debug!(
            samples = samples.len(),
            buckets,
            mode = ?self.config.mode,
            pyramid_levels = self.config.pyramid_levels,
            "Starting peak extraction"
        );

        let chunk_size = self.config.chunk_size.max(1);
        let mut state = LevelState::with_capacity(self.config.mode, buckets);
        let mut done = 0;

        while done < buckets {
            let chunk_end = (done + chunk_size).min(buckets);
            for index in done..chunk_end {
                let (start, end) = bucket_bounds(samples.len(), buckets, index);
                state.push_bucket(samples, start, end);
            }
            done = chunk_end;
            self.report_progress(done as f32 / buckets as f32);
            trace!(done, buckets, "Chunk reduced");

            if done < buckets {
                tokio::task::yield_now().await;
                self.ensure_not_cancelled()?;
            }
        }

        let wants_pyramid = self.config.return_pyramid && self.config.pyramid_levels > 1;
        let (peaks, pyramid) = if wants_pyramid {
            let pyramid = build_pyramid(state, self.config.pyramid_levels);
            let base = pyramid
                .level(0)
                .cloned()
                .unwrap_or_else(|| WaveformPeaks::zeroed(buckets));
            (base, Some(pyramid))
        } else {
            (state.quantize(), None)
        };

        debug!(
            buckets,
            levels = pyramid.as_ref().map_or(1, WaveformPyramid::len),
            "Peak extraction complete"
        );

        Ok(PeaksOutput { peaks, pyramid })
    }

    fn ensure_not_cancelled(&self) -> WaveformResult<()> {
        match &self.cancel_rx {
            Some(cancel_rx) if *cancel_rx.borrow() => {
                debug!("Peak extraction cancelled");
                Err(WaveformError::Cancelled)
            }
            _ => Ok(()),
        }
    }

    fn report_progress(&self, fraction: f32) {
        if let Some(callback) = &self.progress {
            callback(fraction);
        }
    }
}

/// Extract base-resolution peaks with the default configuration and no
/// cancellation handle.
pub async fn compute_peaks(samples: &[f32], bucket_count: usize) -> WaveformResult<WaveformPeaks> {
    let output = PeaksExtractor::new(PeaksConfig::default())
        .compute(samples, bucket_count)
        .await?;
    Ok(output.peaks)
}
