//! Inbound decoded-audio adapter.
//!
//! Decoding itself is an external capability: the application hands the
//! engine whatever its decoder produced. These helpers normalize that
//! hand-off — per-channel buffers are averaged down to the single mono
//! buffer extraction operates on. Values outside `[-1, 1]` are passed
//! through here and clamped during reduction.

use tracing::debug;

/// Decoded audio ready for peak extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Mono-mixed samples.
    pub samples: Vec<f32>,
    /// Nominal total duration in milliseconds.
    pub duration_ms: f64,
}

impl DecodedAudio {
    /// Wrap an already-mono sample buffer.
    ///
    /// A non-finite or negative duration collapses to 0.
    pub fn new(samples: Vec<f32>, duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            samples,
            duration_ms,
        }
    }

    /// Mix per-channel buffers to mono and derive the duration from the
    /// frame count and sample rate.
    pub fn from_channels(channels: &[Vec<f32>], sample_rate: u32) -> Self {
        let samples = mix_to_mono(channels);
        let duration_ms = samples.len() as f64 * 1000.0 / f64::from(sample_rate.max(1));
        Self::new(samples, duration_ms)
    }
}

/// Average per-channel sample buffers down to one mono buffer.
///
/// Channels of unequal length are mixed out to the longest one, with
/// exhausted channels contributing silence. A single channel passes
/// through unchanged; empty input yields an empty buffer.
pub fn mix_to_mono(channels: &[Vec<f32>]) -> Vec<f32> {
    match channels {
        [] => Vec::new(),
        [mono] => mono.clone(),
        _ => {
            let frames = channels.iter().map(Vec::len).max().unwrap_or(0);
            let channel_count = channels.len() as f32;

            debug!(
                channels = channels.len(),
                frames, "Mixing channels to mono"
            );

            let mut mixed = vec![0.0f32; frames];
            for channel in channels {
                for (i, &sample) in channel.iter().enumerate() {
                    mixed[i] += sample / channel_count;
                }
            }
            mixed
        }
    }
}
