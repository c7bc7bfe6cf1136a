#![deny(unreachable_patterns)]
//! Waveform analysis and trim recommendation for the ClipKit editor.
//!
//! This crate provides:
//! - Cooperative peak extraction that never monopolizes the caller's
//!   runtime (chunked work with explicit yield points)
//! - Cancellation support via tokio watch channels
//! - A multi-resolution peak pyramid for rendering at any zoom level
//! - A dynamic-programming search recommending trim segments over the
//!   extracted peaks
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Decoded audio│───►│ Peak         │───►│ Recommendation│
//! │ (mono f32)   │    │ extraction   │    │ engine (DP)  │
//! └──────────────┘    │ + pyramid    │    └──────────────┘
//!                     └──────────────┘           │
//!                            │                   ▼
//!                            ▼            ┌──────────────┐
//!                     ┌──────────────┐    │ Trim         │
//!                     │ Rendering    │    │ recommenda-  │
//!                     │ (peak bars)  │    │ tions (UI)   │
//!                     └──────────────┘    └──────────────┘
//! ```
//!
//! The engine never mutates caller-owned buffers; every output is freshly
//! allocated. Decode itself is an external capability — callers hand the
//! engine a mono-mixed `f32` sample buffer (see [`audio`]).

pub mod audio;
pub mod error;
pub mod peaks;
pub mod recommend;

pub use audio::{mix_to_mono, DecodedAudio};
pub use error::{WaveformError, WaveformResult};
pub use peaks::{
    compute_peaks, float_to_i16, AggregationMode, PeaksConfig, PeaksExtractor, PeaksOutput,
    ProgressCallback,
};
pub use recommend::{recommend_trim_segments, RecommendationOptions};

// Re-export the model types the engine produces and consumes.
pub use clipkit_models::{
    RecommendationMode, TrimRange, TrimRecommendation, WaveformPeaks, WaveformPyramid,
    MIN_TRIM_GAP_MS,
};
