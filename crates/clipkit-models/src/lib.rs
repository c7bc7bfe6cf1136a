//! Shared data models for the ClipKit editor engine.
//!
//! This crate provides Serde-serializable types for:
//! - Waveform peaks and the multi-resolution peak pyramid
//! - Trim ranges and trim recommendations
//! - View ranges and time/fraction mapping

pub mod trim;
pub mod view;
pub mod waveform;

// Re-export common types
pub use trim::{RecommendationMode, TrimRange, TrimRecommendation, MIN_TRIM_GAP_MS};
pub use view::{fraction_to_ms, ms_to_fraction, resolve_view_range, ViewRange};
pub use waveform::{WaveformPeaks, WaveformPyramid};
