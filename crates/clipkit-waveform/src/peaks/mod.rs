//! Waveform peak extraction.
//!
//! Reduces a decoded mono sample buffer into the compact `(lo, hi)` peak
//! representation the editor renders and analyzes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Sample buffer│───►│ Bucket       │───►│ Quantization │
//! │ (mono f32)   │    │ reduction    │    │ (i16 pairs)  │
//! └──────────────┘    │ (chunked)    │    └──────────────┘
//!                     └──────────────┘           │
//!                            │                   ▼
//!                     yield / cancel      ┌──────────────┐
//!                     at chunk bounds     │ Pyramid      │
//!                                         │ (coarser     │
//!                                         │  levels)     │
//!                                         └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use clipkit_waveform::peaks::{PeaksConfig, PeaksExtractor};
//!
//! let config = PeaksConfig::default()
//!     .with_pyramid_levels(4)
//!     .with_return_pyramid(true);
//! let output = PeaksExtractor::new(config)
//!     .with_cancel(cancel_rx)
//!     .compute(&samples, 800)
//!     .await?;
//! ```

mod config;
mod extract;
mod pyramid;
mod reduce;

pub use config::{AggregationMode, PeaksConfig};
pub use extract::{compute_peaks, PeaksExtractor, PeaksOutput, ProgressCallback};
pub use reduce::float_to_i16;

/// Default configuration for interactive timeline rendering.
pub fn default_config() -> PeaksConfig {
    PeaksConfig::default()
}
