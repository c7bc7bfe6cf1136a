//! Trim recommendation over extracted waveform peaks.
//!
//! Given a peak buffer and a target segment-length hint, the engine
//! enumerates candidate segments, scores them by aggregate energy, and
//! selects the best non-overlapping subset.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Peaks        │───►│ Prefix sums  │───►│ Candidates   │
//! │ (lo/hi i16)  │    │ (O(1) range  │    │ (start x     │
//! └──────────────┘    │  scoring)    │    │  length grid)│
//!                     └──────────────┘    └──────────────┘
//!                                                │
//!                                                ▼
//!                     ┌──────────────┐    ┌──────────────┐
//!                     │ Trim recom-  │◄───│ Interval     │
//!                     │ mendations   │    │ scheduling DP│
//!                     └──────────────┘    └──────────────┘
//! ```
//!
//! In `highlight` mode the selection maximizes energy; in `remove` mode
//! candidate weights are inverted first, so the same maximization finds
//! the most removable (lowest-energy) stretches.
//!
//! # Usage
//!
//! ```rust,ignore
//! use clipkit_waveform::recommend::{recommend_trim_segments, RecommendationOptions};
//!
//! let options = RecommendationOptions::highlight(3).with_segment_ms(8_000.0);
//! let recommendations = recommend_trim_segments(&peaks, duration_ms, &options);
//! ```

mod analyze;
mod candidates;
mod config;
mod select;

pub use analyze::recommend_trim_segments;
pub use config::RecommendationOptions;
