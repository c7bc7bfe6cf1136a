//! View range resolution and time/fraction mapping.
//!
//! The timeline UI works in two coordinate systems: absolute milliseconds
//! and normalized `[0, 1]` fractions of the currently visible window.
//! These helpers translate between them. They are pure math with no
//! failure modes: out-of-range, inverted, or non-finite inputs are
//! corrected by clamping and defaulting rather than rejected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The resolved visible window over one clip.
///
/// Always satisfies `0 <= view_start_ms <= view_end_ms <= duration_ms`.
/// Never stored; recomputed on demand from raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewRange {
    /// Total clip duration in milliseconds.
    pub duration_ms: f64,
    /// Visible window start in milliseconds.
    pub view_start_ms: f64,
    /// Visible window end in milliseconds.
    pub view_end_ms: f64,
    /// Visible window span in milliseconds.
    pub view_duration_ms: f64,
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Collapse non-finite values to a fallback before clamping.
fn sanitize(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Resolve a visible window from raw, possibly unordered inputs.
///
/// Missing bounds default to `[0, duration_ms]`; both bounds are clamped
/// into `[0, duration_ms]` and reordered if inverted.
pub fn resolve_view_range(
    duration_ms: f64,
    view_start_ms: Option<f64>,
    view_end_ms: Option<f64>,
) -> ViewRange {
    let safe_duration = if duration_ms.is_finite() {
        duration_ms.max(0.0)
    } else {
        0.0
    };
    let start = clamp(sanitize(view_start_ms, 0.0), 0.0, safe_duration);
    let end = clamp(sanitize(view_end_ms, safe_duration), 0.0, safe_duration);
    let ordered_start = start.min(end);
    let ordered_end = start.max(end);

    ViewRange {
        duration_ms: safe_duration,
        view_start_ms: ordered_start,
        view_end_ms: ordered_end,
        view_duration_ms: (ordered_end - ordered_start).max(0.0),
    }
}

/// Map an absolute timestamp to its `[0, 1]` fraction of the visible
/// window. Returns 0 for an empty window.
pub fn ms_to_fraction(
    ms: f64,
    duration_ms: f64,
    view_start_ms: Option<f64>,
    view_end_ms: Option<f64>,
) -> f64 {
    let view = resolve_view_range(duration_ms, view_start_ms, view_end_ms);

    if view.view_duration_ms <= 0.0 {
        return 0.0;
    }

    clamp((ms - view.view_start_ms) / view.view_duration_ms, 0.0, 1.0)
}

/// Map a `[0, 1]` fraction of the visible window back to an absolute
/// timestamp. The fraction is clamped into `[0, 1]` first.
pub fn fraction_to_ms(
    fraction: f64,
    duration_ms: f64,
    view_start_ms: Option<f64>,
    view_end_ms: Option<f64>,
) -> f64 {
    let view = resolve_view_range(duration_ms, view_start_ms, view_end_ms);
    let clamped = clamp(fraction, 0.0, 1.0);
    view.view_start_ms + clamped * view.view_duration_ms
}
