//! Field configuration: particle counts, sampling ranges, canvas sizing.

use std::ops::Range;

/// How a field's canvas is sized against the viewport.
///
/// Historically every call site hand-rolled its own sizing; the two shapes
/// that survived are "cover the whole viewport" (the page-level backdrop)
/// and "full width at a fixed pixel height" (per-section strips).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizingPolicy {
    /// Full viewport width and height.
    Viewport,
    /// Full viewport width, fixed height in CSS pixels.
    FixedHeight(f64),
}

impl SizingPolicy {
    /// Resolve the policy against the current viewport size.
    pub fn resolve(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        match *self {
            SizingPolicy::Viewport => (viewport_width, viewport_height),
            SizingPolicy::FixedHeight(h) => (viewport_width, h),
        }
    }
}

/// Sampling ranges for a field's particles. All parameters are drawn
/// independently and uniformly at spawn time and stay fixed for the
/// particle's lifetime; only position changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of particles, fixed for the field's lifetime.
    pub count: usize,
    /// Circle radius range, CSS pixels.
    pub radius: Range<f64>,
    /// Horizontal velocity range, pixels per tick.
    pub drift_x: Range<f64>,
    /// Vertical velocity range, pixels per tick.
    pub drift_y: Range<f64>,
    /// Base alpha range for the fill color.
    pub opacity: Range<f64>,
}

impl FieldConfig {
    /// Preset for the page-level backdrop: more particles, smaller and
    /// fainter, spread over the whole viewport.
    pub fn page() -> Self {
        Self {
            count: 48,
            radius: 1.2..4.0,
            drift_x: -0.2..0.2,
            drift_y: -0.15..0.15,
            opacity: 0.10..0.26,
        }
    }

    /// Preset for the per-section strips: fewer but larger, brighter
    /// particles over a fixed-height band.
    pub fn section() -> Self {
        Self {
            count: 40,
            radius: 1.5..5.0,
            drift_x: -0.15..0.15,
            drift_y: -0.1..0.1,
            opacity: 0.2..0.5,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::section()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn viewport_policy_passes_both_axes_through() {
        assert_eq!(
            SizingPolicy::Viewport.resolve(1280.0, 720.0),
            (1280.0, 720.0)
        );
    }

    #[test]
    fn fixed_height_policy_keeps_its_height() {
        assert_eq!(
            SizingPolicy::FixedHeight(400.0).resolve(1280.0, 720.0),
            (1280.0, 400.0)
        );
    }

    #[test]
    fn presets_keep_their_counts() {
        assert_eq!(FieldConfig::page().count, 48);
        assert_eq!(FieldConfig::section().count, 40);
    }
}
