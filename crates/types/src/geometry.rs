use serde::{Deserialize, Serialize};

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
///
/// Negative values mean the edge sits above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the element spans the horizontal line at `line` (edges inclusive).
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }

    /// Height of the overlap with the band `[band_top, band_bottom]`.
    pub fn overlap(&self, band_top: f64, band_bottom: f64) -> f64 {
        (self.bottom.min(band_bottom) - self.top.max(band_top)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ElementRect;

    #[test]
    fn straddle_is_inclusive_on_both_edges() {
        let rect = ElementRect::new(100.0, 300.0);
        assert!(rect.straddles(100.0));
        assert!(rect.straddles(300.0));
        assert!(!rect.straddles(99.5));
        assert!(!rect.straddles(300.5));
    }

    #[test]
    fn overlap_clamps_to_zero() {
        let rect = ElementRect::new(-50.0, 50.0);
        assert_eq!(rect.overlap(0.0, 500.0), 50.0);
        assert_eq!(rect.overlap(60.0, 500.0), 0.0);
        assert_eq!(rect.height(), 100.0);
    }
}
