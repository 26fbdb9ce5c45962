//! Tunables for the navigation, reveal and switcher state machines.
//!
//! Every field has a default so a partial JSON file only overrides what it
//! names. Durations are stored in milliseconds to keep the file format flat.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub switcher: SwitcherConfig,
    pub terminal: TerminalConfig,
}

/// Section tracking and cross-route scrolling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Distance of the reference line from the viewport top.
    pub reference_line_px: f64,
    /// Wait after navigating to the canonical route before scrolling.
    pub route_settle_ms: u64,
    /// Minimum spacing between two active-section evaluations.
    pub scroll_throttle_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            reference_line_px: 100.0,
            route_settle_ms: 100,
            scroll_throttle_ms: 16,
        }
    }
}

impl NavigationConfig {
    pub fn route_settle_delay(&self) -> Duration {
        Duration::from_millis(self.route_settle_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }
}

/// Scroll-reveal observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of an element that must be inside the root to count as visible.
    pub threshold: f64,
    /// Amount the observation root is shrunk at the viewport bottom.
    pub bottom_margin_px: f64,
    /// Per-index entrance delay for staggered cards.
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_margin_px: 50.0,
            stagger_ms: 100,
        }
    }
}

impl RevealConfig {
    /// Entrance delay for the card at `index` within its group.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
    }
}

/// Niche selector cross-fade and indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Time content stays hidden before the selection swap commits.
    pub crossfade_ms: u64,
    /// Inward offset keeping the indicator off the track edges.
    pub indicator_inset_px: f64,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            crossfade_ms: 200,
            indicator_inset_px: 4.0,
        }
    }
}

impl SwitcherConfig {
    pub fn crossfade_delay(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }
}

/// Terminal host specifics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// CSS pixels represented by one terminal row.
    pub px_per_row: u16,
    /// Duration of a smooth scroll animation.
    pub smooth_scroll_ms: u64,
    /// Rows moved per mouse wheel notch.
    pub wheel_rows: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            px_per_row: 16,
            smooth_scroll_ms: 300,
            wheel_rows: 3,
        }
    }
}

impl TerminalConfig {
    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}
