//! # AIStudio TUI
//!
//! Terminal host for the AIStudio marketing site. Each route is laid out as a
//! scrollable page under a fixed navigation bar; the navigation, dropdown,
//! scroll-reveal and niche selector behavior comes from `aistudio-engine`.
//!
//! Input: mouse hover and clicks drive the dropdown and the niche labels, the
//! wheel and arrow keys scroll, number keys jump to sections, `g`/`n` open the
//! services pages, `q` quits.

mod app;
mod router;
mod ui;

use aistudio_content::SiteContent;
use aistudio_types::{Route, SiteConfig};
use anyhow::Result;

/// Runs the terminal UI until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or drawn to.
pub async fn run(content: &'static SiteContent, config: SiteConfig, route: Route) -> Result<()> {
    ui::runtime::run_app(content, config, route).await
}
