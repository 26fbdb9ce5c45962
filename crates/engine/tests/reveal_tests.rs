mod common;

use std::time::{Duration, Instant};

use aistudio_engine::{Channel, RevealAnimator, SubscriptionHub};
use aistudio_types::RevealConfig;
use common::FakePage;

fn page() -> FakePage {
    // 800px viewport; cards far enough apart to be observed one at a time.
    FakePage::with_reveal_targets(
        800.0,
        &[("hero", 0.0, 300.0), ("card-0", 1000.0, 200.0), ("card-1", 2000.0, 200.0)],
    )
}

#[test]
fn visibility_follows_the_viewport_in_both_directions() {
    let hub = SubscriptionHub::new();
    let mut page = page();
    let mut reveal = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    let start = Instant::now();

    reveal.observe(&page, start);
    assert!(reveal.is_visible("hero"));
    assert!(!reveal.is_visible("card-0"));

    page.scroll_to(700.0);
    reveal.observe(&page, start + Duration::from_millis(10));
    assert!(reveal.is_visible("card-0"));
    assert!(!reveal.is_visible("hero"));
    assert_eq!(reveal.visible_since("card-0"), Some(start + Duration::from_millis(10)));

    page.scroll_to(0.0);
    reveal.observe(&page, start + Duration::from_millis(20));
    assert!(!reveal.is_visible("card-0"));
    assert_eq!(reveal.visible_since("card-0"), None);

    page.scroll_to(700.0);
    reveal.observe(&page, start + Duration::from_millis(30));
    assert!(reveal.is_visible("card-0"));
}

#[test]
fn repeated_observation_is_idempotent() {
    let hub = SubscriptionHub::new();
    let page = page();
    let mut reveal = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    let start = Instant::now();

    assert_eq!(reveal.observe(&page, start), 1);
    assert_eq!(reveal.observe(&page, start), 0);
    assert_eq!(reveal.visible_count(), 1);
}

#[test]
fn threshold_and_bottom_margin_delay_the_reveal() {
    let hub = SubscriptionHub::new();
    let mut page = page();
    let mut reveal = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    let start = Instant::now();

    // card-0 top sits 40px above the viewport bottom: inside the raw viewport,
    // but within the 50px bottom margin.
    page.scroll_to(240.0);
    reveal.observe(&page, start);
    assert!(!reveal.is_visible("card-0"));

    // 20px of 200px inside the shrunk root: ratio 0.10, under the threshold.
    page.scroll_to(270.0);
    reveal.observe(&page, start);
    assert!(!reveal.is_visible("card-0"));

    // 40px of 200px: ratio 0.20.
    page.scroll_to(290.0);
    reveal.observe(&page, start);
    assert!(reveal.is_visible("card-0"));
}

#[test]
fn targets_are_snapshotted_at_mount() {
    let hub = SubscriptionHub::new();
    let mut page = page();
    let mut reveal = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    page.add_element("late-card", 100.0, 100.0, true);

    reveal.observe(&page, Instant::now());
    assert!(!reveal.is_visible("late-card"));
    assert_eq!(reveal.targets().collect::<Vec<_>>(), ["hero", "card-0", "card-1"]);
}

#[test]
fn unmount_and_drop_release_the_observer() {
    let hub = SubscriptionHub::new();
    let mut page = page();
    let mut reveal = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    assert_eq!(hub.active_count(Channel::Intersection), 1);

    reveal.unmount();
    assert_eq!(hub.active_count(Channel::Intersection), 0);
    assert!(!reveal.is_mounted());

    page.scroll_to(700.0);
    assert_eq!(reveal.observe(&page, Instant::now()), 0);

    let second = RevealAnimator::mount(&page, &hub, &RevealConfig::default());
    assert_eq!(hub.active_count(Channel::Intersection), 1);
    drop(second);
    assert_eq!(hub.total_active(), 0);
}
