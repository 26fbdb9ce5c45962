//! # AIStudio Engine
//!
//! Host-agnostic state machines behind the site's navigation bar and niche
//! selector page. Nothing here draws anything: the host feeds events in
//! (scroll, pointer, clicks, timer ticks) and reads derived state back out
//! (active section, dropdown visibility, reveal flags, indicator position).
//!
//! ## Components
//!
//! - **`section_tracker`**: active section derivation and cross-route
//!   scroll-to-section
//! - **`dropdown`**: hover-driven services sub-menu
//! - **`reveal`**: scroll-triggered entrance flags over a static target set
//! - **`switcher`**: niche selection with a cross-fade and a moving indicator
//!
//! ## Primitives
//!
//! - **`subscription`**: scoped subscriptions to the shared scroll, pointer
//!   and intersection streams, released on drop
//! - **`schedule`**: a cancellable deferred slot; scheduling supersedes any
//!   pending task of the same slot
//! - **`throttle`**: leading + trailing throttle for scroll evaluation
//! - **`intersection`**: viewport intersection computation
//!
//! ## Host boundary
//!
//! The host implements [`Viewport`] (geometry reads, smooth scroll, target
//! discovery) and [`Router`] (current route, navigation). Time is passed in
//! explicitly as [`std::time::Instant`] so every state machine is
//! deterministic under test.

pub mod dropdown;
pub mod host;
pub mod intersection;
pub mod reveal;
pub mod schedule;
pub mod section_tracker;
pub mod subscription;
pub mod switcher;
pub mod throttle;

pub use dropdown::{DropdownController, DropdownState, trigger_looks_active};
pub use host::{Router, Viewport};
pub use intersection::{IntersectionEntry, IntersectionObserver, IntersectionOptions, intersection_ratio};
pub use reveal::RevealAnimator;
pub use schedule::DeferredSlot;
pub use section_tracker::{PendingScroll, SectionTracker, TrackingMode, section_at_line};
pub use subscription::{Channel, Subscription, SubscriptionHub};
pub use switcher::{CategorySwitcher, IndicatorStyle, indicator_position};
pub use throttle::Throttle;
