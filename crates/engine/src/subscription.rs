//! Scoped subscriptions to shared ambient event streams.
//!
//! The scroll, pointer and intersection streams are shared by every component
//! of a page. A component acquires a [`Subscription`] when it activates and
//! holds it for as long as it listens; dropping the guard releases it. The hub
//! keeps the live set so hosts and tests can assert that nothing leaks and
//! nothing is attached twice.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use tracing::trace;

/// Shared event streams a component can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Page scroll events.
    Scroll,
    /// Pointer movement used for hover regions.
    Pointer,
    /// Viewport intersection batches.
    Intersection,
}

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    active: BTreeMap<u64, (Channel, &'static str)>,
}

/// Registry of live subscriptions. Cloning yields another handle to the same hub.
#[derive(Debug, Default, Clone)]
pub struct SubscriptionHub {
    state: Rc<RefCell<HubState>>,
}

impl SubscriptionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener on `channel`. `owner` labels the subscriber in logs.
    pub fn subscribe(&self, channel: Channel, owner: &'static str) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.active.insert(id, (channel, owner));
        trace!(id, ?channel, owner, "subscription acquired");
        Subscription {
            id,
            channel,
            owner,
            hub: Rc::downgrade(&self.state),
        }
    }

    /// Number of live subscriptions on `channel`.
    pub fn active_count(&self, channel: Channel) -> usize {
        self.state
            .borrow()
            .active
            .values()
            .filter(|(subscribed, _)| *subscribed == channel)
            .count()
    }

    /// Number of live subscriptions on `channel` held by `owner`.
    pub fn owned_count(&self, channel: Channel, owner: &str) -> usize {
        self.state
            .borrow()
            .active
            .values()
            .filter(|(subscribed, label)| *subscribed == channel && *label == owner)
            .count()
    }

    pub fn total_active(&self) -> usize {
        self.state.borrow().active.len()
    }
}

/// Guard for one live subscription; released exactly once when dropped.
pub struct Subscription {
    id: u64,
    channel: Channel,
    owner: &'static str,
    hub: Weak<RefCell<HubState>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("channel", &self.channel)
            .field("owner", &self.owner)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.hub.upgrade() {
            state.borrow_mut().active.remove(&self.id);
            trace!(id = self.id, channel = ?self.channel, owner = self.owner, "subscription released");
        }
    }
}
