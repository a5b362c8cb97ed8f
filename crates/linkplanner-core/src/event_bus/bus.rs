//! Event bus: synchronous handlers plus a broadcast channel.

use parking_lot::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Broadcast buffer used by [`EventBus::new`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Which events a handler wants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Events of one category only.
    pub fn only(category: EventCategory) -> Self {
        EventFilter::Categories(vec![category])
    }

    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither a handler nor a receiver is attached.
    #[error("No active subscribers")]
    NoSubscribers,
}

type Handler = Box<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Fan-out point for [`AppEvent`]s.
///
/// Handlers run on the publishing thread in subscription order. Async code
/// takes a [`broadcast::Receiver`] from [`EventBus::receiver`] instead; a
/// receiver that falls more than the channel capacity behind loses the
/// oldest events.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Delivers `event` to matching handlers and to every receiver.
    ///
    /// Returns how many handlers and receivers got it.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        tracing::trace!("event: {}", event.description());

        let subscribers = self.subscribers.read();
        let mut delivered = 0;
        for subscriber in subscribers.iter().filter(|s| s.filter.matches(&event)) {
            (subscriber.handler)(&event);
            delivered += 1;
        }

        let receivers = self.sender.send(event).unwrap_or(0);
        if subscribers.is_empty() && receivers == 0 {
            return Err(EventBusError::NoSubscribers);
        }
        Ok(delivered + receivers)
    }

    /// Registers a handler. Handlers must not publish on the same bus.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// A receiver for use from a tokio task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Number of handlers, not counting receivers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.receiver_count())
            .finish()
    }
}
