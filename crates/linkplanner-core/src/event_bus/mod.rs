//! # Event Bus Module
//!
//! Publish/subscribe channel for domain notifications: tower and link
//! changes, selection transitions, user-visible notices and elevation
//! results.
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async `broadcast` receivers
//!
//! The bus is an ordinary value. Components that publish take an
//! `Arc<EventBus>` at construction time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkplanner_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, NoticeEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Notice]),
//!     |event| {
//!         if let AppEvent::Notice(notice) = event {
//!             eprintln!("{}", notice.message());
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Notice(NoticeEvent::Warning {
//!     message: "Cannot connect towers with different frequencies.".to_string(),
//! }))
//! .ok();
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
