//! # Event Bus Module
//!
//! Publish/subscribe plumbing between editing surfaces and their listeners
//! (level listing, unsaved-changes tracking, property dialogs).
//!
//! ```rust,ignore
//! use staredit_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Level]),
//!     |event| {
//!         if let EditorEvent::LevelChanged { level } = event {
//!             println!("redraw listing row for {}", level);
//!         }
//!     },
//! );
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
