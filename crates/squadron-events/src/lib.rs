//! # squadron-events
//!
//! A topic-keyed, synchronous event bus for the Squadron run engine
//! (spec §4.3).
//!
//! - [`Topic`]: the six lifecycle events a [`Run`](squadron_core::Run) can emit.
//! - [`EventBus`]: `on`/`off`/`emit`, subscriber lists snapshotted before
//!   dispatch so subscribers added mid-emission never see the in-flight
//!   event, and subscriber panics isolated so one bad handler never stops
//!   delivery to the rest.

#![deny(unsafe_code)]

mod bus;
mod topic;

pub use bus::{EventBus, SubscriptionId};
pub use topic::Topic;
