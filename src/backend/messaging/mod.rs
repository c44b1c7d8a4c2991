//! Messaging Module
//!
//! Append-only messaging between two participants, with canonical thread
//! addressing.
//!
//! - **`thread_log`** - The store-backed `ThreadedMessageLog` facade
//! - **`handlers`** - HTTP handler for `/send-message`

pub mod handlers;
pub mod thread_log;

pub use thread_log::{thread_id, ThreadedMessageLog};
