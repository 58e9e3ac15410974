//! Delivery seam between the game core and the realtime layer hosting
//! the connections.

pub mod peers;

use crate::event::Event;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outbound delivery primitives the core needs from a transport.
///
/// Delivery is fire-and-forget: the core never waits for acknowledgement,
/// and implementations swallow (and log) per-peer failures rather than
/// surfacing them.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Delivers to a single connection; unknown ids are a no-op.
    async fn send_to(&self, client_id: u64, event: Event);

    /// Delivers to every live connection.
    async fn send_to_all(&self, event: Event);
}

/// Allocates process-unique connection ids for transports.
pub fn next_connection_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
