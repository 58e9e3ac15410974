
use crate::event::Event;
use crate::gateway::Gateway;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;
use tracing::debug;

/// Channel-backed [`Gateway`]: one unbounded queue of typed events per
/// connection.
///
/// Transports drain each queue into their socket; tests and in-process
/// embedders read it directly, no networking involved.
#[derive(Default)]
pub struct PeerGateway {
    peers: RwLock<HashMap<u64, UnboundedSender<Event>>>,
}

impl PeerGateway {
    pub fn new() -> PeerGateway {
        PeerGateway::default()
    }

    /// Opens the outbound queue for a connection and hands back its
    /// reading end.
    ///
    /// Registering the same id again replaces the previous queue.
    pub async fn register(&self, client_id: u64) -> UnboundedReceiver<Event> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.peers.write().await.insert(client_id, tx);
        rx
    }

    /// Closes the outbound queue; undelivered events are dropped with it.
    pub async fn deregister(&self, client_id: u64) {
        self.peers.write().await.remove(&client_id);
    }

    pub async fn peer_count(&self) -> usize {
        self.peers.read().await.len()
    }
}

#[async_trait]
impl Gateway for PeerGateway {
    async fn send_to(&self, client_id: u64, event: Event) {
        if let Some(tx) = self.peers.read().await.get(&client_id) {
            if tx.send(event).is_err() {
                debug!(client = client_id, "peer queue closed, dropping event");
            }
        }
    }

    async fn send_to_all(&self, event: Event) {
        let mut dead = Vec::new();
        {
            let peers = self.peers.read().await;
            for (&id, tx) in peers.iter() {
                if tx.send(event.clone()).is_err() {
                    dead.push(id);
                }
            }
        }
        if !dead.is_empty() {
            let mut peers = self.peers.write().await;
            for id in dead {
                peers.remove(&id);
                debug!(client = id, "pruned dead peer");
            }
        }
    }
}
