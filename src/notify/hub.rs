use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::notify::{BidHiredEvent, EventSink, ServerEvent};

/// A handle to send events to a connected WebSocket client.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    pub user_id: Uuid,
    pub sender: mpsc::UnboundedSender<ServerEvent>,
}

/// Registry of all connected notification listeners.
///
/// Events are broadcast to every connected client; consumers filter by
/// matching their own identity against the event's `freelancerId`. A user can
/// hold several connections (multiple tabs) and each gets its own handle.
#[derive(Clone, Default)]
pub struct NotificationHub {
    clients: Arc<RwLock<Vec<ClientHandle>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new WebSocket connection.
    /// Returns a receiver that the session loop should listen on.
    pub async fn join(&self, user_id: Uuid) -> mpsc::UnboundedReceiver<ServerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = ClientHandle {
            user_id,
            sender: tx,
        };

        self.clients.write().await.push(handle);

        rx
    }

    /// Remove one connection for a user.
    /// (A user could have multiple connections, so only remove one.)
    pub async fn leave(&self, user_id: Uuid) {
        let mut clients = self.clients.write().await;
        if let Some(pos) = clients.iter().position(|c| c.user_id == user_id) {
            clients.remove(pos);
        }
    }

    /// Broadcast an event to every connected client.
    pub async fn broadcast(&self, event: ServerEvent) {
        let clients = self.clients.read().await;
        for client in clients.iter() {
            // If the send fails, the receiver has been dropped (disconnected).
            // The session loop's leave() will clean it up.
            let _ = client.sender.send(event.clone());
        }
    }

    /// Number of currently registered connections.
    pub async fn connection_count(&self) -> usize {
        self.clients.read().await.len()
    }
}

impl EventSink for NotificationHub {
    fn bid_hired(&self, event: BidHiredEvent) {
        // Spawned so emission can never block or fail the hire path.
        let hub = self.clone();
        tokio::spawn(async move {
            hub.broadcast(ServerEvent::BidHired(event)).await;
        });
    }
}
