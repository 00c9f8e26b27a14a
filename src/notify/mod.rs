pub mod hub;
pub mod session;

use serde::Serialize;
use uuid::Uuid;

pub use hub::NotificationHub;

/// Payload of the `bidHired` event, matching the wire contract consumed by
/// the frontend: `{ bidId, freelancerId, gigTitle, message }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidHiredEvent {
    pub bid_id: Uuid,
    pub freelancer_id: Uuid,
    pub gig_title: String,
    pub message: String,
}

/// Events pushed to connected WebSocket listeners, tagged by name.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ServerEvent {
    BidHired(BidHiredEvent),
}

/// Where the hire engine publishes its one-shot events.
///
/// Implementations must be fire-and-forget: emission never blocks the caller
/// and a delivery failure never unwinds a committed hire. Production wires
/// this to [`NotificationHub`]; tests bind an in-memory recorder.
pub trait EventSink: Send + Sync {
    fn bid_hired(&self, event: BidHiredEvent);
}
