//! Tests for the notification hub and the `bidHired` wire contract.
use std::time::Duration;

use tokio::time::timeout;
use uuid::Uuid;

use gigbid_backend::notify::{BidHiredEvent, EventSink, NotificationHub, ServerEvent};

fn sample_event(freelancer_id: Uuid) -> BidHiredEvent {
    BidHiredEvent {
        bid_id: Uuid::new_v4(),
        freelancer_id,
        gig_title: "Logo design".to_string(),
        message: "You have been hired for Logo design!".to_string(),
    }
}

#[tokio::test]
async fn broadcast_reaches_every_listener() {
    let hub = NotificationHub::new();
    let hired = Uuid::new_v4();
    let other = Uuid::new_v4();

    let mut rx_hired = hub.join(hired).await;
    let mut rx_other = hub.join(other).await;
    assert_eq!(hub.connection_count().await, 2);

    hub.broadcast(ServerEvent::BidHired(sample_event(hired))).await;

    // Everyone gets the event; consumers filter by freelancerId themselves.
    for rx in [&mut rx_hired, &mut rx_other] {
        let event = rx.try_recv().expect("event should be delivered");
        let ServerEvent::BidHired(payload) = event;
        assert_eq!(payload.freelancer_id, hired);
    }
}

#[tokio::test]
async fn leave_drops_the_connection() {
    let hub = NotificationHub::new();
    let user = Uuid::new_v4();

    let mut rx = hub.join(user).await;
    hub.leave(user).await;
    assert_eq!(hub.connection_count().await, 0);

    // The sender is gone, so the receiver reports closed.
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn a_user_with_two_connections_keeps_one_after_leave() {
    let hub = NotificationHub::new();
    let user = Uuid::new_v4();

    let _rx_a = hub.join(user).await;
    let mut rx_b = hub.join(user).await;

    hub.leave(user).await;
    assert_eq!(hub.connection_count().await, 1);

    hub.broadcast(ServerEvent::BidHired(sample_event(user))).await;
    assert!(rx_b.try_recv().is_ok());
}

#[tokio::test]
async fn event_sink_emission_is_asynchronous_and_delivered() {
    let hub = NotificationHub::new();
    let user = Uuid::new_v4();
    let mut rx = hub.join(user).await;

    // The sink spawns the broadcast; the call itself never blocks.
    hub.bid_hired(sample_event(user));

    let event = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("event should arrive promptly")
        .expect("channel should stay open");
    let ServerEvent::BidHired(payload) = event;
    assert_eq!(payload.freelancer_id, user);
}

#[test]
fn bid_hired_wire_shape_is_camel_case_and_tagged() {
    let freelancer = Uuid::new_v4();
    let event = ServerEvent::BidHired(sample_event(freelancer));

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "bidHired");
    assert_eq!(value["freelancerId"], freelancer.to_string());
    assert_eq!(value["gigTitle"], "Logo design");
    assert!(value["bidId"].is_string());
    assert_eq!(value["message"], "You have been hired for Logo design!");
}
