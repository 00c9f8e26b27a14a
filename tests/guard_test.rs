//! Tests for the pure access-guard decisions: who may submit bids, view
//! them, and hire. No database involved — the guard works on already-fetched
//! entity state.
use chrono::Utc;
use uuid::Uuid;

use gigbid_backend::error::ApiError;
use gigbid_backend::hire::guard;
use gigbid_backend::models::gigs::{self, GigStatus};

fn gig_with_status(owner: Uuid, status: GigStatus) -> gigs::Model {
    gigs::Model {
        id: Uuid::new_v4(),
        owner_id: owner,
        title: "Build a portfolio site".to_string(),
        description: "Responsive, three pages".to_string(),
        budget: 500.0,
        status,
        created_at: Utc::now(),
    }
}

#[test]
fn freelancer_may_bid_on_open_gig() {
    let owner = Uuid::new_v4();
    let gig = gig_with_status(owner, GigStatus::Open);

    assert!(guard::check_submit_bid(&gig, Uuid::new_v4(), false).is_ok());
}

#[test]
fn owner_cannot_bid_on_own_gig() {
    let owner = Uuid::new_v4();
    let gig = gig_with_status(owner, GigStatus::Open);

    let err = guard::check_submit_bid(&gig, owner, false).unwrap_err();
    assert!(matches!(err, ApiError::InvalidState(_)));
    assert_eq!(err.to_string(), "You cannot bid on your own gig");
}

#[test]
fn duplicate_bid_is_a_conflict() {
    let gig = gig_with_status(Uuid::new_v4(), GigStatus::Open);

    let err = guard::check_submit_bid(&gig, Uuid::new_v4(), true).unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
    assert_eq!(err.to_string(), "You have already bid on this gig");
}

#[test]
fn assigned_gig_rejects_new_bids() {
    let gig = gig_with_status(Uuid::new_v4(), GigStatus::Assigned);

    let err = guard::check_submit_bid(&gig, Uuid::new_v4(), false).unwrap_err();
    assert!(matches!(err, ApiError::InvalidState(_)));
    assert_eq!(err.to_string(), "Gig is no longer open for bidding");
}

#[test]
fn assigned_gig_wins_over_self_bid_in_report_order() {
    // The lifecycle check comes first, matching the submit endpoint's
    // documented error order.
    let owner = Uuid::new_v4();
    let gig = gig_with_status(owner, GigStatus::Assigned);

    let err = guard::check_submit_bid(&gig, owner, true).unwrap_err();
    assert_eq!(err.to_string(), "Gig is no longer open for bidding");
}

#[test]
fn only_owner_views_bids() {
    let owner = Uuid::new_v4();
    let gig = gig_with_status(owner, GigStatus::Open);

    assert!(guard::check_view_bids(&gig, owner).is_ok());

    let err = guard::check_view_bids(&gig, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.to_string(), "Only the gig owner can view bids");
}

#[test]
fn only_owner_hires() {
    let owner = Uuid::new_v4();
    let gig = gig_with_status(owner, GigStatus::Open);

    assert!(guard::check_hire(&gig, owner).is_ok());

    let err = guard::check_hire(&gig, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.to_string(), "Only the gig owner can hire freelancers");
}
