use sea_orm::*;
use uuid::Uuid;

use crate::models::bids::{self, BidStatus, CreateBid};
use crate::models::{gigs, users};

/// Insert a new bid (defaults to Pending status).
///
/// The unique index on (gig_id, freelancer_id) backs up the handler's
/// duplicate check; a violation surfaces as `DbErr` with a unique-constraint
/// `SqlErr`.
pub async fn insert_bid<C: ConnectionTrait>(
    conn: &C,
    input: CreateBid,
) -> Result<bids::Model, DbErr> {
    let new_bid = bids::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(input.gig_id),
        freelancer_id: Set(input.freelancer_id),
        message: Set(input.message),
        price: Set(input.price),
        status: Set(BidStatus::Pending),
        created_at: Set(chrono::Utc::now()),
    };

    new_bid.insert(conn).await
}

/// Fetch a single bid by ID.
pub async fn get_bid_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<bids::Model>, DbErr> {
    bids::Entity::find_by_id(id).one(conn).await
}

/// Whether this freelancer already has a bid on this gig.
pub async fn bid_exists_for_gig_and_freelancer<C: ConnectionTrait>(
    conn: &C,
    gig_id: Uuid,
    freelancer_id: Uuid,
) -> Result<bool, DbErr> {
    let existing = bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .filter(bids::Column::FreelancerId.eq(freelancer_id))
        .one(conn)
        .await?;

    Ok(existing.is_some())
}

/// All bids on a gig, newest first, with freelancers resolved.
pub async fn get_bids_for_gig<C: ConnectionTrait>(
    conn: &C,
    gig_id: Uuid,
) -> Result<Vec<(bids::Model, Option<users::Model>)>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .find_also_related(users::Entity)
        .order_by_desc(bids::Column::CreatedAt)
        .all(conn)
        .await
}

/// All bids a freelancer has submitted, newest first, with gigs resolved.
pub async fn get_bids_for_freelancer<C: ConnectionTrait>(
    conn: &C,
    freelancer_id: Uuid,
) -> Result<Vec<(bids::Model, Option<gigs::Model>)>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::FreelancerId.eq(freelancer_id))
        .find_also_related(gigs::Entity)
        .order_by_desc(bids::Column::CreatedAt)
        .all(conn)
        .await
}

/// Conditionally move a bid from Pending to Hired.
///
/// Zero rows affected means the bid was not pending any more (or does not
/// exist) — a concurrent hire got there first.
pub async fn mark_bid_hired_if_pending<C: ConnectionTrait>(
    conn: &C,
    bid_id: Uuid,
) -> Result<u64, DbErr> {
    let result = bids::Entity::update_many()
        .set(bids::ActiveModel {
            status: Set(BidStatus::Hired),
            ..Default::default()
        })
        .filter(bids::Column::Id.eq(bid_id))
        .filter(bids::Column::Status.eq(BidStatus::Pending))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Reject every other pending bid on a gig once one of them has been hired.
pub async fn reject_other_pending_bids<C: ConnectionTrait>(
    conn: &C,
    gig_id: Uuid,
    hired_bid_id: Uuid,
) -> Result<u64, DbErr> {
    let result = bids::Entity::update_many()
        .set(bids::ActiveModel {
            status: Set(BidStatus::Rejected),
            ..Default::default()
        })
        .filter(bids::Column::GigId.eq(gig_id))
        .filter(bids::Column::Id.ne(hired_bid_id))
        .filter(bids::Column::Status.eq(BidStatus::Pending))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
