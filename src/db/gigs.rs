use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{self, CreateGig, GigStatus};
use crate::models::users;

/// Insert a new gig (defaults to Open status).
pub async fn insert_gig<C: ConnectionTrait>(
    conn: &C,
    input: CreateGig,
    owner_id: Uuid,
) -> Result<gigs::Model, DbErr> {
    let new_gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_id: Set(owner_id),
        title: Set(input.title),
        description: Set(input.description),
        budget: Set(input.budget),
        status: Set(GigStatus::Open),
        created_at: Set(chrono::Utc::now()),
    };

    new_gig.insert(conn).await
}

/// Fetch a single gig by ID.
pub async fn get_gig_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(conn).await
}

/// Fetch a single gig with its owner's display fields.
pub async fn get_gig_with_owner<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<(gigs::Model, Option<users::Model>)>, DbErr> {
    gigs::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(conn)
        .await
}

/// List open gigs, newest first, with owners resolved.
///
/// `search` filters on a case-insensitive title substring.
pub async fn list_open_gigs<C: ConnectionTrait>(
    conn: &C,
    search: Option<&str>,
) -> Result<Vec<(gigs::Model, Option<users::Model>)>, DbErr> {
    let mut query = gigs::Entity::find().filter(gigs::Column::Status.eq(GigStatus::Open));

    if let Some(term) = search {
        query = query.filter(
            Expr::col((gigs::Entity, gigs::Column::Title)).ilike(format!("%{term}%")),
        );
    }

    query
        .find_also_related(users::Entity)
        .order_by_desc(gigs::Column::CreatedAt)
        .all(conn)
        .await
}

/// Conditionally move a gig from Open to Assigned.
///
/// The status check lives in the WHERE clause so the transition re-validates
/// the precondition at mutation time. Returns the number of rows touched:
/// zero means the gig was not open any more (or does not exist) and the
/// caller must treat the transition as failed.
pub async fn assign_gig_if_open<C: ConnectionTrait>(conn: &C, gig_id: Uuid) -> Result<u64, DbErr> {
    let result = gigs::Entity::update_many()
        .set(gigs::ActiveModel {
            status: Set(GigStatus::Assigned),
            ..Default::default()
        })
        .filter(gigs::Column::Id.eq(gig_id))
        .filter(gigs::Column::Status.eq(GigStatus::Open))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
