use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::bids as bid_db;
use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::hire::HireEngine;
use crate::hire::guard;
use crate::models::bids::{BidResponse, CreateBid, MyBidResponse, SubmitBidRequest};

/// POST /api/bids — a freelancer submits a bid on an open gig.
///
/// The freelancer identity comes from the JWT. The gig must exist and be
/// open, self-bids are refused, and only one bid per freelancer per gig is
/// allowed.
pub async fn submit_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SubmitBidRequest>,
) -> Result<HttpResponse, ApiError> {
    let caller = user.0;
    let input = body.into_inner();

    if input.message.trim().is_empty() {
        return Err(ApiError::Validation("All fields are required".to_string()));
    }
    if input.price < 0.0 {
        return Err(ApiError::Validation(
            "Price must be a non-negative number".to_string(),
        ));
    }

    let gig = gig_db::get_gig_by_id(db.get_ref(), input.gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    let already_bid =
        bid_db::bid_exists_for_gig_and_freelancer(db.get_ref(), gig.id, caller.id).await?;

    guard::check_submit_bid(&gig, caller.id, already_bid)?;

    let bid = match bid_db::insert_bid(
        db.get_ref(),
        CreateBid {
            gig_id: gig.id,
            freelancer_id: caller.id,
            message: input.message,
            price: input.price,
        },
    )
    .await
    {
        Ok(bid) => bid,
        // Two submissions racing past the pre-insert check: the unique index
        // on (gig_id, freelancer_id) catches the loser.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(ApiError::Conflict(
                "You have already bid on this gig".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let freelancer = user_db::get_user_by_id(db.get_ref(), caller.id).await?;

    Ok(HttpResponse::Created().json(BidResponse::from_parts(bid, freelancer)))
}

/// GET /api/bids/{gig_id} — all bids on a gig, owner only.
pub async fn get_bids_for_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();

    let gig = gig_db::get_gig_by_id(db.get_ref(), gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    guard::check_view_bids(&gig, user.0.id)?;

    let bids = bid_db::get_bids_for_gig(db.get_ref(), gig_id).await?;
    let response: Vec<BidResponse> = bids
        .into_iter()
        .map(|(bid, freelancer)| BidResponse::from_parts(bid, freelancer))
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/bids/user/my-bids — the caller's bids with gig summaries.
pub async fn get_my_bids(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let bids = bid_db::get_bids_for_freelancer(db.get_ref(), user.0.id).await?;
    let response: Vec<MyBidResponse> = bids
        .into_iter()
        .map(|(bid, gig)| MyBidResponse::from_parts(bid, gig))
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// PATCH /api/bids/{bid_id}/hire — the gig owner hires this bidder.
///
/// All precondition checks and the three-way state change live in the hire
/// engine; this handler only supplies the resolved caller identity.
pub async fn hire_bid(
    user: AuthenticatedUser,
    engine: web::Data<HireEngine>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let bid = engine.hire(user.0.id, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Freelancer hired successfully",
        "bid": bid,
    })))
}
