use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bid lifecycle, stored as a lowercase string in the database.
///
/// `pending` is the only state a bid can leave. The hire engine moves exactly
/// one bid per gig to `hired` and every other pending bid to `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "hired")]
    Hired,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// SeaORM entity for the `bids` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bids")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gig_id: Uuid,
    pub freelancer_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gigs::Entity",
        from = "Column::GigId",
        to = "super::gigs::Column::Id"
    )]
    Gig,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::FreelancerId",
        to = "super::users::Column::Id"
    )]
    Freelancer,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gig.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Freelancer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/bids.
/// The freelancer identity comes from the JWT, never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBidRequest {
    pub gig_id: Uuid,
    pub message: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct CreateBid {
    pub gig_id: Uuid,
    pub freelancer_id: Uuid,
    pub message: String,
    pub price: f64,
}

/// A bid with its freelancer's display fields resolved, as returned to the
/// gig owner.
#[derive(Debug, Clone, Serialize)]
pub struct BidResponse {
    pub id: Uuid,
    pub gig_id: Uuid,
    pub freelancer: Option<super::users::UserSummary>,
    pub message: String,
    pub price: f64,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}

impl BidResponse {
    pub fn from_parts(bid: Model, freelancer: Option<super::users::Model>) -> Self {
        Self {
            id: bid.id,
            gig_id: bid.gig_id,
            freelancer: freelancer.map(Into::into),
            message: bid.message,
            price: bid.price,
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}

/// A bid with its gig's summary embedded, as returned to the freelancer.
#[derive(Debug, Clone, Serialize)]
pub struct MyBidResponse {
    pub id: Uuid,
    pub gig: Option<super::gigs::GigSummary>,
    pub message: String,
    pub price: f64,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}

impl MyBidResponse {
    pub fn from_parts(bid: Model, gig: Option<super::gigs::Model>) -> Self {
        Self {
            id: bid.id,
            gig: gig.map(Into::into),
            message: bid.message,
            price: bid.price,
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}

/// The hired bid as returned by PATCH /api/bids/{id}/hire, with the gig title
/// and freelancer display fields resolved.
#[derive(Debug, Clone, Serialize)]
pub struct HiredBid {
    pub id: Uuid,
    pub gig_id: Uuid,
    pub gig_title: String,
    pub freelancer: Option<super::users::UserSummary>,
    pub message: String,
    pub price: f64,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}
