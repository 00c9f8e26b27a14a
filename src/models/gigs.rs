use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gig bidding lifecycle, stored as a lowercase string in the database.
///
/// A gig starts `open` and is moved to `assigned` exactly once, by the hire
/// engine. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum GigStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "assigned")]
    Assigned,
}

/// SeaORM entity for the `gigs` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub budget: f64,
    pub status: GigStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGig {
    pub title: String,
    pub description: String,
    pub budget: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GigListQuery {
    pub search: Option<String>,
}

/// A gig with its owner's display fields resolved.
#[derive(Debug, Clone, Serialize)]
pub struct GigResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: GigStatus,
    pub owner: Option<super::users::UserSummary>,
    pub created_at: DateTimeUtc,
}

impl GigResponse {
    pub fn from_parts(gig: Model, owner: Option<super::users::Model>) -> Self {
        Self {
            id: gig.id,
            title: gig.title,
            description: gig.description,
            budget: gig.budget,
            status: gig.status,
            owner: owner.map(Into::into),
            created_at: gig.created_at,
        }
    }
}

/// Gig fields embedded in a freelancer's bid listing.
#[derive(Debug, Clone, Serialize)]
pub struct GigSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: GigStatus,
    pub owner_id: Uuid,
}

impl From<Model> for GigSummary {
    fn from(g: Model) -> Self {
        Self {
            id: g.id,
            title: g.title,
            description: g.description,
            budget: g.budget,
            status: g.status,
            owner_id: g.owner_id,
        }
    }
}
