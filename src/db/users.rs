use sea_orm::*;
use uuid::Uuid;

use crate::models::users;

/// Fetch a single user by ID.
pub async fn get_user_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(conn).await
}
