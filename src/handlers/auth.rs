use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::UserSummary;

/// GET /api/auth/me — the caller's profile row.
///
/// 404 if the registration service has not provisioned the row yet.
pub async fn me(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let profile = user_db::get_user_by_id(db.get_ref(), user.0.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserSummary::from(profile)))
}
