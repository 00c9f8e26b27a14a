use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::models::gigs::{CreateGig, GigListQuery, GigResponse};

/// GET /api/gigs — list open gigs, optionally filtered by title substring.
/// Public: browsing does not require authentication.
pub async fn get_gigs(
    db: web::Data<DatabaseConnection>,
    query: web::Query<GigListQuery>,
) -> impl Responder {
    match gig_db::list_open_gigs(db.get_ref(), query.search.as_deref()).await {
        Ok(gigs) => {
            let response: Vec<GigResponse> = gigs
                .into_iter()
                .map(|(gig, owner)| GigResponse::from_parts(gig, owner))
                .collect();
            HttpResponse::Ok().json(response)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": format!("Failed to fetch gigs: {e}"),
        })),
    }
}

/// GET /api/gigs/{id} — get a single gig with its owner resolved. Public.
pub async fn get_gig(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match gig_db::get_gig_with_owner(db.get_ref(), id).await {
        Ok(Some((gig, owner))) => HttpResponse::Ok().json(GigResponse::from_parts(gig, owner)),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Gig not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/gigs — post a new gig (requires authentication).
pub async fn create_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateGig>,
) -> impl Responder {
    let input = body.into_inner();

    if input.title.trim().is_empty() || input.description.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "All fields are required",
        }));
    }
    if input.budget < 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Budget must be a non-negative number",
        }));
    }

    match gig_db::insert_gig(db.get_ref(), input, user.0.id).await {
        Ok(gig) => HttpResponse::Created().json(gig),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": format!("Failed to create gig: {e}"),
        })),
    }
}
