use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::jwt;

/// The resolved identity of an authenticated caller.
///
/// Produced once at the boundary by the extractor below and passed explicitly
/// into guard and engine calls — core code never touches the request object.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Actix extractor wrapping a validated [`CallerIdentity`].
pub struct AuthenticatedUser(pub CallerIdentity);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            // 2. Get the shared secret from app data.
            let secret = req.app_data::<web::Data<JwtSecret>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWT secret not configured")
            })?;

            // 3. Validate the JWT.
            let claims = jwt::validate_token(token, &secret.0)
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            Ok(AuthenticatedUser(CallerIdentity {
                id: user_id,
                name: claims.name,
                email: claims.email,
            }))
        })
    }
}

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);
