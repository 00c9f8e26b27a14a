use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;

/// Error taxonomy shared by the access guard, the hire engine and the
/// handlers.
///
/// Every variant carries the short human-readable message returned to the
/// client as `{ "message": "<text>" }`. All expected conditions are detected
/// before any mutation; only `Database` maps to a 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Referenced gig or bid does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Caller lacks the required relationship to the resource.
    #[error("{0}")]
    Forbidden(String),
    /// Entity is not in the required lifecycle stage (gig not open, bid not
    /// pending, self-bid).
    #[error("{0}")]
    InvalidState(String),
    /// Duplicate bid on the same gig by the same freelancer.
    #[error("{0}")]
    Conflict(String),
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),
    /// Anything unexpected from the store; the underlying message is passed
    /// through.
    #[error("{0}")]
    Database(#[from] DbErr),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            // The public API reports duplicate bids as plain 400s, same as
            // every other lifecycle violation.
            ApiError::InvalidState(_) | ApiError::Conflict(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string(),
        }))
    }
}
