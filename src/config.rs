use std::env;

/// Process configuration, resolved from the environment exactly once in
/// `main` and passed explicitly to constructors — nothing else in the crate
/// reads environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Self {
            database_url,
            jwt_secret,
            bind_addr: format!("0.0.0.0:{port}"),
        }
    }
}
