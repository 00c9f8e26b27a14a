use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use gigbid_backend::auth::middleware::JwtSecret;
use gigbid_backend::config::AppConfig;
use gigbid_backend::create_pool;
use gigbid_backend::handlers;
use gigbid_backend::hire::HireEngine;
use gigbid_backend::notify::NotificationHub;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env();

    let db = create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // The shared notification hub doubles as the engine's event sink.
    let hub = NotificationHub::new();
    let engine = HireEngine::connect(db.clone(), Arc::new(hub.clone())).await;
    tracing::info!(mode = ?engine.mode(), "hire engine ready");

    let db_data = web::Data::new(db);
    let secret_data = web::Data::new(JwtSecret(config.jwt_secret.clone()));
    let hub_data = web::Data::new(hub);
    let engine_data = web::Data::new(engine);

    tracing::info!("Server running at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(secret_data.clone())
            .app_data(hub_data.clone())
            .app_data(engine_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
