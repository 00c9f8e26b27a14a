pub mod auth;
pub mod bids;
pub mod gigs;

use actix_web::web;

use crate::notify::session;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));

    // ── Gig routes (reads are public, posting requires a valid JWT) ──
    cfg.service(
        web::scope("/gigs")
            .route("", web::get().to(gigs::get_gigs))
            .route("", web::post().to(gigs::create_gig))
            .route("/{id}", web::get().to(gigs::get_gig)),
    );

    // ── Bid routes (all protected — require valid JWT) ──
    // `/user/my-bids` must be registered before `/{gig_id}` so it is not
    // swallowed by the path parameter.
    cfg.service(
        web::scope("/bids")
            .route("", web::post().to(bids::submit_bid))
            .route("/user/my-bids", web::get().to(bids::get_my_bids))
            .route("/{gig_id}", web::get().to(bids::get_bids_for_gig))
            .route("/{bid_id}/hire", web::patch().to(bids::hire_bid)),
    );

    // ── Notification channel (WebSocket, token via query param) ──
    cfg.service(web::resource("/ws/notifications").route(web::get().to(session::ws_connect)));
}
