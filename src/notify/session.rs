use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::jwt;
use crate::auth::middleware::JwtSecret;
use crate::notify::ServerEvent;
use crate::notify::hub::NotificationHub;

/// Query params for the WebSocket handshake endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// GET /api/ws/notifications?token=<jwt>
///
/// Upgrades the HTTP connection to a WebSocket and registers the caller as a
/// notification listener. Authenticates via query param token (browsers
/// can't send Authorization headers during the WebSocket handshake).
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
    secret: web::Data<JwtSecret>,
    hub: web::Data<NotificationHub>,
) -> Result<HttpResponse, actix_web::Error> {
    // 1. Validate the JWT.
    let claims = jwt::validate_token(&query.token, &secret.0)
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    // 2. Upgrade to WebSocket.
    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    // 3. Join the hub and get a receiver for outgoing events.
    let rx = hub.join(user_id).await;

    // 4. Spawn the session task.
    let hub_clone = hub.get_ref().clone();
    actix_web::rt::spawn(handle_ws_session(
        session, msg_stream, rx, user_id, hub_clone,
    ));

    Ok(response)
}

/// Drives one listener connection: forwards events from the hub, answers
/// pings, and cleans up on disconnect. Listeners are receive-only — any text
/// or binary frames from the client are ignored.
async fn handle_ws_session(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
    user_id: Uuid,
    hub: NotificationHub,
) {
    loop {
        tokio::select! {
            // Incoming frame from the WebSocket client.
            Some(msg) = msg_stream.next() => {
                match msg {
                    Ok(Message::Ping(bytes)) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        break;
                    }
                    Err(_) => {
                        break;
                    }
                    _ => {}
                }
            }
            // Outgoing event from the hub to this client.
            Some(event) = rx.recv() => {
                let json = match serde_json::to_string(&event) {
                    Ok(j) => j,
                    Err(_) => continue,
                };
                if session.text(json).await.is_err() {
                    break;
                }
            }
            // Both channels closed — exit.
            else => break,
        }
    }

    hub.leave(user_id).await;
    let _ = session.close(None).await;
}
