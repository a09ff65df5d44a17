use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_request_rs::{RequestContext, RequestError, RequestSnapshot, constants::server};

use super::AppState;

pub async fn request_context_middleware(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let snapshot = snapshot_from_request(&request, peer, state.server_port);
    let ctx = RequestContext::new(snapshot, state.trusted_hosts.as_ref());

    if let Err(err) = ctx.validate() {
        return error_response(err);
    }

    request.extensions_mut().insert(Arc::new(ctx));
    next.run(request).await
}

fn snapshot_from_request(request: &Request, peer: SocketAddr, server_port: u16) -> RequestSnapshot {
    let headers = request
        .headers()
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())));

    let request_uri = request
        .uri()
        .path_and_query()
        .map(|value| value.as_str())
        .unwrap_or("/");

    let request_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default();

    let mut snapshot = RequestSnapshot::from_headers(headers)
        .with_server(server::REQUEST_METHOD, request.method().as_str())
        .with_server(server::REQUEST_URI, request_uri)
        .with_server(server::REMOTE_ADDR, peer.ip().to_string())
        .with_server(server::SERVER_PORT, server_port.to_string())
        .with_server(server::REQUEST_TIME_FLOAT, request_time.to_string());

    if let Ok(environment) = env::var(server::ENVIRONMENT) {
        snapshot.insert_server(server::ENVIRONMENT, environment);
    }

    snapshot
}

fn error_response(err: RequestError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, format!("Rejected request: {err}")).into_response()
}
