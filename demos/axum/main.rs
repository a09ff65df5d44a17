mod context;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use context::middleware::request_context_middleware;

#[tokio::main]
async fn main() {
    let app_state = context::build_state(5001);

    let app = Router::new()
        .route("/whoami", get(routes::whoami))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            request_context_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(
        tokio::net::TcpListener::bind(addr).await.unwrap(),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
