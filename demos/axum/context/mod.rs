use std::sync::Arc;

use bunner_request_rs::TrustedHosts;

#[derive(Clone)]
pub struct AppState {
    pub trusted_hosts: Arc<TrustedHosts>,
    pub server_port: u16,
}

pub fn build_state(server_port: u16) -> AppState {
    AppState {
        trusted_hosts: Arc::new(TrustedHosts::list(["127.0.0.1", "::1"])),
        server_port,
    }
}

pub mod middleware;
