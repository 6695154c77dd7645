//! Shared utilities for integration testing.

use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use kpi_gateway::config::GatewayConfig;
use kpi_gateway::http::HttpServer;

/// In-process stand-in for the remote scripting backend.
///
/// Records every payload it receives and answers per `action`, so tests can
/// assert both what was forwarded and what was relayed back.
#[derive(Clone)]
pub struct MockBackend {
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct MockState {
    master_reply: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    /// Spawn the mock on an ephemeral port with the given master indicator
    /// list, served under `getIndikatorData`.
    pub async fn spawn(master: Value) -> Self {
        Self::spawn_with_master_reply(json!({ "result": "success", "message": master })).await
    }

    /// Spawn with a verbatim reply for `getIndikatorData`, e.g. an error
    /// envelope.
    pub async fn spawn_with_master_reply(master_reply: Value) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            master_reply,
            received: received.clone(),
        };

        let app = Router::new().route("/", post(handle)).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/", addr),
            received,
        }
    }

    /// Every payload received so far, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    /// Just the `action` tags, in arrival order.
    pub fn actions(&self) -> Vec<String> {
        self.received()
            .iter()
            .filter_map(|payload| payload["action"].as_str().map(str::to_string))
            .collect()
    }
}

async fn handle(State(state): State<MockState>, Json(payload): Json<Value>) -> Json<Value> {
    state.received.lock().unwrap().push(payload.clone());

    let reply = match payload["action"].as_str() {
        Some("getIndikatorData") => state.master_reply.clone(),
        Some(action) => json!({ "result": "success", "message": format!("{} ok", action) }),
        None => json!({ "result": "error", "message": "missing action" }),
    };
    Json(reply)
}

/// Boot the gateway on an ephemeral port, pointed at the given backend URL.
/// Returns the gateway's base URL.
pub async fn start_gateway(backend_url: &str) -> String {
    let mut config = GatewayConfig::default();
    config.backend.url = backend_url.to_string();
    start_gateway_with(config).await
}

/// Boot the gateway with a fully custom configuration.
pub async fn start_gateway_with(config: GatewayConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A local URL that nothing is listening on.
pub async fn dead_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
