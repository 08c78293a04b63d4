//! HTTP server: the search proxy endpoint and the server-rendered page.
//!
//! Routes:
//! - `POST /api/search` → JSON search proxy
//! - `GET /` → landing screen
//! - `POST /` → apply a form-posted page event and render the result
//! - `GET /health` → liveness

use axum::Form;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::backend::ProxyBackend;
use crate::config::{ServerConfig, UiConfig};
use crate::error::AppError;
use crate::page::{Page, form_value};
use crate::proxy::SearchProxy;

#[derive(Clone)]
struct AppState {
    proxy: SearchProxy,
    backend: ProxyBackend,
    ui: UiConfig,
}

/// Build the router without binding.
pub fn router(proxy: SearchProxy, ui: UiConfig) -> Router {
    let state = AppState {
        backend: ProxyBackend::new(proxy.clone()),
        proxy,
        ui,
    };

    Router::new()
        .route("/", get(landing).post(page_event))
        .route("/api/search", post(api_search))
        .route("/health", get(health))
        .with_state(state)
}

/// Scholarship finder server running in a background task.
pub struct SearchServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl SearchServer {
    /// Bind `{config.host}:{config.port}` (port `0` picks a free port) and
    /// start serving.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Server`] if the listener cannot bind.
    pub async fn start(
        config: &ServerConfig,
        proxy: SearchProxy,
        ui: UiConfig,
    ) -> crate::error::Result<Self> {
        let app = router(proxy, ui);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Server(format!("bind {bind_addr} failed: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| AppError::Server(format!("failed to get local addr: {e}")))?;

        tracing::info!("scholarship finder listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Base URL, e.g. `http://127.0.0.1:3000`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SearchServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn api_search(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    state.proxy.handle(&body).await
}

async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(Page::new(state.ui).render())
}

async fn page_event(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let mut page = Page::restore(state.ui, &pairs);
    let event = form_value(&pairs, "event").unwrap_or_default();
    page.handle_event(event, &state.backend).await;
    Html(page.render())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
