//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: Statistics panel
//! - routes::transactions: Transaction list, filter, search, pagination
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use txboard_config::Config;
use txboard_core::error::{DefaultErrorLogger, ErrorContext, ErrorLogger};
use txboard_core::{CoreResult, SourceRef, TransactionList};

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub list: Arc<RwLock<TransactionList>>,
    pub source: SourceRef,
    pub config: Config,
}

impl AppState {
    pub fn new(list: TransactionList, source: SourceRef, config: Config) -> Self {
        Self {
            list: Arc::new(RwLock::new(list)),
            source,
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::{api_stats, page_dashboard};
    use routes::settings::{api_settings, page_settings};
    use routes::transactions::{
        api_transactions, htmx_transactions_filter, htmx_transactions_list, htmx_transactions_next,
        htmx_transactions_page, htmx_transactions_per_page, htmx_transactions_prev,
        htmx_transactions_search, page_transactions,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/stats", get(api_stats))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(page_dashboard))
        .route("/dashboard", get(page_dashboard))
        .route("/transactions", get(page_transactions))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/transactions/search", get(htmx_transactions_search))
        .route("/transactions/filter", get(htmx_transactions_filter))
        .route("/transactions/per-page", get(htmx_transactions_per_page))
        .route("/transactions/page/:page", get(htmx_transactions_page))
        .route("/transactions/next", get(htmx_transactions_next))
        .route("/transactions/prev", get(htmx_transactions_prev))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Unknown routes
async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - txboard</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
        #navbar.scrolled {{ box-shadow: 0 1px 8px rgba(0, 0, 0, 0.08); background-color: rgba(255, 255, 255, 0.95); }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
    <script>
    window.addEventListener('scroll', function() {{
        const navbar = document.getElementById('navbar');
        if (navbar) {{
            navbar.classList.toggle('scrolled', window.scrollY > 50);
        }}
    }});
    </script>
</body>
</html>"#,
        title, content
    )
}

/// Top navigation bar
pub fn nav_bar(current_path: &str) -> String {
    let links = [
        ("/", "Dashboard"),
        ("/transactions", "Transactions"),
        ("/settings", "Settings"),
    ];

    let mut nav = String::from("<nav id='navbar' class='sticky top-0 z-40 bg-white border-b transition-shadow'><div class='max-w-6xl mx-auto px-6 h-14 flex items-center gap-8'><a href='/' class='text-xl font-bold text-amber-500'>txboard</a><ul class='flex gap-2'>");

    for (path, label) in &links {
        let is_active = if *path == "/" {
            current_path == "/" || current_path == "/dashboard"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active { "bg-amber-50 text-amber-600" } else { "text-gray-600 hover:bg-gray-50" };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='px-3 py-2 rounded-lg {}'>{}</a></li>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</ul></div></nav>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!(r#"<main class='max-w-6xl mx-auto p-6'>{}</main>"#, inner_content)
    } else {
        base_html(title, &format!(r#"{}
<main class='max-w-6xl mx-auto p-6'>{}</main>"#,
            nav_bar(current_path), inner_content))
    }
}

// ==================== Record Refresh ====================

/// Fetch a fresh record set and swap it into the list
///
/// The fetch runs without holding the lock. On failure the list is
/// emptied, matching the start-up behaviour, and the error is returned.
pub async fn refresh_records(state: &AppState) -> CoreResult<usize> {
    let fetched = state.source.fetch().await;
    let mut list = state.list.write().await;
    match fetched {
        Ok(records) => {
            let count = records.len();
            list.replace_records(records);
            log::info!("Replaced record set with {} transactions from {} source", count, state.source.name());
            Ok(count)
        }
        Err(e) => {
            let context = ErrorContext::new("refresh_records".to_string())
                .with_source(state.source.name().to_string());
            DefaultErrorLogger.log_error(&e, &context);
            list.replace_records(Vec::new());
            Err(e)
        }
    }
}

/// Spawn the periodic refresh task if an interval is configured
pub fn spawn_refresh(state: AppState) -> Option<tokio::task::JoinHandle<()>> {
    let period = state.config.refresh_interval()?;
    log::info!("Refreshing records every {}s", period.as_secs());

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; records were loaded at start-up.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let _ = refresh_records(&state).await;
        }
    }))
}

/// Reload records API endpoint
async fn api_reload(state: axum::extract::State<AppState>) -> axum::Json<serde_json::Value> {
    let body = match refresh_records(&state).await {
        Ok(count) => serde_json::json!({
            "success": true,
            "message": "Records reloaded",
            "total_records": count,
        }),
        Err(e) => serde_json::json!({
            "success": false,
            "message": e.to_string(),
            "total_records": 0,
        }),
    };
    axum::Json(body)
}

/// Wait for Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

/// Start the HTTP server
///
/// Binds the configured address, starts the optional refresh task and
/// serves until Ctrl-C.
pub async fn start_server(config: Config, list: TransactionList, source: SourceRef) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(list, source, config);

    let refresh = spawn_refresh(state.clone());
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txboard server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /transactions (Transaction list)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(handle) = refresh {
        handle.abort();
    }

    match &result {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
    result
}
