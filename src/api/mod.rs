//! Folio HTTP Host
//!
//! Serves the front-end and a read-only JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Projects
//! - `GET /api/v1/projects` - List all projects
//! - `GET /api/v1/projects/:id` - Get a project
//!
//! ## Routes
//! - `GET /api/v1/routes` - Route table
//! - `GET /api/v1/resolve?path=...` - Resolve a path to its view
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Pages
//! - Static files from the front-end build
//! - Any other `GET` - application shell, 404 when the path renders the
//!   not-found view
//!
//! # Example
//!
//! ```rust,ignore
//! use folio::api::{serve, AppState};
//! use folio::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod shell;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use shell::{AppShell, ShellSource};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Uri},
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog routes
        .route("/projects", get(routes::projects::list_projects))
        .route("/projects/:id", get(routes::projects::get_project))
        // Route table introspection
        .route("/routes", get(routes::site::list_routes))
        .route("/resolve", get(routes::site::resolve_path))
        .fallback(api_not_found);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let static_dir = state.config.static_dir.clone();
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    // Files from the front-end build take priority; anything else is a page.
    let router = if static_dir.is_dir() {
        let pages: MethodRouter =
            get(routes::pages::serve_page).with_state(Arc::clone(&shared_state));
        router.fallback_service(
            ServeDir::new(&static_dir)
                .append_index_html_on_directories(false)
                .fallback(pages),
        )
    } else {
        router.fallback(routes::pages::serve_page)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Folio listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Folio shut down gracefully");
    Ok(())
}

/// Unknown paths under the API prefix get a JSON 404, never the shell
async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::router::RouteTable;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let config = ServerConfig {
            static_dir: "/nonexistent/folio-dist".into(),
            ..ServerConfig::default()
        };
        let state = AppState::with_parts(
            Catalog::global(),
            RouteTable::global(),
            AppShell::embedded(),
            config,
        );
        build_router(state)
    }

    fn create_test_app_with_build() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>folio shell</html>").unwrap();
        std::fs::write(dir.path().join("folio-ui.js"), "console.log('boot')").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (build_router(AppState::new(config)), dir)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = send(app, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = send(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = send(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, json) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["projects"], 2);
        assert_eq!(json["routes"], 6);
        assert_eq!(json["shell"], "embedded");
    }

    #[tokio::test]
    async fn test_list_projects() {
        let (status, json) = get_json(create_test_app(), "/api/v1/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["projects"][0]["title"], "Fuel Delivery Platform");
        assert_eq!(json["projects"][1]["tech"][2], "Tailwind");
    }

    #[tokio::test]
    async fn test_get_project() {
        let (status, json) = get_json(create_test_app(), "/api/v1/projects/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Mental Health Journal App");
        assert_eq!(
            json["github"],
            "https://github.com/yourusername/journal-app"
        );
    }

    #[tokio::test]
    async fn test_get_project_not_found() {
        let (status, json) = get_json(create_test_app(), "/api/v1/projects/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_get_project_invalid_id() {
        let (status, json) = get_json(create_test_app(), "/api/v1/projects/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (status, json) = get_json(create_test_app(), "/api/v1/routes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["routes"].as_array().unwrap().len(), 6);
        assert_eq!(json["routes"][4]["pattern"], "/projects/:id");
        assert_eq!(json["routes"][4]["view"], "project_details");
        assert_eq!(json["routes"][4]["params"][0], "id");
        assert_eq!(json["fallback"], "not_found");
    }

    #[tokio::test]
    async fn test_resolve() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/resolve?path=/projects/0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["view"], "project_details");
        assert_eq!(json["params"]["id"], "0");
        assert_eq!(json["project"]["title"], "Fuel Delivery Platform");
        assert_eq!(json["found"], true);

        let (_, json) = get_json(create_test_app(), "/api/v1/resolve?path=/nope").await;
        assert_eq!(json["view"], "not_found");
        assert_eq!(json["found"], false);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let (status, json) = get_json(create_test_app(), "/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_declared_pages_serve_shell() {
        for path in [
            "/",
            "/about",
            "/skills",
            "/projects",
            "/projects/0",
            "/contact",
            "/About",
            "/Projects/1",
        ] {
            let (status, body) = send(create_test_app(), path).await;
            assert_eq!(status, StatusCode::OK, "path {}", path);
            assert!(body.contains("<html"), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_not_found_pages() {
        for path in [
            "/nope",
            "/projects/999",
            "/projects/abc",
            "/projects/0/extra",
            "/projects/01",
            "/projects/%201",
        ] {
            let (status, body) = send(create_test_app(), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {}", path);
            assert!(body.contains("<html"), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_page_post_not_allowed() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/about")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_static_build_is_served() {
        let (app, _dir) = create_test_app_with_build();
        let (status, body) = send(app, "/folio-ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('boot')");

        let (app, _dir2) = create_test_app_with_build();
        let (status, body) = send(app, "/projects/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>folio shell</html>");

        let (app, _dir3) = create_test_app_with_build();
        let (status, body) = send(app, "/missing-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "<html>folio shell</html>");
    }
}
