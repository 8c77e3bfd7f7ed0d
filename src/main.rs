use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod error;
mod handlers;
mod media;
mod middleware;
mod models;
mod store;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting SpaceWiki API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; tokens will be signed with an empty secret");
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("SPACEWIKI_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 SpaceWiki API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let config = crate::config::config();

    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(post_routes())
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http());

    if config.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use handlers::auth;

    // get-me requires a resolved principal; signup/login mint one
    Router::new()
        .route("/auth/get-me", get(auth::get_me))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
}

fn post_routes() -> Router {
    use axum::routing::{delete, post, put};
    use handlers::post;

    let protected = Router::new()
        .route("/post/create", post(post::create))
        .route("/post/create-with-file", post(post::create_with_file))
        .route("/post/myposts", get(post::myposts))
        .route("/post/edit", put(post::edit))
        .route("/post/posts/:id", delete(post::delete))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    let public = Router::new()
        .route("/post/get", get(post::get))
        .route("/post/get-all", get(post::get_all))
        .route("/post/get-by-title", get(post::get_by_title))
        .route("/post/get-by-author", get(post::get_by_author))
        .route("/post/files/*path", get(post::files));

    protected.merge(public)
}

async fn root() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "message": "Such empty. More content coming soon."
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::store::StoreManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
