use axum::http::HeaderValue;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use quantogasto_api::middleware::jwt_auth_middleware;
use quantogasto_api::{config, database};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and SECRETKEY
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting quantogasto API in {:?} mode", config.environment);

    // An empty signing key disables the entire authentication boundary
    if config.security.jwt_secret.is_empty() {
        tracing::error!("SECRETKEY is not set or empty; refusing to start");
        std::process::exit(1);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("quantogasto API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Everything else sits behind the authentication gate
        .merge(protected_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router {
    use axum::routing::post;
    use quantogasto_api::handlers::public::auth;

    Router::new().route("/auth/register", post(auth::register_post))
}

fn protected_routes() -> Router {
    use axum::routing::{patch, post, put};
    use quantogasto_api::handlers::protected::{
        auth, expenses_fixed, expenses_variable, income, summary, users,
    };

    Router::new()
        .route("/auth/whoami", get(auth::whoami))
        .route("/income", post(income::income_post))
        .route("/expenses/fixed", post(expenses_fixed::fixed_post))
        .route(
            "/expenses/fixed/:id",
            put(expenses_fixed::fixed_put).delete(expenses_fixed::fixed_delete),
        )
        .route("/expenses/variable", post(expenses_variable::variable_post))
        .route(
            "/expenses/variable/:id",
            put(expenses_variable::variable_put).delete(expenses_variable::variable_delete),
        )
        .route("/summary", get(summary::summary_get))
        .route("/users/:id", get(users::user_get))
        .route("/users", patch(users::user_patch))
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "quantogasto API",
            "version": version,
            "description": "Personal finance tracking backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "register": "/auth/register (public - token acquisition)",
                "whoami": "/auth/whoami (protected)",
                "income": "/income (protected)",
                "expenses": "/expenses/fixed[/:id], /expenses/variable[/:id] (protected)",
                "summary": "/summary (protected)",
                "users": "/users, /users/:id (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check().await {
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
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                axum::response::Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
