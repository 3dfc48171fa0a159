use std::net::{IpAddr, SocketAddr};

use anadash::{
    AppState,
    auth::CredentialStore,
    config::Config,
    middleware::{log_errors, session_middleware},
    routes,
    session::SessionStore,
};
use axum::{
    Router,
    routing::{get, post},
};
#[cfg(debug_assertions)]
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The two password hashes are hard startup requirements.
    let config = Config::from_env().expect("Failed to load configuration");

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    let state = AppState {
        credentials: CredentialStore::from_config(&config),
        sessions: SessionStore::new(),
        config: config.clone(),
    };

    // Split the routes into the login surface and the session-guarded app.
    let public_routes = Router::new()
        .route("/login", get(routes::auth::login_page).post(routes::auth::login))
        .route("/logout", post(routes::auth::logout));

    let protected_routes = Router::new()
        .route("/", get(routes::dashboard::shell))
        .route("/views/sales", get(routes::sales::sales_view))
        .route("/views/sales/upload", post(routes::sales::upload_sales))
        .route("/views/sales/analyze", post(routes::sales::analyze_uploaded))
        .route("/views/sales/export", get(routes::sales::export_sales))
        .route("/views/customer", get(routes::customer::customer_view))
        .route("/views/inventory", get(routes::inventory::inventory_view))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum::middleware::from_fn(log_errors));

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    let app = router.with_state(state.clone());

    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Dashboard listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
