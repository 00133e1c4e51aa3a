use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::config::Config;
use crate::handlers;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let account_routes = Router::new()
        .route("/me", get(handlers::auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let mut diary_routes = Router::new()
        // Entries
        .route("/get_entries", get(handlers::entries::get_entries))
        .route("/add_entry", post(handlers::entries::add_entry))
        .route("/clear_entries", post(handlers::entries::clear_entries))
        // Sentiment
        .route("/get_sentiment", get(handlers::sentiment::get_sentiment))
        .route(
            "/get_current_entry_sentiment",
            post(handlers::sentiment::get_current_entry_sentiment),
        )
        .route(
            "/get_daily_sentiment",
            get(handlers::sentiment::get_daily_sentiment),
        )
        .route(
            "/get_weekly_sentiment",
            get(handlers::sentiment::get_weekly_sentiment),
        )
        .route(
            "/get_monthly_sentiment",
            get(handlers::sentiment::get_monthly_sentiment),
        )
        .route(
            "/get_sentiment_counts",
            get(handlers::sentiment::get_sentiment_counts),
        )
        // Analysis
        .route(
            "/get_comprehensive_analysis",
            post(handlers::analysis::get_comprehensive_analysis),
        );

    if state.config.require_auth {
        diary_routes = diary_routes.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));
    }

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(public_routes)
        .merge(account_routes)
        .merge(diary_routes)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
