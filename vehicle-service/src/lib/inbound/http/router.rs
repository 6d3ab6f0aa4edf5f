use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth_info::auth_info;
use super::handlers::create_vehicle::create_vehicle;
use super::handlers::delete_vehicle::delete_vehicle;
use super::handlers::get_vehicle::get_vehicle;
use super::handlers::health::health;
use super::handlers::health::root;
use super::handlers::list_vehicles::list_vehicles;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::handlers::update_vehicle::update_vehicle;
use super::middleware::authenticate as auth_middleware;
use crate::domain::health::StoreHealth;
use crate::domain::user::ports::UserServicePort;
use crate::domain::vehicle::ports::VehicleServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub vehicle_service: Arc<dyn VehicleServicePort>,
    pub store_health: Arc<dyn StoreHealth>,
    pub authenticator: Arc<Authenticator>,
    pub api_prefix: String,
}

/// Build the HTTP application.
///
/// API routes live under `state.api_prefix`; `/` and `/health` stay at the
/// root. Vehicle mutations go through the bearer-token guard, reads do not.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let vehicle_collection: MethodRouter<AppState> =
        post(create_vehicle).route_layer(guard.clone()).get(list_vehicles);
    let vehicle_item: MethodRouter<AppState> = put(update_vehicle)
        .delete(delete_vehicle)
        .route_layer(guard)
        .get(get_vehicle);

    let api_routes = Router::new()
        .route("/auth", get(auth_info))
        .route("/auth/", get(auth_info))
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login))
        .route("/vehicles", vehicle_collection.clone())
        .route("/vehicles/", vehicle_collection)
        .route("/vehicles/:vehicle_id", vehicle_item);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let system_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let prefix = state.api_prefix.trim_end_matches('/');
    let application = if prefix.is_empty() {
        system_routes.merge(api_routes)
    } else {
        system_routes.nest(prefix, api_routes)
    };

    application
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS policy from the configured allow-list; `"*"` admits any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
