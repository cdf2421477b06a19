//! API router with Swagger UI

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post, put};
use axum::{middleware, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::middleware::{auth_middleware, AuthState};
use super::modules::{collections, locations, maps, pinpoints, pins, users};
use crate::application::{
    CollectionService, LocationService, MapService, PinService, PinpointService, UserService,
};

/// Unified state for all routes.
#[derive(Clone)]
pub struct ApiState {
    pub locations: Arc<LocationService>,
    pub pins: Arc<PinService>,
    pub maps: Arc<MapService>,
    pub collections: Arc<CollectionService>,
    pub pinpoints: Arc<PinpointService>,
    pub users: Arc<UserService>,
    pub auth: AuthState,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::handlers::register,
        users::handlers::login,
        users::handlers::logout,
        users::handlers::session_user,
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::update_user,
        maps::handlers::create_map,
        maps::handlers::get_map,
        maps::handlers::delete_map,
        maps::handlers::get_map_locations,
        maps::handlers::get_map_pins,
        maps::handlers::get_pin_locations,
        maps::handlers::get_selection,
        maps::handlers::select_coordinates,
        maps::handlers::deselect,
        maps::handlers::drop_pin,
        maps::handlers::remove_pin,
        locations::handlers::get_location,
        locations::handlers::find_locations,
        pins::handlers::get_pin,
        pins::handlers::get_pin_pinpoints,
        pinpoints::handlers::create_pinpoint,
        pinpoints::handlers::my_pinpoints,
        pinpoints::handlers::edit_caption,
        pinpoints::handlers::delete_pinpoint,
        collections::handlers::create_collection,
        collections::handlers::my_collections,
        collections::handlers::get_collection,
        collections::handlers::add_pin_to_collection,
        collections::handlers::share_collection,
        collections::handlers::delete_collection,
    ),
    components(schemas(
        users::dto::RegisterRequest,
        users::dto::LoginRequest,
        users::dto::UpdateUserRequest,
        users::dto::UserDto,
        users::dto::SessionDto,
        maps::dto::CreateMapRequest,
        maps::dto::SelectCoordinatesRequest,
        maps::dto::MapDto,
        maps::dto::MapMutationDto,
        maps::dto::SelectionDto,
        maps::dto::PinCoordinatesDto,
        maps::dto::RemovePinDto,
        locations::dto::LocationDto,
        pins::dto::PinDto,
        pinpoints::dto::CreatePinpointRequest,
        pinpoints::dto::EditCaptionRequest,
        pinpoints::dto::PinpointDto,
        pinpoints::dto::PostUpdateDto,
        collections::dto::CreateCollectionRequest,
        collections::dto::CollectionDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and sessions"),
        (name = "Users", description = "Accounts"),
        (name = "Maps", description = "Maps, selection and pin placement"),
        (name = "Locations", description = "Coordinate records"),
        (name = "Pins", description = "Pin records"),
        (name = "Pinpoints", description = "Media posts on pins"),
        (name = "Collections", description = "Shared pin collections"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque session token from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Build the full HTTP surface. Everything except health, register and
/// login sits behind the session middleware.
pub fn create_api_router(state: ApiState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(users::handlers::register))
        .route("/api/v1/auth/login", post(users::handlers::login));

    let protected = Router::new()
        .route("/api/v1/auth/logout", post(users::handlers::logout))
        .route("/api/v1/auth/session", get(users::handlers::session_user))
        .route(
            "/api/v1/users",
            get(users::handlers::list_users).patch(users::handlers::update_user),
        )
        .route("/api/v1/users/{username}", get(users::handlers::get_user))
        .route("/api/v1/maps", post(maps::handlers::create_map))
        .route(
            "/api/v1/maps/{id}",
            get(maps::handlers::get_map).delete(maps::handlers::delete_map),
        )
        .route(
            "/api/v1/maps/{id}/locations",
            get(maps::handlers::get_map_locations),
        )
        .route(
            "/api/v1/maps/{id}/pins",
            get(maps::handlers::get_map_pins).post(maps::handlers::drop_pin),
        )
        .route(
            "/api/v1/maps/{id}/pins/locations",
            get(maps::handlers::get_pin_locations),
        )
        .route(
            "/api/v1/maps/{id}/pins/{pin_id}",
            delete(maps::handlers::remove_pin),
        )
        .route(
            "/api/v1/maps/{id}/selection",
            get(maps::handlers::get_selection)
                .patch(maps::handlers::select_coordinates)
                .delete(maps::handlers::deselect),
        )
        .route("/api/v1/locations", get(locations::handlers::find_locations))
        .route(
            "/api/v1/locations/{id}",
            get(locations::handlers::get_location),
        )
        .route("/api/v1/pins/{id}", get(pins::handlers::get_pin))
        .route(
            "/api/v1/pins/{id}/pinpoints",
            get(pins::handlers::get_pin_pinpoints),
        )
        .route(
            "/api/v1/pinpoints",
            post(pinpoints::handlers::create_pinpoint),
        )
        .route(
            "/api/v1/pinpoints/mine",
            get(pinpoints::handlers::my_pinpoints),
        )
        .route(
            "/api/v1/pinpoints/{id}/caption",
            patch(pinpoints::handlers::edit_caption),
        )
        .route(
            "/api/v1/pinpoints/{id}",
            delete(pinpoints::handlers::delete_pinpoint),
        )
        .route(
            "/api/v1/collections",
            post(collections::handlers::create_collection)
                .get(collections::handlers::my_collections),
        )
        .route(
            "/api/v1/collections/{name}",
            get(collections::handlers::get_collection)
                .delete(collections::handlers::delete_collection),
        )
        .route(
            "/api/v1/collections/{name}/pins/{pin_id}",
            put(collections::handlers::add_pin_to_collection),
        )
        .route(
            "/api/v1/collections/{name}/users/{username}",
            put(collections::handlers::share_collection),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
