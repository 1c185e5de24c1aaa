use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request,
    },
    middleware::{from_fn_with_state, map_response},
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::handlers::{categories, drinks, health, questions, quizzes};
use crate::api::middleware::{fallback, require_permission, PermissionGate};
use crate::api::state::{CoffeeState, TriviaState};

/// Build the trivia router
pub fn trivia_router(state: TriviaState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::get_categories))
        .route(
            "/categories/:id/questions",
            get(categories::get_category_questions),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/searchQuestions", post(questions::search_questions))
        // Quiz
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(fallback::not_found)
        .with_state(state);

    with_common_layers(router)
}

/// Build the coffee shop router
///
/// Each gated route carries its own permission layer, which runs before the
/// handler's extractors and short-circuits with the auth error.
pub fn coffee_router(state: CoffeeState) -> Router {
    let gate = |permission: &'static str| PermissionGate::new(state.verifier.clone(), permission);

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/drinks", get(drinks::list_drinks))
        .route(
            "/drinks",
            post(drinks::create_drink)
                .route_layer(from_fn_with_state(gate("post:drinks"), require_permission)),
        )
        .route(
            "/drinks-detail",
            get(drinks::list_drinks_detail).route_layer(from_fn_with_state(
                gate("get:drinks-detail"),
                require_permission,
            )),
        )
        .route(
            "/drinks/:id",
            patch(drinks::update_drink)
                .route_layer(from_fn_with_state(gate("patch:drinks"), require_permission)),
        )
        .route(
            "/drinks/:id",
            delete(drinks::delete_drink)
                .route_layer(from_fn_with_state(gate("delete:drinks"), require_permission)),
        )
        .fallback(fallback::not_found)
        .with_state(state);

    with_common_layers(router)
}

/// Layers shared by both services: error shaping, panic recovery, tracing, CORS
fn with_common_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    router
        .layer(map_response(fallback::method_not_allowed_json))
        .layer(CatchPanicLayer::custom(fallback::panic_response))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    id = %Uuid::new_v4(),
                )
            }),
        )
        .layer(cors)
}
