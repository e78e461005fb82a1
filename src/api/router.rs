//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! One sub-router per resource, nested under `/api/v1/`.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with all resource endpoints.
pub fn api_router(ctx: ApiContext) -> Router {
    let caretaker = Router::new()
        .route("/signup", post(endpoints::caretaker::signup))
        .route("/signin", post(endpoints::caretaker::signin));

    let doctor = Router::new()
        .route("/signup", post(endpoints::doctor::signup))
        .route("/signin", post(endpoints::doctor::signin))
        .route("/all", get(endpoints::doctor::list))
        .route("/:id", get(endpoints::doctor::detail));

    let old_age_home = Router::new()
        .route("/create", post(endpoints::old_age_home::create))
        .route("/:id", get(endpoints::old_age_home::detail))
        .route(
            "/caretaker/:caretaker_id",
            get(endpoints::old_age_home::by_caretaker),
        )
        .route("/doctor/:doctor_id", get(endpoints::old_age_home::by_doctor));

    let patient = Router::new()
        .route("/", post(endpoints::patient::create).get(endpoints::patient::list))
        .route("/:id", get(endpoints::patient::detail))
        .route(
            "/oldagehome/:old_age_home_id",
            get(endpoints::patient::by_old_age_home),
        )
        .route(
            "/caretaker/:caretaker_id",
            get(endpoints::patient::by_caretaker),
        )
        .route("/doctor/:doctor_id", get(endpoints::patient::by_doctor));

    let prescription = Router::new()
        .route("/create", post(endpoints::prescription::create))
        .route("/", get(endpoints::prescription::list))
        .route("/:id", get(endpoints::prescription::detail))
        .route("/report/:report_id", get(endpoints::prescription::by_report));

    let reports = Router::new()
        .route("/create", post(endpoints::report::create))
        .route("/", get(endpoints::report::list))
        .route("/:id", get(endpoints::report::detail).put(endpoints::report::update))
        .route(
            "/caretaker/:caretaker_id",
            get(endpoints::report::by_caretaker),
        )
        .route("/doctor/:doctor_id", get(endpoints::report::by_doctor));

    Router::new()
        // axum 0.7 nesting maps the inner "/" route to the bare prefix only;
        // the trailing-slash form needs an explicit route to stay reachable.
        .route(
            "/api/v1/patient/",
            post(endpoints::patient::create).get(endpoints::patient::list),
        )
        .nest("/api/v1/caretaker", caretaker)
        .nest("/api/v1/doctor", doctor)
        .nest("/api/v1/oldagehome", old_age_home)
        .nest("/api/v1/patient", patient)
        .nest("/api/v1/prescription", prescription)
        .nest("/api/v1/reports", reports)
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
