use std::env;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("PHYSIO_BUCKET").unwrap_or_else(|_| "physio".to_string());
    let cognito_user_pool_id =
        env::var("COGNITO_USER_POOL_ID").unwrap_or_else(|_| "us-east-1_placeholder".to_string());
    let cognito_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    let s3 = physio_storage::client::build_client().await;
    let state = AppState {
        store: physio_storage::Store::new(s3, bucket),
        cognito_user_pool_id,
        cognito_region,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health and catalog data are public reference endpoints
    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessments", get(routes::assessments::list_assessments))
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment),
        )
        .route("/diagnoses", get(routes::diagnoses::list_diagnoses))
        .route("/diagnoses/{id}", get(routes::diagnoses::get_diagnosis))
        .route(
            "/diagnoses/{id}/recommendations",
            get(routes::diagnoses::get_recommendations),
        );

    let protected = Router::new()
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients", post(routes::patients::create_patient))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route("/patients/{id}", put(routes::patients::update_patient))
        .route("/patients/{id}", delete(routes::patients::delete_patient))
        .route(
            "/patients/{id}/results",
            get(routes::results::list_results),
        )
        .route(
            "/patients/{id}/results",
            post(routes::results::record_result),
        )
        .route(
            "/patients/{id}/evaluations",
            get(routes::evaluations::list_evaluations),
        )
        .route(
            "/patients/{id}/evaluations",
            post(routes::evaluations::create_evaluation),
        )
        .route(
            "/patients/{id}/evaluations/{eval_id}",
            get(routes::evaluations::get_evaluation),
        )
        .route(
            "/patients/{id}/evaluations/{eval_id}",
            put(routes::evaluations::update_evaluation),
        )
        .route(
            "/patients/{id}/evaluations/{eval_id}",
            delete(routes::evaluations::delete_evaluation),
        )
        .route("/patients/{id}/timeline", get(routes::reports::get_timeline))
        .route("/patients/{id}/summary", get(routes::reports::get_summary))
        .route("/patients/{id}/soap", get(routes::reports::get_soap))
        .route("/templates", get(routes::templates::list_templates))
        .route("/templates", post(routes::templates::create_template))
        .route("/templates/{id}", get(routes::templates::get_template))
        .route("/templates/{id}", put(routes::templates::update_template))
        .route(
            "/templates/{id}",
            delete(routes::templates::delete_template),
        )
        .route("/admin/seed", post(routes::seed::seed_catalogs))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
