use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    CertificateRequirement, Interest, PaymentPreference, QueryError, RecommendationRequest,
    RecommendationResponse, StudyYear, UserQuery,
};
use super::engine::RecommendationEngine;
use crate::error::AppError;

/// Router exposing the recommendation engine to the presentation layer.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route(
            "/api/v1/recommendations",
            post(recommend_handler).get(recommend_query_handler),
        )
        .route("/api/v1/courses", get(catalog_handler))
        .route("/api/v1/options", get(options_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let response = engine.respond(request);
    (StatusCode::OK, Json(response)).into_response()
}

/// Form-style query string carrying display labels ("1st Year", "Web Development", "Yes").
#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationParams {
    pub(crate) study_year: String,
    pub(crate) interest: String,
    #[serde(default)]
    pub(crate) skills: String,
    #[serde(default)]
    pub(crate) certificate: Option<String>,
    #[serde(default)]
    pub(crate) payment: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl RecommendationParams {
    pub(crate) fn into_request(self) -> Result<RecommendationRequest, QueryError> {
        let certificate = match self.certificate.as_deref() {
            Some(raw) => raw.parse()?,
            None => CertificateRequirement::Any,
        };
        let payment = match self.payment.as_deref() {
            Some(raw) => raw.parse()?,
            None => PaymentPreference::Any,
        };
        let query = UserQuery::new(self.study_year.parse()?, self.interest.parse()?)
            .with_skills(self.skills)
            .with_certificate(certificate)
            .with_payment(payment);

        Ok(RecommendationRequest {
            name: self.name,
            query,
        })
    }
}

pub(crate) async fn recommend_query_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let request = params.into_request()?;
    Ok(Json(engine.respond(request)))
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    let courses = engine.catalog().records();
    let payload = json!({
        "total": courses.len(),
        "courses": courses,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn options_handler() -> Response {
    let payload = json!({
        "study_years": StudyYear::ALL
            .iter()
            .map(|year| json!({ "value": year, "label": year.label() }))
            .collect::<Vec<_>>(),
        "interests": Interest::ALL
            .iter()
            .map(|interest| json!({ "value": interest, "label": interest.label() }))
            .collect::<Vec<_>>(),
        "certificate_requirements": CertificateRequirement::ALL
            .iter()
            .map(|requirement| json!({ "value": requirement, "label": requirement.label() }))
            .collect::<Vec<_>>(),
        "payment_preferences": PaymentPreference::ALL
            .iter()
            .map(|preference| json!({ "value": preference, "label": preference.label() }))
            .collect::<Vec<_>>(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
