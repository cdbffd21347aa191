use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommend::{
    recommendation_router, CourseCatalog, CourseRecord, Interest, Level, PaymentType,
    RecommendationEngine,
};

pub(super) fn builtin_catalog() -> CourseCatalog {
    CourseCatalog::builtin().expect("builtin catalog is valid")
}

pub(super) fn builtin_engine() -> RecommendationEngine {
    RecommendationEngine::new(builtin_catalog())
}

pub(super) fn course(
    title: &str,
    description: &str,
    interest: Interest,
    level: Level,
    payment_type: PaymentType,
    has_certificate: bool,
) -> CourseRecord {
    CourseRecord {
        title: title.to_string(),
        description: description.to_string(),
        interest,
        level,
        platform: "Campus".to_string(),
        payment_type,
        has_certificate,
        link: format!(
            "https://courses.example.edu/{}",
            title.to_lowercase().replace(' ', "-")
        ),
    }
}

/// Twelve beginner programming courses, more than a result list can hold.
pub(super) fn crowded_catalog() -> CourseCatalog {
    let records = (0..12)
        .map(|index| {
            course(
                &format!("Intro Session {index}"),
                "programming fundamentals",
                Interest::Programming,
                Level::Beginner,
                PaymentType::Free,
                index % 2 == 0,
            )
        })
        .collect();
    CourseCatalog::new(records).expect("crowded catalog is valid")
}

pub(super) fn titles(engine: &RecommendationEngine, query: &crate::recommend::UserQuery) -> Vec<String> {
    engine
        .recommend(query)
        .iter()
        .map(|entry| entry.course.title.clone())
        .collect()
}

pub(super) fn router() -> axum::Router {
    recommendation_router(Arc::new(builtin_engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
