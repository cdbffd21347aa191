use course_advisor::config::RecommendationConfig;
use course_advisor::error::AppError;
use course_advisor::recommend::{
    CertificateRequirement, CourseCatalog, Interest, PaymentPreference, QueryError,
    RecommendationEngine, StudyYear,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine over the compiled-in catalog; a broken catalog aborts start-up.
pub(crate) fn build_engine(config: &RecommendationConfig) -> Result<RecommendationEngine, AppError> {
    let catalog = CourseCatalog::builtin()?;
    info!(
        courses = catalog.len(),
        max_results = config.max_results,
        "course catalog loaded"
    );
    Ok(RecommendationEngine::new(catalog).with_max_results(config.max_results))
}

fn parse_label<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = QueryError>,
{
    raw.parse::<T>().map_err(|err| err.to_string())
}

pub(crate) fn parse_study_year(raw: &str) -> Result<StudyYear, String> {
    parse_label(raw)
}

pub(crate) fn parse_interest(raw: &str) -> Result<Interest, String> {
    parse_label(raw)
}

pub(crate) fn parse_certificate(raw: &str) -> Result<CertificateRequirement, String> {
    parse_label(raw)
}

pub(crate) fn parse_payment(raw: &str) -> Result<PaymentPreference, String> {
    parse_label(raw)
}
