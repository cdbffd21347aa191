//! Course recommendation: catalog, similarity scoring, filtering and ranking.
//!
//! A [`UserQuery`] flows through the [`RecommendationEngine`], which scores the
//! whole [`CourseCatalog`] with the [`SimilarityScorer`], narrows it with the
//! [`FilterPipeline`], and returns a capped [`RankedResult`].

pub mod catalog;
pub mod domain;
mod engine;
pub mod filter;
pub mod policy;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CourseCatalog};
pub use domain::{
    CertificateRequirement, CourseRecord, Interest, Level, PaymentPreference, PaymentType,
    QueryError, RankedResult, RecommendationRequest, RecommendationResponse, ScoredCourse,
    StudyYear, UserQuery,
};
pub use engine::RecommendationEngine;
pub use filter::{FilterCriteria, FilterPipeline};
pub use policy::LevelPolicy;
pub use router::recommendation_router;
pub use scoring::{to_match_score, SimilarityScorer};
