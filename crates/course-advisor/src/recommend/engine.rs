use tracing::debug;

use super::catalog::CourseCatalog;
use super::domain::{
    RankedResult, RecommendationRequest, RecommendationResponse, ScoredCourse, UserQuery,
};
use super::filter::{FilterCriteria, FilterPipeline};
use super::scoring::SimilarityScorer;

/// Stateless orchestrator: scores the whole catalog, filters, then ranks.
///
/// The catalog is injected at construction and only ever read, so one engine
/// can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: CourseCatalog,
    scorer: SimilarityScorer,
    pipeline: FilterPipeline,
    max_results: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: CourseCatalog) -> Self {
        Self {
            catalog,
            scorer: SimilarityScorer::new(),
            pipeline: FilterPipeline::new(),
            max_results: RankedResult::MAX_LEN,
        }
    }

    /// Lower the result cap. Values above [`RankedResult::MAX_LEN`] are ignored.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(RankedResult::MAX_LEN);
        self
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn recommend(&self, query: &UserQuery) -> RankedResult {
        let courses = self.catalog.records();

        // Score before filtering; the corpus is always the full catalog.
        let scores = self.scorer.score(&query.skills_text, courses);

        let criteria = FilterCriteria::for_query(query);
        let filtered = self.pipeline.filter(courses, &criteria);

        let mut ranked: Vec<ScoredCourse> = filtered
            .into_iter()
            .map(|(index, course)| ScoredCourse {
                course: course.clone(),
                match_score: scores.get(index).copied().unwrap_or(0),
            })
            .collect();
        // sort_by is stable: equal scores keep catalog order.
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            scored = scores.len(),
            matched = ranked.len(),
            returned = ranked.len().min(self.max_results),
            study_year = ?query.study_year,
            interest = ?query.interest,
            "computed course recommendations"
        );

        RankedResult::from_sorted(ranked, self.max_results)
    }

    /// Run a presentation-layer request, echoing its context back.
    pub fn respond(&self, request: RecommendationRequest) -> RecommendationResponse {
        let RecommendationRequest { name, query } = request;
        let results = self.recommend(&query);
        let message = results
            .is_empty()
            .then(|| RecommendationResponse::EMPTY_MESSAGE.to_string());

        RecommendationResponse {
            name,
            study_year: query.study_year,
            interest: query.interest,
            results,
            message,
        }
    }
}
