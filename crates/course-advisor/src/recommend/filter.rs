use super::domain::{
    CertificateRequirement, CourseRecord, Interest, Level, PaymentPreference, UserQuery,
};
use super::policy::LevelPolicy;

/// Categorical predicates a course must satisfy, all of them at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria<'a> {
    pub interest: Interest,
    pub allowed_levels: &'a [Level],
    pub certificate: CertificateRequirement,
    pub payment: PaymentPreference,
}

impl FilterCriteria<'static> {
    /// Criteria for a query, with levels resolved through the [`LevelPolicy`].
    pub fn for_query(query: &UserQuery) -> Self {
        Self {
            interest: query.interest,
            allowed_levels: LevelPolicy::allowed_levels(query.study_year),
            certificate: query.certificate_requirement,
            payment: query.payment_preference,
        }
    }
}

impl FilterCriteria<'_> {
    pub fn matches(&self, course: &CourseRecord) -> bool {
        course.interest == self.interest
            && self.allowed_levels.contains(&course.level)
            && self.certificate.admits(course.has_certificate)
            && self.payment.admits(course.payment_type)
    }
}

/// Applies [`FilterCriteria`] to a catalog without reordering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPipeline;

impl FilterPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Matching courses paired with their catalog index, in catalog order.
    /// An empty vector is a normal outcome.
    pub fn filter<'c>(
        &self,
        catalog: &'c [CourseRecord],
        criteria: &FilterCriteria<'_>,
    ) -> Vec<(usize, &'c CourseRecord)> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, course)| criteria.matches(course))
            .collect()
    }
}
