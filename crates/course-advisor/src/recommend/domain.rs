use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subject area a course belongs to and a learner can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Programming,
    WebDevelopment,
    MachineLearning,
    DataScience,
    CyberSecurity,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Programming,
        Interest::WebDevelopment,
        Interest::MachineLearning,
        Interest::DataScience,
        Interest::CyberSecurity,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Interest::Programming => "Programming",
            Interest::WebDevelopment => "Web Development",
            Interest::MachineLearning => "Machine Learning",
            Interest::DataScience => "Data Science",
            Interest::CyberSecurity => "Cyber Security",
        }
    }
}

impl FromStr for Interest {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "programming" => Ok(Self::Programming),
            "web_development" | "webdev" => Ok(Self::WebDevelopment),
            "machine_learning" | "ml" => Ok(Self::MachineLearning),
            "data_science" => Ok(Self::DataScience),
            "cyber_security" | "cybersecurity" => Ok(Self::CyberSecurity),
            _ => Err(QueryError::invalid("interest", raw)),
        }
    }
}

/// Difficulty tier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Whether a course costs money to enrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Free,
    Paid,
}

impl PaymentType {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentType::Free => "Free",
            PaymentType::Paid => "Paid",
        }
    }
}

/// Year of study the learner is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyYear {
    Year1,
    Year2,
    Year3,
    Year4,
}

impl StudyYear {
    pub const ALL: [StudyYear; 4] = [
        StudyYear::Year1,
        StudyYear::Year2,
        StudyYear::Year3,
        StudyYear::Year4,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            StudyYear::Year1 => "1st Year",
            StudyYear::Year2 => "2nd Year",
            StudyYear::Year3 => "3rd Year",
            StudyYear::Year4 => "4th Year",
        }
    }
}

impl FromStr for StudyYear {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "1" | "1st" | "1st_year" | "year1" | "year_1" | "first_year" => Ok(Self::Year1),
            "2" | "2nd" | "2nd_year" | "year2" | "year_2" | "second_year" => Ok(Self::Year2),
            "3" | "3rd" | "3rd_year" | "year3" | "year_3" | "third_year" => Ok(Self::Year3),
            "4" | "4th" | "4th_year" | "year4" | "year_4" | "fourth_year" => Ok(Self::Year4),
            _ => Err(QueryError::invalid("study year", raw)),
        }
    }
}

/// Learner's stance on receiving a certificate of completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateRequirement {
    #[default]
    Any,
    Required,
    NotRequired,
}

impl CertificateRequirement {
    pub const ALL: [CertificateRequirement; 3] = [
        CertificateRequirement::Any,
        CertificateRequirement::Required,
        CertificateRequirement::NotRequired,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CertificateRequirement::Any => "Any",
            CertificateRequirement::Required => "Yes",
            CertificateRequirement::NotRequired => "No",
        }
    }

    pub const fn admits(self, has_certificate: bool) -> bool {
        match self {
            CertificateRequirement::Any => true,
            CertificateRequirement::Required => has_certificate,
            CertificateRequirement::NotRequired => !has_certificate,
        }
    }
}

impl FromStr for CertificateRequirement {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "any" => Ok(Self::Any),
            "yes" | "required" | "true" => Ok(Self::Required),
            "no" | "not_required" | "false" => Ok(Self::NotRequired),
            _ => Err(QueryError::invalid("certificate requirement", raw)),
        }
    }
}

/// Learner's stance on paying for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPreference {
    #[default]
    Any,
    Free,
    Paid,
}

impl PaymentPreference {
    pub const ALL: [PaymentPreference; 3] = [
        PaymentPreference::Any,
        PaymentPreference::Free,
        PaymentPreference::Paid,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PaymentPreference::Any => "Any",
            PaymentPreference::Free => "Free",
            PaymentPreference::Paid => "Paid",
        }
    }

    pub const fn admits(self, payment_type: PaymentType) -> bool {
        match (self, payment_type) {
            (PaymentPreference::Any, _) => true,
            (PaymentPreference::Free, PaymentType::Free) => true,
            (PaymentPreference::Paid, PaymentType::Paid) => true,
            (PaymentPreference::Free, PaymentType::Paid)
            | (PaymentPreference::Paid, PaymentType::Free) => false,
        }
    }
}

impl FromStr for PaymentPreference {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "any" => Ok(Self::Any),
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            _ => Err(QueryError::invalid("payment preference", raw)),
        }
    }
}

/// One entry of the course catalog. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    /// Free-text tags, only consumed by similarity scoring.
    pub description: String,
    pub interest: Interest,
    pub level: Level,
    pub platform: String,
    pub payment_type: PaymentType,
    pub has_certificate: bool,
    pub link: String,
}

/// Learner request as handed over by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub study_year: StudyYear,
    pub interest: Interest,
    #[serde(default)]
    pub skills_text: String,
    #[serde(default)]
    pub certificate_requirement: CertificateRequirement,
    #[serde(default)]
    pub payment_preference: PaymentPreference,
}

impl UserQuery {
    pub fn new(study_year: StudyYear, interest: Interest) -> Self {
        Self {
            study_year,
            interest,
            skills_text: String::new(),
            certificate_requirement: CertificateRequirement::Any,
            payment_preference: PaymentPreference::Any,
        }
    }

    pub fn with_skills(mut self, skills_text: impl Into<String>) -> Self {
        self.skills_text = skills_text.into();
        self
    }

    pub fn with_certificate(mut self, requirement: CertificateRequirement) -> Self {
        self.certificate_requirement = requirement;
        self
    }

    pub fn with_payment(mut self, preference: PaymentPreference) -> Self {
        self.payment_preference = preference;
        self
    }
}

/// A catalog record paired with its match percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: CourseRecord,
    pub match_score: u8,
}

/// Final short-list: at most [`RankedResult::MAX_LEN`] entries, best match first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<ScoredCourse>);

impl RankedResult {
    pub const MAX_LEN: usize = 8;

    pub(crate) fn from_sorted(mut entries: Vec<ScoredCourse>, limit: usize) -> Self {
        entries.truncate(limit.min(Self::MAX_LEN));
        Self(entries)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCourse> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ScoredCourse] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ScoredCourse> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoredCourse;
    type IntoIter = std::slice::Iter<'a, ScoredCourse>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Raw request body from the presentation layer: the query plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub query: UserQuery,
}

/// Everything the presentation layer needs to render a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Display name, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub study_year: StudyYear,
    pub interest: Interest,
    pub results: RankedResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationResponse {
    pub const EMPTY_MESSAGE: &'static str =
        "No suitable courses found. Try changing your preferences.";
}

/// Raised when a raw label does not name a member of a closed domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown {field} '{value}'")]
    InvalidEnum { field: &'static str, value: String },
}

impl QueryError {
    fn invalid(field: &'static str, value: &str) -> Self {
        QueryError::InvalidEnum {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for StudyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|ch| if ch == ' ' || ch == '-' { '_' } else { ch })
        .collect()
}
