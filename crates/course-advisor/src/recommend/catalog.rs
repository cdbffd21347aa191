use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::domain::{CourseRecord, Interest, Level, PaymentType};

/// Immutable, shareable course table. Cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    records: Arc<[CourseRecord]>,
}

impl CourseCatalog {
    /// Validate `records` and freeze them into a catalog.
    pub fn new(records: Vec<CourseRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// The compiled-in catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        let records = BUILTIN_COURSES
            .iter()
            .map(SeedCourse::to_record)
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CourseRecord> {
        self.records.get(index)
    }
}

/// Catalog invariant violation. Fatal at start-up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("course catalog is empty")]
    Empty,
    #[error("course #{index} is missing a {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("course #{index} ('{title}') has an invalid link '{link}'")]
    InvalidLink {
        index: usize,
        title: String,
        link: String,
    },
}

fn validate_record(index: usize, record: &CourseRecord) -> Result<(), CatalogError> {
    let required = [
        ("title", &record.title),
        ("description", &record.description),
        ("platform", &record.platform),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField { index, field });
        }
    }

    if !link_pattern().is_match(record.link.trim()) {
        return Err(CatalogError::InvalidLink {
            index,
            title: record.title.clone(),
            link: record.link.clone(),
        });
    }

    Ok(())
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::\d{1,5})?(?:[/?#]\S*)?$")
            .expect("valid regex")
    })
}

struct SeedCourse {
    title: &'static str,
    description: &'static str,
    interest: Interest,
    level: Level,
    platform: &'static str,
    payment_type: PaymentType,
    has_certificate: bool,
    link: &'static str,
}

impl SeedCourse {
    fn to_record(&self) -> CourseRecord {
        CourseRecord {
            title: self.title.to_string(),
            description: self.description.to_string(),
            interest: self.interest,
            level: self.level,
            platform: self.platform.to_string(),
            payment_type: self.payment_type,
            has_certificate: self.has_certificate,
            link: self.link.to_string(),
        }
    }
}

const BUILTIN_COURSES: [SeedCourse; 13] = [
    SeedCourse {
        title: "Python for Everybody",
        description: "python programming basics",
        interest: Interest::Programming,
        level: Level::Beginner,
        platform: "Coursera",
        payment_type: PaymentType::Free,
        has_certificate: true,
        link: "https://www.coursera.org/specializations/python",
    },
    SeedCourse {
        title: "Complete Python Bootcamp",
        description: "python full course",
        interest: Interest::Programming,
        level: Level::Beginner,
        platform: "Udemy",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.udemy.com/course/complete-python-bootcamp/",
    },
    SeedCourse {
        title: "Python Full Course",
        description: "python tutorial coding",
        interest: Interest::Programming,
        level: Level::Beginner,
        platform: "YouTube",
        payment_type: PaymentType::Free,
        has_certificate: false,
        link: "https://www.youtube.com/@freecodecamp",
    },
    SeedCourse {
        title: "Web Development Full Course",
        description: "html css javascript web",
        interest: Interest::WebDevelopment,
        level: Level::Beginner,
        platform: "YouTube",
        payment_type: PaymentType::Free,
        has_certificate: false,
        link: "https://www.youtube.com/@TraversyMedia",
    },
    SeedCourse {
        title: "React – The Complete Guide",
        description: "react javascript frontend",
        interest: Interest::WebDevelopment,
        level: Level::Intermediate,
        platform: "Udemy",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.udemy.com/course/react-the-complete-guide/",
    },
    SeedCourse {
        title: "Full Stack Web Development",
        description: "mern stack full stack",
        interest: Interest::WebDevelopment,
        level: Level::Advanced,
        platform: "Coursera",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.coursera.org/specializations/full-stack-react",
    },
    SeedCourse {
        title: "Machine Learning – Andrew Ng",
        description: "machine learning ai models",
        interest: Interest::MachineLearning,
        level: Level::Intermediate,
        platform: "Coursera",
        payment_type: PaymentType::Free,
        has_certificate: true,
        link: "https://www.coursera.org/learn/machine-learning",
    },
    SeedCourse {
        title: "Machine Learning Full Course",
        description: "machine learning tutorial",
        interest: Interest::MachineLearning,
        level: Level::Beginner,
        platform: "YouTube",
        payment_type: PaymentType::Free,
        has_certificate: false,
        link: "https://www.youtube.com/@codebasics",
    },
    SeedCourse {
        title: "Deep Learning Specialization",
        description: "deep learning neural networks",
        interest: Interest::MachineLearning,
        level: Level::Advanced,
        platform: "Coursera",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.coursera.org/specializations/deep-learning",
    },
    SeedCourse {
        title: "Data Science with Python",
        description: "data analysis statistics python",
        interest: Interest::DataScience,
        level: Level::Intermediate,
        platform: "Coursera",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.coursera.org/specializations/data-science-python",
    },
    SeedCourse {
        title: "Data Science Full Course",
        description: "data science tutorial",
        interest: Interest::DataScience,
        level: Level::Beginner,
        platform: "YouTube",
        payment_type: PaymentType::Free,
        has_certificate: false,
        link: "https://www.youtube.com/@simplilearn",
    },
    SeedCourse {
        title: "Cyber Security Fundamentals",
        description: "network security linux",
        interest: Interest::CyberSecurity,
        level: Level::Beginner,
        platform: "Udemy",
        payment_type: PaymentType::Paid,
        has_certificate: true,
        link: "https://www.udemy.com/course/cyber-security-course/",
    },
    SeedCourse {
        title: "Cyber Security Full Course",
        description: "cyber security basics",
        interest: Interest::CyberSecurity,
        level: Level::Beginner,
        platform: "YouTube",
        payment_type: PaymentType::Free,
        has_certificate: false,
        link: "https://www.youtube.com/@NetworkChuck",
    },
];
