use crate::infra::{
    build_engine, parse_certificate, parse_interest, parse_payment, parse_study_year,
};
use clap::Args;
use course_advisor::config::AppConfig;
use course_advisor::error::AppError;
use course_advisor::recommend::{
    CertificateRequirement, CourseRecord, Interest, PaymentPreference, PaymentType,
    RecommendationRequest, RecommendationResponse, ScoredCourse, StudyYear, UserQuery,
};
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Studying year (e.g. "1st Year", "year2" or 3)
    #[arg(long, value_parser = parse_study_year)]
    pub(crate) year: StudyYear,
    /// Area of interest (e.g. "Machine Learning" or machine_learning)
    #[arg(long, value_parser = parse_interest)]
    pub(crate) interest: Interest,
    /// Current skills as free text (e.g. "python, html, statistics")
    #[arg(long, default_value = "")]
    pub(crate) skills: String,
    /// Certificate required? Any, Yes or No
    #[arg(long, value_parser = parse_certificate, default_value = "Any")]
    pub(crate) certificate: CertificateRequirement,
    /// Payment preference: Any, Free or Paid
    #[arg(long, value_parser = parse_payment, default_value = "Any")]
    pub(crate) payment: PaymentPreference,
    /// Name used in the greeting
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Print the response as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        year,
        interest,
        skills,
        certificate,
        payment,
        name,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = build_engine(&config.recommendations)?;

    let request = RecommendationRequest {
        name,
        query: UserQuery::new(year, interest)
            .with_skills(skills)
            .with_certificate(certificate)
            .with_payment(payment),
    };
    let response = engine.respond(request);

    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Recommendation payload unavailable: {}", err),
        }
    } else {
        print!("{}", render_response(&response));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.recommendations)?;
    let courses = engine.catalog().records();

    if args.json {
        match serde_json::to_string_pretty(courses) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Catalog payload unavailable: {}", err),
        }
    } else {
        print!("{}", render_catalog(courses));
    }

    Ok(())
}

pub(crate) fn render_response(response: &RecommendationResponse) -> String {
    let mut out = String::new();

    let greeting = match &response.name {
        Some(name) => format!("Hello {}", name),
        None => "Hello".to_string(),
    };
    writeln!(out, "{}", greeting).ok();
    writeln!(
        out,
        "Year: {} | Interest: {}",
        response.study_year, response.interest
    )
    .ok();

    if response.results.is_empty() {
        let message = response
            .message
            .as_deref()
            .unwrap_or(RecommendationResponse::EMPTY_MESSAGE);
        writeln!(out, "\n{}", message).ok();
        return out;
    }

    for entry in &response.results {
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &ScoredCourse) {
    let course = &entry.course;
    writeln!(out, "\n{}", course.title).ok();
    writeln!(
        out,
        "  Match: {:>3}% [{}]",
        entry.match_score,
        progress_bar(entry.match_score)
    )
    .ok();
    writeln!(
        out,
        "  Platform: {} | Level: {} | Certificate: {}",
        course.platform,
        course.level.label(),
        yes_no(course.has_certificate)
    )
    .ok();
    let badge = match course.payment_type {
        PaymentType::Free => "FREE COURSE",
        PaymentType::Paid => "PAID COURSE",
    };
    writeln!(out, "  {}", badge).ok();
    writeln!(out, "  Link: {}", course.link).ok();
}

pub(crate) fn render_catalog(courses: &[CourseRecord]) -> String {
    let mut out = String::new();
    writeln!(out, "Course catalog ({} courses)", courses.len()).ok();
    for course in courses {
        writeln!(
            out,
            "- {} | {} | {} | {} | {} | certificate {}",
            course.title,
            course.interest.label(),
            course.level.label(),
            course.platform,
            course.payment_type.label(),
            yes_no(course.has_certificate)
        )
        .ok();
    }
    out
}

fn progress_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) / 10;
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_advisor::recommend::{CourseCatalog, RecommendationEngine};

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(CourseCatalog::builtin().expect("builtin catalog is valid"))
    }

    #[test]
    fn renders_greeting_and_course_cards() {
        let response = engine().respond(RecommendationRequest {
            name: Some("Ada".to_string()),
            query: UserQuery::new(StudyYear::Year1, Interest::Programming)
                .with_skills("python programming basics")
                .with_payment(PaymentPreference::Free),
        });

        let text = render_response(&response);

        assert!(text.starts_with("Hello Ada\nYear: 1st Year | Interest: Programming\n"));
        assert!(text.contains("\nPython for Everybody\n  Match: 100% [##########]\n"));
        assert!(text.contains("  Platform: Coursera | Level: Beginner | Certificate: Yes\n"));
        assert!(text.contains("  FREE COURSE\n"));
        assert!(text.contains("  Link: https://www.coursera.org/specializations/python\n"));
        assert!(!text.contains("PAID COURSE"));
    }

    #[test]
    fn renders_empty_result_hint() {
        let response = engine().respond(RecommendationRequest {
            name: None,
            query: UserQuery::new(StudyYear::Year4, Interest::CyberSecurity),
        });

        let text = render_response(&response);

        assert_eq!(
            text,
            "Hello\nYear: 4th Year | Interest: Cyber Security\n\nNo suitable courses found. Try changing your preferences.\n"
        );
    }

    #[test]
    fn progress_bar_fills_by_tens() {
        assert_eq!(progress_bar(0), "----------");
        assert_eq!(progress_bar(59), "#####-----");
        assert_eq!(progress_bar(100), "##########");
    }

    #[test]
    fn catalog_listing_has_one_line_per_course() {
        let engine = engine();
        let text = render_catalog(engine.catalog().records());
        assert_eq!(text.lines().count(), 14);
        assert!(text.contains(
            "- Deep Learning Specialization | Machine Learning | Advanced | Coursera | Paid | certificate Yes"
        ));
    }
}
