use super::common::*;
use crate::recommend::{
    CertificateRequirement, Interest, Level, PaymentPreference, RankedResult,
    RecommendationEngine, RecommendationRequest, RecommendationResponse, StudyYear, UserQuery,
};

#[test]
fn beginner_python_query_puts_python_for_everybody_first() {
    let engine = builtin_engine();
    let query = UserQuery::new(StudyYear::Year1, Interest::Programming)
        .with_skills("python programming basics")
        .with_payment(PaymentPreference::Free);

    let result = engine.recommend(&query);

    let first = result.iter().next().expect("at least one match");
    assert_eq!(first.course.title, "Python for Everybody");
    assert_eq!(first.course.platform, "Coursera");
    assert_eq!(first.match_score, 100);
    assert!(result
        .iter()
        .all(|entry| entry.course.level == Level::Beginner));
    assert_eq!(
        titles(&engine, &query),
        vec!["Python for Everybody", "Python Full Course"]
    );
}

#[test]
fn higher_scores_rank_ahead_of_catalog_order() {
    let engine = builtin_engine();
    let query =
        UserQuery::new(StudyYear::Year2, Interest::MachineLearning).with_skills("machine learning");

    assert_eq!(
        titles(&engine, &query),
        vec!["Machine Learning Full Course", "Machine Learning – Andrew Ng"]
    );
}

#[test]
fn ties_keep_catalog_order() {
    let engine = builtin_engine();
    let query = UserQuery::new(StudyYear::Year2, Interest::Programming);

    let result = engine.recommend(&query);

    assert!(result.iter().all(|entry| entry.match_score == 0));
    assert_eq!(
        titles(&engine, &query),
        vec![
            "Python for Everybody",
            "Complete Python Bootcamp",
            "Python Full Course"
        ]
    );
}

#[test]
fn filtering_does_not_change_scores() {
    let engine = builtin_engine();
    let skills = "python statistics";
    let broad = UserQuery::new(StudyYear::Year2, Interest::DataScience).with_skills(skills);
    let narrow = broad
        .clone()
        .with_certificate(CertificateRequirement::Required)
        .with_payment(PaymentPreference::Paid);

    let broad_result = engine.recommend(&broad);
    let narrow_result = engine.recommend(&narrow);

    let broad_score = broad_result
        .iter()
        .find(|entry| entry.course.title == "Data Science with Python")
        .map(|entry| entry.match_score);
    let narrow_score = narrow_result
        .iter()
        .find(|entry| entry.course.title == "Data Science with Python")
        .map(|entry| entry.match_score);
    assert!(broad_score.is_some());
    assert_eq!(broad_score, narrow_score);
    assert_eq!(narrow_result.len(), 1);
}

#[test]
fn fourth_year_cyber_security_is_empty() {
    let engine = builtin_engine();
    let query = UserQuery::new(StudyYear::Year4, Interest::CyberSecurity).with_skills("linux");

    let result = engine.recommend(&query);

    assert!(result.is_empty());
    assert_eq!(result, RankedResult::empty());
}

#[test]
fn advanced_paid_certified_machine_learning_only() {
    let engine = builtin_engine();
    let query = UserQuery::new(StudyYear::Year4, Interest::MachineLearning)
        .with_certificate(CertificateRequirement::Required)
        .with_payment(PaymentPreference::Paid);

    assert_eq!(titles(&engine, &query), vec!["Deep Learning Specialization"]);
}

#[test]
fn results_are_capped_at_eight() {
    let engine = RecommendationEngine::new(crowded_catalog());
    let query = UserQuery::new(StudyYear::Year1, Interest::Programming).with_skills("programming");

    let result = engine.recommend(&query);

    assert_eq!(result.len(), RankedResult::MAX_LEN);
    let titles: Vec<&str> = result.iter().map(|entry| entry.course.title.as_str()).collect();
    assert_eq!(titles.first(), Some(&"Intro Session 0"));
    assert_eq!(titles.last(), Some(&"Intro Session 7"));
}

#[test]
fn configured_cap_can_only_shrink_results() {
    let engine = RecommendationEngine::new(crowded_catalog()).with_max_results(3);
    let query = UserQuery::new(StudyYear::Year1, Interest::Programming);
    assert_eq!(engine.recommend(&query).len(), 3);

    let engine = RecommendationEngine::new(crowded_catalog()).with_max_results(50);
    assert_eq!(engine.max_results(), RankedResult::MAX_LEN);
    assert_eq!(engine.recommend(&query).len(), RankedResult::MAX_LEN);
}

#[test]
fn repeated_queries_are_identical() {
    let engine = builtin_engine();
    let query = UserQuery::new(StudyYear::Year2, Interest::WebDevelopment)
        .with_skills("javascript react");

    assert_eq!(engine.recommend(&query), engine.recommend(&query));
}

#[test]
fn respond_echoes_context_and_name() {
    let engine = builtin_engine();
    let request = RecommendationRequest {
        name: Some("<b>Grace</b>".to_string()),
        query: UserQuery::new(StudyYear::Year1, Interest::WebDevelopment).with_skills("css"),
    };

    let response = engine.respond(request);

    assert_eq!(response.name.as_deref(), Some("<b>Grace</b>"));
    assert_eq!(response.study_year, StudyYear::Year1);
    assert_eq!(response.interest, Interest::WebDevelopment);
    assert_eq!(response.results.len(), 1);
    assert!(response.message.is_none());
}

#[test]
fn respond_explains_empty_results() {
    let engine = builtin_engine();
    let request = RecommendationRequest {
        name: None,
        query: UserQuery::new(StudyYear::Year4, Interest::DataScience),
    };

    let response = engine.respond(request);

    assert!(response.results.is_empty());
    assert_eq!(
        response.message.as_deref(),
        Some(RecommendationResponse::EMPTY_MESSAGE)
    );
}
