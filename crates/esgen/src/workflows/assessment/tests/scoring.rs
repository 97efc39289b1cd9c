use super::common::*;

use crate::workflows::assessment::answers::{Answer, AnswerStore};
use crate::workflows::assessment::catalog::{
    CHALLENGES, COMPANY_SIZE, ESG_POLICY, FRAMEWORKS, INITIATIVES, MATURITY_RATING,
    STAKEHOLDER_IMPORTANCE,
};
use crate::workflows::assessment::{
    recommend, score, EsgCategory, Priority, ScoreResult, ScoringEngine, ScoringRule,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn empty_store_scores_baseline() {
    let result = score(&AnswerStore::new());
    assert_eq!(
        result,
        ScoreResult {
            environmental: 50,
            social: 50,
            governance: 50,
            overall: 50,
        }
    );
}

#[test]
fn sample_answers_score() {
    let result = score(&sample_answers());
    assert_eq!(result.environmental, 67);
    assert_eq!(result.social, 92);
    assert_eq!(result.governance, 94);
    assert_eq!(result.overall, 84);
}

#[test]
fn challenges_lower_every_category() {
    let result = score(&four_challenges());
    assert_eq!(result, ScoreResult::from_parts(42, 42, 42));
    assert_eq!(result.overall, 42);
}

#[test]
fn scoring_is_idempotent() {
    let answers = sample_answers();
    let engine = ScoringEngine::default();
    assert_eq!(engine.breakdown(&answers), engine.breakdown(&answers));
}

#[test]
fn chinese_answers_trigger_the_same_rules() {
    let answers = AnswerStore::from_raw(&catalog(), &company_answers_zh());
    let result = score(&answers);
    assert_eq!(result.governance, 50 + 10 + 8);
    assert_eq!(result.social, 50);
    assert_eq!(result.environmental, 50);
}

#[test]
fn sub_scores_clamp_to_the_upper_bound() {
    let mut answers = AnswerStore::new();
    answers.insert(
        COMPANY_SIZE,
        Answer::Choice("Enterprise (1000+ employees)".to_string()),
    );
    answers.insert(ESG_POLICY, Answer::Choice("Yes, fully implemented".to_string()));
    answers.insert(
        FRAMEWORKS,
        Answer::MultiChoice(strings(&["GRI", "TCFD", "SASB", "ISSB", "CDP", "UN SDGs"])),
    );
    answers.insert(MATURITY_RATING, Answer::Rating(10));
    answers.insert(
        STAKEHOLDER_IMPORTANCE,
        Answer::Choice("Critical - Top priority".to_string()),
    );

    let result = score(&answers);
    assert_eq!(result.governance, 100);
    assert!(result.overall <= 100);
}

#[test]
fn sub_scores_clamp_to_the_lower_bound() {
    let mut answers = AnswerStore::new();
    let challenges: Vec<String> = (0..30).map(|index| format!("challenge {index}")).collect();
    answers.insert(CHALLENGES, Answer::MultiChoice(challenges));
    answers.insert(MATURITY_RATING, Answer::Rating(1));

    let result = score(&answers);
    assert_eq!(result, ScoreResult::from_parts(0, 0, 0));
}

#[test]
fn answers_of_the_wrong_shape_are_ignored() {
    let mut answers = AnswerStore::new();
    answers.insert(MATURITY_RATING, Answer::Text("9".to_string()));
    answers.insert(FRAMEWORKS, Answer::Choice("GRI".to_string()));
    answers.insert(INITIATIVES, Answer::Text("Carbon footprint monitoring".to_string()));
    assert_eq!(score(&answers), ScoreResult::from_parts(50, 50, 50));

    answers.insert(MATURITY_RATING, Answer::Rating(11));
    assert_eq!(score(&answers), ScoreResult::from_parts(50, 50, 50));
}

#[test]
fn neutral_maturity_adds_no_component() {
    let mut answers = AnswerStore::new();
    answers.insert(MATURITY_RATING, Answer::Rating(5));
    let breakdown = ScoringEngine::default().breakdown(&answers);
    assert!(breakdown.components.is_empty());
    assert_eq!(breakdown.scores.overall, 50);
}

#[test]
fn components_account_for_every_point() {
    let breakdown = ScoringEngine::default().breakdown(&sample_answers());
    for category in EsgCategory::ordered() {
        let delta: i32 = breakdown
            .components
            .iter()
            .filter(|component| component.category == category)
            .map(|component| component.delta)
            .sum();
        assert_eq!(50 + delta, breakdown.scores.get(category) as i32);
    }
    assert!(breakdown
        .components
        .iter()
        .any(|component| component.rule == ScoringRule::StakeholderImportance));
    assert!(!breakdown
        .components
        .iter()
        .any(|component| component.rule == ScoringRule::Challenges));
}

#[test]
fn sample_answers_only_flag_the_environment() {
    let recommendations = recommend(&score(&sample_answers()));
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].category, EsgCategory::Environmental);
    assert_eq!(recommendations[0].priority, Priority::High);
}
