use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use esgen::config::AppConfig;
use esgen::error::AppError;
use esgen::workflows::assessment::{
    AssessmentReport, AssessmentService, CategoryCounts, Priority, QuestionCatalog, RawAnswers,
    ScoredAssessment,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Draw from the question bank instead of printing the fixed flow
    #[arg(long)]
    pub(crate) random: bool,
    /// Environmental questions to draw (defaults to configuration)
    #[arg(long)]
    pub(crate) environmental: Option<usize>,
    /// Social questions to draw (defaults to configuration)
    #[arg(long)]
    pub(crate) social: Option<usize>,
    /// Governance questions to draw (defaults to configuration)
    #[arg(long)]
    pub(crate) governance: Option<usize>,
    /// Seed for a reproducible draw
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Show Traditional Chinese prompts
    #[arg(long)]
    pub(crate) chinese: bool,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question ids to answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Reference date for the trend series (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::new(config.assessment.counts);

    let catalog = if args.random {
        let defaults = service.default_counts();
        let counts = CategoryCounts::new(
            args.environmental.unwrap_or(defaults.environmental),
            args.social.unwrap_or(defaults.social),
            args.governance.unwrap_or(defaults.governance),
        );
        service.random_catalog(Some(counts), args.seed)
    } else {
        service.fixed_flow()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        render_catalog(&catalog, args.chinese);
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::new(config.assessment.counts);

    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: RawAnswers = serde_json::from_str(&raw)?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let scored = service.score(&answers, as_of);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        render_scored(&scored);
    }
    Ok(())
}

fn render_catalog(catalog: &QuestionCatalog, chinese: bool) {
    println!("Question catalog {} ({} questions)", catalog.version, catalog.len());
    for question in &catalog.questions {
        let (prompt, options, category) = if chinese {
            (question.prompt_zh, question.options_zh, question.category.label_zh())
        } else {
            (question.prompt, question.options, question.category.label())
        };
        println!(
            "{:>4} [{}] ({}) {}",
            question.id.to_string(),
            category,
            question.kind.label(),
            prompt
        );
        for option in options {
            println!("       - {option}");
        }
    }
}

pub(crate) fn render_scored(scored: &ScoredAssessment) {
    render_report(&scored.report);
    if !scored.rejected.is_empty() {
        println!("Skipped answers:");
        for reason in &scored.rejected {
            println!("  - {reason}");
        }
    }
}

pub(crate) fn render_report(report: &AssessmentReport) {
    println!("ESG assessment for {}", report.profile.display_name());
    println!(
        "- Overall {} ({}) | answered {} question(s)",
        report.scores.overall,
        report.statuses.overall.label(),
        report.answered
    );
    println!(
        "- Environmental {} ({}) | Social {} ({}) | Governance {} ({})",
        report.scores.environmental,
        report.statuses.environmental.label(),
        report.scores.social,
        report.statuses.social.label(),
        report.scores.governance,
        report.statuses.governance.label()
    );

    println!("Score components:");
    if report.components.is_empty() {
        println!("  (baseline only)");
    }
    for component in &report.components {
        println!(
            "  - {:>+4} {} ({})",
            component.delta,
            component.category.label(),
            component.notes
        );
    }

    println!("Recommendations:");
    if report.is_satisfactory() {
        println!("  Performance is strong across all three categories; keep it up.");
    }
    for recommendation in &report.recommendations {
        let priority = match recommendation.priority {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        };
        println!(
            "  - [{priority}] {}: {}",
            recommendation.title, recommendation.description
        );
    }

    println!("Trend (E / S / G):");
    for point in &report.trend {
        println!(
            "  {} {:>3} / {:>3} / {:>3}",
            point.month, point.environmental, point.social, point.governance
        );
    }
}
