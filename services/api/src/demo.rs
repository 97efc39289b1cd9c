use crate::assessment::render_report;
use crate::infra::{parse_date, InMemoryReportRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use esgen::config::AppConfig;
use esgen::error::AppError;
use esgen::workflows::assessment::{AssessmentService, QuestionId, SessionMode};
use esgen::workflows::reports::{
    AuthorId, PaymentReceipt, PaymentStatus, ReportForm, ReportService,
};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the trend series (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Stop after scoring, skipping the report lifecycle
    #[arg(long)]
    pub(crate) skip_report: bool,
}

/// Scripted answers for the fixed flow, in question order.
fn scripted_answers() -> Vec<(QuestionId, Value)> {
    vec![
        (QuestionId(1), json!("Harbour Logistics Ltd")),
        (QuestionId(2), json!("Large (251-1000 employees)")),
        (QuestionId(3), json!("Manufacturing")),
        (QuestionId(4), json!("Hong Kong")),
        (
            QuestionId(5),
            json!("Regional contract manufacturer of packaging materials."),
        ),
        (QuestionId(6), json!("Yes, partially implemented")),
        (
            QuestionId(7),
            json!([
                "GRI (Global Reporting Initiative)",
                "ISSB (International Sustainability Standards Board)"
            ]),
        ),
        (QuestionId(8), json!(6)),
        (
            QuestionId(9),
            json!([
                "Energy efficiency measures",
                "Waste reduction programs",
                "Employee wellbeing initiatives"
            ]),
        ),
        (
            QuestionId(10),
            json!(["Climate Change", "Occupational Health & Safety"]),
        ),
        (
            QuestionId(11),
            json!("Cut scope 2 emissions by 20% and publish a first GRI report."),
        ),
        (
            QuestionId(12),
            json!(["Lack of expertise", "Data collection and reporting"]),
        ),
        (QuestionId(13), json!("Very important")),
        (QuestionId(14), json!("2025")),
        (
            QuestionId(15),
            json!("Scope 1: 820 tCO2e, Scope 2: 2,140 tCO2e"),
        ),
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, skip_report } = args;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let config = AppConfig::load()?;

    println!("ESG assessment demo");
    let service = AssessmentService::new(config.assessment.counts);
    let mut session = service.session();
    session.start_assessment();
    if let Err(err) = session.begin_questionnaire() {
        println!("  Session unavailable: {err}");
        return Ok(());
    }

    for (id, answer) in scripted_answers() {
        let progress = session.progress();
        let prompt = session
            .current_question()
            .map(|question| question.prompt)
            .unwrap_or_default();
        println!("- [{:>3}%] {id} {prompt}", progress.percent);
        if let Err(err) = session.answer(&answer) {
            println!("  Answer rejected: {err}");
            return Ok(());
        }
        if let Err(err) = session.next() {
            println!("  Cannot continue: {err}");
            return Ok(());
        }
    }

    if session.mode() != SessionMode::Report {
        println!("  Questionnaire did not complete");
        return Ok(());
    }

    let report = match session.report(as_of) {
        Ok(report) => report,
        Err(err) => {
            println!("  Report unavailable: {err}");
            return Ok(());
        }
    };
    println!();
    render_report(&report);

    if skip_report {
        return Ok(());
    }

    println!("\nReport lifecycle demo");
    let pricing = config.billing.pricing();
    let reports = Arc::new(ReportService::new(
        Arc::new(InMemoryReportRepository::default()),
        pricing.clone(),
    ));
    let author = AuthorId("demo-user".to_string());
    let form = ReportForm::from_answers(session.answers());
    let draft = match reports.create_draft(author.clone(), form) {
        Ok(draft) => draft,
        Err(err) => {
            println!("  Draft rejected: {err}");
            return Ok(());
        }
    };
    println!("- Draft {} \"{}\"", draft.id.0, draft.title);
    println!(
        "  Emissions: scope 1 {} | scope 2 {} | scope 3 {}",
        draft.scope1_emissions.as_deref().unwrap_or("n/a"),
        draft.scope2_emissions.as_deref().unwrap_or("n/a"),
        draft.scope3_emissions.as_deref().unwrap_or("n/a")
    );

    let preview = format!(
        "{} scored {} overall ({}).",
        report.profile.display_name(),
        report.scores.overall,
        report.statuses.overall.label()
    );
    let mut current = reports.attach_preview(&draft.id, preview)?;
    println!("- Preview attached -> status {}", current.status.label());

    if current.payment_required {
        let receipt = PaymentReceipt {
            transaction_id: Some("demo-txn-0001".to_string()),
            amount: pricing.amount,
            currency: pricing.currency.clone(),
            status: PaymentStatus::Completed,
            method: "card".to_string(),
        };
        current = reports.record_payment(&draft.id, receipt)?;
        println!(
            "- Payment of {:.2} {} recorded -> status {}",
            current.payment_amount,
            current.currency,
            current.status.label()
        );
    }

    let full_content = format!(
        "{preview_title}\n\n{count} recommendation(s) issued.",
        preview_title = current.title,
        count = report.recommendations.len()
    );
    current = reports.complete(
        &draft.id,
        full_content,
        Some(format!("reports/{}.pdf", draft.id.0)),
    )?;
    println!(
        "- Completed -> status {} ({} report(s) on file for {})",
        current.status.label(),
        reports.list_for_author(&author)?.len(),
        author.0
    );

    Ok(())
}
