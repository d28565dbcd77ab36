use crate::infra::InMemoryCheckInRepository;
use chrono::{Duration, Utc};
use clap::Args;
use safespace::assessment::{parse_ordered_answers, AssessmentAnswers, AssessmentReport};
use safespace::checkin::{evaluate_check_in, wellbeing_profile, CheckInReport, CheckInResponses};
use safespace::config::{AppConfig, HistoryConfig};
use safespace::error::AppError;
use safespace::history::{CheckInCsvImporter, CheckInHistoryService, HistoryTrend};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckInEvaluateArgs {
    /// Mood rating, 1 (very low) to 5 (very good)
    #[arg(long)]
    pub(crate) mood: Option<String>,
    /// Anxiety rating, 1 (calm) to 5 (severe)
    #[arg(long)]
    pub(crate) anxiety: Option<String>,
    /// Sleep quality rating, 1 (poor) to 5 (excellent)
    #[arg(long)]
    pub(crate) sleep: Option<String>,
    /// Stress rating, 1 (relaxed) to 5 (overwhelmed)
    #[arg(long)]
    pub(crate) stress: Option<String>,
    /// Social connection rating, 1 (isolated) to 5 (connected)
    #[arg(long)]
    pub(crate) social: Option<String>,
    /// Activity engagement rating, 1 (none) to 5 (very engaged)
    #[arg(long)]
    pub(crate) activities: Option<String>,
    /// Free-text journal notes
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessmentScoreArgs {
    /// Twelve comma separated answers (0-4) in question order
    #[arg(long)]
    pub(crate) answers: String,
    /// Print the full recovery plan as well as the scores
    #[arg(long)]
    pub(crate) plan: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HistoryReportArgs {
    /// CSV export with id,timestamp,mood,anxiety,sleep,stress,social,activities,notes
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_check_in_evaluation(args: CheckInEvaluateArgs) {
    let json = args.json;
    let responses = CheckInResponses {
        mood: args.mood,
        anxiety: args.anxiety,
        sleep: args.sleep,
        stress: args.stress,
        social: args.social,
        activities: args.activities,
        notes: args.notes,
    };
    let report = evaluate_check_in(&responses);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report unavailable: {err}"),
        }
        return;
    }

    render_check_in(&responses, &report);
}

pub(crate) fn run_assessment_score(args: AssessmentScoreArgs) -> Result<(), AppError> {
    let answers = parse_ordered_answers(&args.answers)?;
    render_assessment(&AssessmentReport::build(&answers), args.plan);
    Ok(())
}

pub(crate) fn run_history_report(args: HistoryReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let records = CheckInCsvImporter::from_path(&args.csv)?;
    let service = history_service(config.history);
    let imported = service.import(records)?;

    println!("Imported {} check-ins from {}", imported, args.csv.display());
    render_trend(&service.trend()?);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("SafeSpace demo");

    println!("\nCheck-in evaluation");
    let responses = CheckInResponses {
        mood: Some("2".to_string()),
        anxiety: Some("4".to_string()),
        sleep: Some("2".to_string()),
        stress: Some("4".to_string()),
        social: Some("3".to_string()),
        activities: Some("3".to_string()),
        notes: Some("Exhausted after a long week at work".to_string()),
    };
    render_check_in(&responses, &evaluate_check_in(&responses));

    println!("\nStress assessment");
    let answers = AssessmentAnswers::from_ordered([4, 3, 4, 3, 2, 3, 2, 2, 1, 2, 1, 2]);
    render_assessment(&AssessmentReport::build(&answers), false);

    println!("\nHistory trend (last five days)");
    let service = history_service(HistoryConfig::default());
    let now = Utc::now();
    for (days_ago, mood) in [(4, "2"), (3, "3"), (2, "3"), (1, "4"), (0, "5")] {
        let mut day = responses.clone();
        day.mood = Some(mood.to_string());
        service.record_at(day, now - Duration::days(days_ago))?;
    }
    render_trend(&service.trend()?);

    Ok(())
}

fn history_service(config: HistoryConfig) -> CheckInHistoryService<InMemoryCheckInRepository> {
    CheckInHistoryService::new(Arc::new(InMemoryCheckInRepository::default()), config)
}

fn render_check_in(responses: &CheckInResponses, report: &CheckInReport) {
    let profile = wellbeing_profile(&responses.scores());
    println!("- Wellbeing score {}/100", profile.overall_score);
    for dimension in &profile.dimensions {
        println!(
            "  - {}: {}/{}",
            dimension.label, dimension.score, dimension.full_mark
        );
    }

    println!("Insights:");
    for paragraph in report.insights.split("\n\n") {
        println!("  {paragraph}");
    }

    println!("Recommended resources:");
    for resource in &report.resources {
        println!("  - {} ({})", resource.title, resource.kind);
        println!("    {}", resource.description);
        for tip in resource.tips {
            println!("    * {tip}");
        }
    }
}

fn render_assessment(report: &AssessmentReport, include_plan: bool) {
    let AssessmentReport {
        result,
        summary,
        recovery_plan,
    } = report;

    println!("- {} ({})", summary.title, result.overall);
    println!("  {}", summary.message);
    println!(
        "  Academic {}% | Emotional {}% | Social {}% | average {:.2}",
        result.scores.academic,
        result.scores.emotional,
        result.scores.social,
        result.overall_average
    );
    println!("  Focus: {}", summary.insight);

    if include_plan {
        println!("{}", recovery_plan.render_text());
    } else if let Some(first) = recovery_plan.steps.first() {
        println!("  Recovery plan starts with: Day {}: {}", first.day, first.action);
    }
}

fn render_trend(trend: &HistoryTrend) {
    if trend.points.is_empty() {
        println!("- No check-ins recorded yet");
        return;
    }

    println!(
        "- {} check-ins | latest {} | average {}",
        trend.total_check_ins, trend.latest_score, trend.average_score
    );
    if !trend.is_chartable() {
        println!("  Record at least two check-ins to see a trend");
    }
    for point in &trend.points {
        println!("  - {}: {}", point.date, point.score);
    }
}
