use crate::infra::{load_snapshot, DashboardQuery};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use talent_search::config::AppConfig;
use talent_search::error::AppError;
use talent_search::telemetry;
use talent_search::workflows::candidates::{CandidateRecord, CandidateSnapshot};
use talent_search::workflows::dashboard::{filter, sort, DashboardState, DashboardView};
use talent_search::workflows::intake::{self, HttpIntakeWebhook, IntakeForm};

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Read a local CSV export instead of fetching the sheet
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) query: DashboardQuery,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Read a local CSV export instead of fetching the sheet
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Destination CSV file
    #[arg(long)]
    pub(crate) out: PathBuf,
    #[command(flatten)]
    pub(crate) query: DashboardQuery,
}

#[derive(Args, Debug)]
pub(crate) struct IntakeSubmitArgs {
    /// JSON file holding the intake form (jobTitle, numberOfProfiles, batch, scoringScheme, jdDocument)
    #[arg(long)]
    pub(crate) form: PathBuf,
}

pub(crate) async fn run_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs { csv, query } = args;
    let state = query.to_state()?;
    let config = load_config()?;

    let snapshot = load_snapshot(csv, &config.sources).await?;
    let view = state.render(&snapshot.records);
    render_table(&snapshot, &view);
    Ok(())
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs { csv, out, query } = args;
    let state = query.to_state()?;
    let config = load_config()?;

    let snapshot = load_snapshot(csv, &config.sources).await?;
    let ranked = ranked_records(&state, &snapshot.records);
    write_export(&out, &ranked)?;
    println!(
        "Exported {} of {} candidates to {}",
        ranked.len(),
        snapshot.len(),
        out.display()
    );
    Ok(())
}

pub(crate) async fn run_intake_submit(args: IntakeSubmitArgs) -> Result<(), AppError> {
    let form = read_form(&args.form).await?;
    let config = load_config()?;

    let webhook = HttpIntakeWebhook::new(
        config.sources.webhook_url.clone(),
        config.sources.fetch_timeout,
    )?;
    let receipt = intake::submit(&webhook, &form).await?;
    println!("Intake for '{}' accepted: {}", form.job_title, receipt.message);
    Ok(())
}

async fn read_form(path: &Path) -> Result<IntakeForm, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw).map_err(AppError::MalformedForm)
}

fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn ranked_records(state: &DashboardState, records: &[CandidateRecord]) -> Vec<CandidateRecord> {
    sort::sort(&filter::apply(records, &state.filter), state.sort)
}

fn render_table(snapshot: &CandidateSnapshot, view: &DashboardView) {
    let page = &view.page;
    println!(
        "Candidates ({}, fetched {})",
        snapshot.origin.label(),
        snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "- {} candidates | avg score {} | avg experience {} yrs",
        view.metrics.total_candidates,
        view.metrics.average_fitting_score,
        view.metrics.average_years_experience
    );

    if page.items.is_empty() {
        println!("No candidates match the current filters.");
        return;
    }

    println!(
        "Showing {} to {} of {} (page {} of {})",
        page.start_index, page.end_index, page.total_items, page.page_index, page.total_pages
    );
    println!(
        "{:>4}  {:>5}  {:>4}  {:<13}  {:<24}  {}",
        "#", "Score", "Exp", "Qualification", "Name", "Role"
    );
    for row in &page.items {
        println!(
            "{:>4}  {:>5}  {:>4}  {:<13}  {:<24}  {} @ {} ({})",
            row.rank,
            row.fitting_score,
            row.years_experience,
            row.qualification_label,
            row.name,
            row.current_job_title,
            row.current_company,
            row.industry
        );
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Current Company")]
    company: &'a str,
    #[serde(rename = "Industry")]
    industry: &'a str,
    #[serde(rename = "Fitting Score")]
    fitting_score: i32,
    #[serde(rename = "Experience")]
    years_experience: u32,
    #[serde(rename = "Qualification")]
    qualification: &'static str,
    #[serde(rename = "Key Skills")]
    key_skills: &'a str,
    #[serde(rename = "LinkedIn URL")]
    linkedin_url: &'a str,
    #[serde(rename = "LinkedIn Snippet")]
    linkedin_snippet: &'a str,
}

impl<'a> From<&'a CandidateRecord> for ExportRow<'a> {
    fn from(record: &'a CandidateRecord) -> Self {
        Self {
            name: &record.name,
            title: &record.current_job_title,
            company: &record.current_company,
            industry: &record.industry,
            fitting_score: record.fitting_score,
            years_experience: record.years_experience,
            qualification: record.qualification.label(),
            key_skills: &record.key_skills,
            linkedin_url: &record.linkedin_url,
            linkedin_snippet: &record.linkedin_snippet,
        }
    }
}

fn write_export(path: &Path, records: &[CandidateRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
