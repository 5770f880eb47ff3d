use crate::infra::parse_date;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, ValueEnum};
use discharge_counter::badge::render_badge;
use discharge_counter::clock::{Clock, SystemClock};
use discharge_counter::error::AppError;
use discharge_counter::resolver::resolve;
use discharge_counter::service::calendar::kst_midnight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// SVG badge markup
    #[default]
    Svg,
    /// Service progress as JSON
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct BadgeArgs {
    /// Enlistment date (YYYYMMDD or YYYY-MM-DD)
    #[arg(long)]
    pub(crate) startdate: String,
    /// Discharge date (YYYYMMDD or YYYY-MM-DD)
    #[arg(long)]
    pub(crate) enddate: Option<String>,
    /// Branch used to derive the discharge date: army, marines, navy or airforce
    #[arg(long)]
    pub(crate) branch: Option<String>,
    /// Evaluation date, read as KST midnight (defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_badge(args: BadgeArgs) -> Result<(), AppError> {
    let now = args.today.map_or_else(|| SystemClock.now(), kst_midnight);
    let output = render_output(&args, now)?;
    println!("{output}");
    Ok(())
}

fn render_output(args: &BadgeArgs, now: DateTime<Utc>) -> Result<String, AppError> {
    let period = resolve(
        Some(&args.startdate),
        args.enddate.as_deref(),
        args.branch.as_deref(),
    )?;
    let info = period.service_info(now);

    match args.format {
        OutputFormat::Svg => Ok(render_badge(&info)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&info.to_view())?),
    }
}
