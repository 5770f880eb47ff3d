//! Fixed-layout SVG badge for a [`ServiceInfo`].

use crate::service::{ServiceInfo, Standing};
use chrono::{Datelike, NaiveDate};
use std::fmt::{self, Write};

pub const BADGE_WIDTH: u32 = 400;
pub const BADGE_HEIGHT: u32 = 190;
const TOTAL_BAR_WIDTH: f64 = 360.0;
const MILESTONE_BAR_WIDTH: f64 = 170.0;

#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("failed to format badge markup: {0}")]
    Format(#[from] fmt::Error),
}

/// `2025년 07월 01일`
pub fn format_date_korean(date: NaiveDate) -> String {
    format!("{}년 {:02}월 {:02}일", date.year(), date.month(), date.day())
}

/// `2025.07.01`
pub fn format_date_dots(date: NaiveDate) -> String {
    date.format("%Y.%m.%d").to_string()
}

fn bar_width(progress: f64, full: f64) -> f64 {
    progress / 100.0 * full
}

fn header_label(info: &ServiceInfo) -> String {
    match (&info.current_rank, &info.current_pay_grade) {
        (Standing::Serving(rank), Standing::Serving(pay_grade)) => {
            format!("{} {}", rank.name(), pay_grade.grade_label())
        }
        _ => info.current_rank.label(),
    }
}

const STYLE: &str = r#"  <style>
    .font { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Pretendard', Roboto, Helvetica, Arial, sans-serif; }
    .bg-main { fill: #3A3635; }
    .bg-header { fill: #2C2A29; }
    .text-light { fill: #EAEAEA; font-weight: 600; font-size: 14px; }
    .text-dday { fill: #EAEAEA; font-weight: 600; font-size: 16px; }
    .text-gray { fill: #B0B0B0; font-size: 12px; }
    .text-percent { fill: #B0B0B0; font-size: 11px; }
    .text-title { fill: #EAEAEA; font-weight: 600; font-size: 14px; }
    .text-date { fill: #EAEAEA; font-size: 13px; }
    .progress-bg { fill: #4A4645; }
    .progress-fg { fill: #82C8BD; }
    .icon { fill: #82C8BD; }
    svg { background: #f0f0f0; }
    @media (prefers-color-scheme: dark) {
      svg { background: #131010; }
    }
  </style>
"#;

const ICON_PATH: &str = "M10.7071 2.29289C11.0976 1.90237 11.7308 1.90237 12.1213 2.29289L16.4142 6.58579C16.7893 6.96086 17 7.46957 17 8V15C17 16.1046 16.1046 17 15 17H8C6.89543 17 6 16.1046 6 15V8C6 7.46957 6.21071 6.96086 6.58579 6.58579L10.7071 2.29289Z";

fn write_milestone(
    out: &mut String,
    x: u32,
    title: &str,
    date: NaiveDate,
    name: &str,
    progress: f64,
) -> fmt::Result {
    writeln!(out, r#"  <g class="font" transform="translate({x}, 125)">"#)?;
    writeln!(out, r#"    <text class="text-gray">{title}</text>"#)?;
    writeln!(
        out,
        r#"    <text x="170" y="0" text-anchor="end" class="text-gray">{}</text>"#,
        format_date_dots(date)
    )?;
    writeln!(out, r#"    <text y="20" class="text-light">{name}</text>"#)?;
    writeln!(
        out,
        r#"    <rect y="30" width="170" height="4" rx="2" class="progress-bg" />"#
    )?;
    writeln!(
        out,
        r#"    <rect y="30" width="{}" height="4" rx="2" class="progress-fg" />"#,
        bar_width(progress, MILESTONE_BAR_WIDTH)
    )?;
    writeln!(out, r#"    <text y="50" class="text-percent">{progress:.5}%</text>"#)?;
    writeln!(out, "  </g>")
}

/// Renders the badge markup.
pub fn render_badge(info: &ServiceInfo) -> Result<String, BadgeError> {
    let mut out = String::with_capacity(4096);

    writeln!(
        out,
        r#"<svg width="{BADGE_WIDTH}" height="{BADGE_HEIGHT}" viewBox="0 0 {BADGE_WIDTH} {BADGE_HEIGHT}" fill="none" xmlns="http://www.w3.org/2000/svg">"#
    )?;
    out.push_str(STYLE);
    writeln!(
        out,
        r#"  <rect width="{BADGE_WIDTH}" height="{BADGE_HEIGHT}" rx="8" class="bg-main"/>"#
    )?;
    writeln!(
        out,
        r#"  <rect width="{BADGE_WIDTH}" height="40" rx="8" ry="8" class="bg-header" />"#
    )?;

    writeln!(out, r#"  <g class="font" transform="translate(20, 25)">"#)?;
    writeln!(
        out,
        r#"    <path class="icon" d="{ICON_PATH}" transform="translate(-5, -14) scale(0.9)"/>"#
    )?;
    writeln!(out, r#"    <text x="20" y="0" class="text-dday">D{}</text>"#, info.d_day)?;
    writeln!(
        out,
        r#"    <text x="360" y="0" text-anchor="end" class="text-light">{}</text>"#,
        header_label(info)
    )?;
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="font" transform="translate(20, 65)">"#)?;
    writeln!(out, r#"    <text class="text-title">전역</text>"#)?;
    writeln!(
        out,
        r#"    <text x="360" y="0" text-anchor="end" class="text-date">{}</text>"#,
        format_date_korean(info.discharge_date)
    )?;
    writeln!(
        out,
        r#"    <rect y="10" width="360" height="6" rx="2" class="progress-bg" />"#
    )?;
    writeln!(
        out,
        r#"    <rect y="10" width="{}" height="6" rx="2" class="progress-fg" />"#,
        bar_width(info.total_progress, TOTAL_BAR_WIDTH)
    )?;
    writeln!(
        out,
        r#"    <text y="32" class="text-percent">{:.5}%</text>"#,
        info.total_progress
    )?;
    writeln!(out, "  </g>")?;

    write_milestone(
        &mut out,
        20,
        "다음 호봉",
        info.next_pay_grade.date,
        &info.next_pay_grade.target.full_label(),
        info.next_pay_grade.progress,
    )?;
    write_milestone(
        &mut out,
        210,
        "다음 계급",
        info.next_rank.date,
        &info.next_rank.target.label(),
        info.next_rank.progress,
    )?;

    out.push_str("</svg>\n");
    Ok(out)
}
