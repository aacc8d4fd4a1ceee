//! Terminal output formatting
//!
//! Formatting helpers for the metrics block, the history/forecast chart, and
//! the results table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ForecastPoint, MonthlyPoint};
use crate::reports::ForecastReport;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The headline metrics block
pub fn render_metrics(report: &ForecastReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Average Monthly Sales   {}\n",
        report.average_monthly_sales.format_rounded()
    ));
    out.push_str(&format!(
        "Latest Month ({})   {}\n",
        report.latest.month,
        report.latest.total_sales.format_rounded()
    ));
    match report.accuracy {
        Some(summary) => out.push_str(&format!(
            "Model Accuracy          {} (MAPE {})\n",
            format_percentage(summary.accuracy),
            format_percentage(summary.mape)
        )),
        None => out.push_str("Model Accuracy          n/a\n"),
    }
    out.push_str(&format!(
        "Projected Total         {}\n",
        report.projected_total.format_rounded()
    ));
    if let Some(yoy) = report.yoy_growth {
        out.push_str(&format!(
            "Year-over-Year Growth   {}\n",
            format_percentage(yoy)
        ));
    }

    out
}

const CHART_WIDTH: usize = 30;

/// Bar chart of the monthly history followed by the forecast window
pub fn render_chart(history: &[MonthlyPoint], window: &[ForecastPoint]) -> String {
    let max_value = history
        .iter()
        .map(|p| p.total_sales.to_dollars())
        .chain(window.iter().map(|p| p.upper.to_dollars()))
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for point in history {
        let value = point.total_sales.to_dollars();
        out.push_str(&format!(
            "{}  {}  {}\n",
            point.month,
            format_bar(value, max_value, CHART_WIDTH),
            point.total_sales.format_rounded()
        ));
    }

    out.push_str(&format!("{}  forecast\n", "─".repeat(CHART_WIDTH + 9)));
    for point in window {
        out.push_str(&format!(
            "{}  {}  {} ({} – {})\n",
            point.month,
            format_bar(point.estimate.to_dollars(), max_value, CHART_WIDTH),
            point.estimate.format_rounded(),
            point.lower.format_rounded(),
            point.upper.format_rounded()
        ));
    }

    out
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Forecast")]
    forecast: String,
    #[tabled(rename = "Lower Bound")]
    lower: String,
    #[tabled(rename = "Upper Bound")]
    upper: String,
}

/// The forecast window as a bordered table
pub fn render_window_table(window: &[ForecastPoint]) -> String {
    let rows: Vec<WindowRow> = window
        .iter()
        .map(|p| WindowRow {
            month: p.month.to_string(),
            forecast: p.estimate.format_rounded(),
            lower: p.lower.format_rounded(),
            upper: p.upper.format_rounded(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
