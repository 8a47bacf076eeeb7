//! Report rendering for terminal, Markdown, and JSON output.

use colored::Colorize;
use stackcheck_core::{ArtifactReport, OverallReport};
use std::fmt::Write;

const BAR_CELLS: u32 = 20;
const ALMOST_THERE: u32 = 80;
const RULE_WIDTH: usize = 60;

/// Render the report for a terminal, with colors when enabled.
pub(crate) fn render_text(report: &OverallReport) -> String {
    let mut output = render_header();
    let _ = writeln!(
        output,
        "  {}\n",
        "Checking your monitoring stack...".bold()
    );

    for artifact in report.artifacts() {
        append_artifact_text(&mut output, artifact);
    }

    let percentage = report.percentage();
    let bar = progress_bar(percentage);
    let bar = if percentage >= ALMOST_THERE {
        bar.as_str().green()
    } else {
        bar.as_str().yellow()
    };
    let _ = writeln!(output, "  {}", "Score:".bold());
    let _ = writeln!(
        output,
        "  {bar} {}/{} points ({percentage}%)",
        report.total_earned(),
        report.total_max()
    );

    if report.complete() {
        let _ = writeln!(output, "\n  {}", "🎉 All configs complete!".green().bold());
        let _ = writeln!(
            output,
            "  {}",
            "Run 'stackcheck start' to launch the stack!".cyan()
        );
    } else if percentage >= ALMOST_THERE {
        let _ = writeln!(
            output,
            "\n  {}",
            "Almost there! Check the items marked with ✗".green()
        );
    } else {
        let _ = writeln!(
            output,
            "\n  {}",
            "Keep going! See README.md for guidance.".cyan()
        );
    }
    let _ = writeln!(output);
    output
}

/// Render the report as Markdown.
pub(crate) fn render_markdown(report: &OverallReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# StackCheck Report\n");
    let _ = writeln!(
        output,
        "- Score: {}/{} points ({}%)",
        report.total_earned(),
        report.total_max(),
        report.percentage()
    );
    let status = if report.complete() {
        "complete"
    } else {
        "incomplete"
    };
    let _ = writeln!(output, "- Status: {status}\n");

    for artifact in report.artifacts() {
        let _ = writeln!(
            output,
            "## {} ({}/{})\n",
            artifact.display_name(),
            artifact.points_earned(),
            artifact.points_max()
        );
        for check in artifact.checks() {
            let mark = if check.passed { "x" } else { " " };
            if check.detail.is_empty() {
                let _ = writeln!(output, "- [{mark}] {}", check.name);
            } else {
                let _ = writeln!(output, "- [{mark}] {}: {}", check.name, check.detail);
            }
        }
        let _ = writeln!(output);
    }
    output
}

/// Render the report as pretty-printed JSON, newline terminated.
pub(crate) fn render_json(report: &OverallReport) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

/// Message printed after the stack starts.
pub(crate) fn render_stack_started() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "\n  {}", "✅ Stack started!".green());
    let _ = writeln!(output, "\n  {}", "Access the UIs:".cyan());
    let _ = writeln!(output, "  • Grafana:      http://localhost:3000 (admin/admin)");
    let _ = writeln!(output, "  • Prometheus:   http://localhost:9090");
    let _ = writeln!(output, "  • App:          http://localhost:5000");
    let _ = writeln!(output, "  • Alertmanager: http://localhost:9093");
    let _ = writeln!(output);
    output
}

/// Message printed after the stack stops.
pub(crate) fn render_stack_stopped() -> String {
    format!("\n  {}\n\n", "✅ Stack stopped".green())
}

/// Fixed-width bar with one cell per five percent.
pub(crate) fn progress_bar(percentage: u32) -> String {
    let filled = percentage.min(100) / (100 / BAR_CELLS);
    let empty = BAR_CELLS - filled;
    format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat(empty as usize)
    )
}

fn render_header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();
    let _ = writeln!(output, "\n{}", rule.as_str().cyan());
    let _ = writeln!(
        output,
        "{}",
        "  📊 Monitoring Stack Challenge".cyan().bold()
    );
    let _ = writeln!(output, "{}\n", rule.as_str().cyan());
    output
}

fn append_artifact_text(output: &mut String, artifact: &ArtifactReport) {
    let icon = if artifact.is_full() {
        "✅".green()
    } else {
        "⏳".yellow()
    };
    let _ = writeln!(
        output,
        "  {icon} {} ({}/{} points)",
        artifact.display_name().bold(),
        artifact.points_earned(),
        artifact.points_max()
    );
    for check in artifact.checks() {
        let mark = if check.passed { "✓".green() } else { "✗".red() };
        if check.detail.is_empty() {
            let _ = writeln!(output, "      {mark} {}", check.name);
        } else {
            let _ = writeln!(output, "      {mark} {} - {}", check.name, check.detail);
        }
    }
    let _ = writeln!(output);
}
