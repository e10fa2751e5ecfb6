//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::stats::{OffsetHistogram, Tendency};

use super::AnalysisReport;

/// Format a report as a boxed, colored block for terminal display.
pub fn format_report_console(report: &AnalysisReport) -> String {
    let mut output = String::new();

    let title = match &report.chart_name {
        Some(chart) => format!("  {} [{}]", report.replay_name.bold(), chart),
        None => format!("  {}", report.replay_name.bold()),
    };
    let border_width = (report.replay_name.len()
        + report.chart_name.as_ref().map_or(0, |c| c.len() + 3)
        + 4)
    .max(50);
    let border = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  MODS     : {}  (OD {}, miss window +/-{:.2} ms)",
        report.mods, report.difficulty, report.window.window_50_ms
    );
    if report.calibration_offset_ms != 0 {
        let _ = writeln!(
            output,
            "  OFFSET   : {} ms applied to replay times",
            report.calibration_offset_ms
        );
    }
    let _ = writeln!(
        output,
        "  MATCHED  : {} / {} inputs  (missed {}, skipped {})",
        report.record.matched_count,
        report.event_count,
        report.record.misses.total(),
        report.record.skipped_count
    );

    match &report.summary {
        Some(summary) => {
            let _ = writeln!(output, "  AVERAGE  : {:+.2} ms", summary.mean_offset_ms);
            let _ = writeln!(output, "  STDEV    : {:.2} ms", summary.stdev_offset_ms);
            let _ = writeln!(output, "  UR       : {:.2}", summary.unstable_rate);
            let _ = writeln!(
                output,
                "  TENDENCY : Hitting {}",
                format_colored_tendency(summary.tendency)
            );
        }
        None => {
            let _ = writeln!(
                output,
                "  {}",
                "Could not calculate average hit offset (no hits correlated)".yellow()
            );
        }
    }
    let _ = write!(output, "{}", border_dim);

    output
}

pub fn format_colored_tendency(tendency: Tendency) -> String {
    match tendency {
        Tendency::Early => tendency.label().cyan().to_string(),
        Tendency::OnTime => tendency.label().green().to_string(),
        Tendency::Late => tendency.label().red().to_string(),
    }
}

/// Render a histogram as horizontal bars scaled to `width` columns.
pub fn format_histogram_console(histogram: &OffsetHistogram, width: usize) -> String {
    let mut output = String::new();
    let peak = histogram.peak().map_or(0, |b| b.count);
    if peak == 0 {
        return output;
    }

    for bucket in &histogram.buckets {
        let bar_len = (bucket.count * width).div_ceil(peak);
        let _ = writeln!(
            output,
            "  {:>+8.1} ms | {} {}",
            bucket.lower_ms,
            "█".repeat(bar_len),
            bucket.count.dimmed()
        );
    }

    output
}
