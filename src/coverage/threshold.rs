//! Coverage threshold validation

use colored::Colorize;

use super::CoverageReport;

/// Result of threshold validation
#[derive(Debug, Clone)]
pub struct ThresholdResult {
    pub passed: bool,
    pub coverage: f64,
    pub threshold: f64,
    pub delta: f64,
}

impl ThresholdResult {
    /// Print a one-line pass/fail summary to stderr, keeping stdout
    /// free for the report itself
    pub fn print_summary(&self) {
        let status = if self.passed { "✓".green() } else { "✗".red() };
        let delta_str = if self.delta >= 0.0 {
            format!("+{:.1}%", self.delta).green()
        } else {
            format!("{:.1}%", self.delta).red()
        };

        eprintln!(
            "  {} Line coverage: {:.1}% (threshold: {:.1}%, {})",
            status, self.coverage, self.threshold, delta_str
        );
    }
}

/// Validate overall coverage against a minimum percentage
pub fn validate_threshold(report: &CoverageReport, min_percent: f64) -> ThresholdResult {
    let coverage = report.overall_percent();

    ThresholdResult {
        passed: coverage >= min_percent,
        coverage,
        threshold: min_percent,
        delta: coverage - min_percent,
    }
}
