//! Markdown report rendering
//!
//! Pure string transformation; the binary decides where the result is
//! written.

use crate::coverage::CoverageReport;

/// Badge image reference embedded at the top of every report unless
/// overridden by config or CLI
pub const DEFAULT_BADGE_URL: &str = "https://ckuhtz.github.io/fissure/coverage.svg";

/// Render a coverage report as a Markdown summary: badge line, heading
/// with the overall percentage, then one table row per file in report
/// order. Cell content is emitted literally, without Markdown escaping.
pub fn render_markdown(report: &CoverageReport, badge_url: &str) -> String {
    let mut lines = vec![
        "| File | Stmts | Miss | Cover |".to_string(),
        "|------|-------|------|--------|".to_string(),
    ];

    for file in &report.files {
        lines.push(format!(
            "| `{}` | {} | {} | {:.1}% |",
            file.filename,
            file.stmts_total,
            file.stmts_missed,
            file.percent()
        ));
    }

    format!(
        "![Coverage]({})\n\n### 🧪 Test Coverage Report\n> Total: **{:.1}%**\n\n{}\n",
        badge_url,
        report.overall_percent(),
        lines.join("\n")
    )
}
