//! Covmark - Coverage Markdown Reporter
//!
//! A library for turning coverage XML reports into Markdown summaries with:
//! - Summary-attribute and per-line-hit schema variants behind one parser
//! - Badge reference and per-file coverage table rendering
//! - Threshold validation for CI gates
//! - Optional TOML configuration with CLI overrides

pub mod config;
pub mod coverage;
pub mod markdown;

pub use config::Config;
pub use coverage::{detect_variant, parse_report, CoverageReport, FileCoverage, Variant};
pub use markdown::{render_markdown, DEFAULT_BADGE_URL};
