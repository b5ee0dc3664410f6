//! Coverage module
//!
//! Provides:
//! - Summary-attribute XML parsing (lines-valid/lines-missed counts)
//! - Per-line hit record XML parsing
//! - Threshold validation

mod detail;
mod summary;
mod threshold;

pub use detail::*;
pub use summary::*;
pub use threshold::*;

use anyhow::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parsed coverage report
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    /// Overall covered fraction in [0, 1]
    pub overall_rate: f64,
    /// Per-file coverage, in document order
    pub files: Vec<FileCoverage>,
}

impl CoverageReport {
    pub fn overall_percent(&self) -> f64 {
        self.overall_rate * 100.0
    }
}

/// Coverage counts for a single file
#[derive(Debug, Clone)]
pub struct FileCoverage {
    pub filename: String,
    pub stmts_total: u32,
    pub stmts_missed: u32,
}

impl FileCoverage {
    /// Covered percentage in [0, 100]; a file with no countable
    /// statements reports 0.0 rather than 100.0
    pub fn percent(&self) -> f64 {
        if self.stmts_total == 0 {
            return 0.0;
        }
        ((self.stmts_total - self.stmts_missed) as f64 / self.stmts_total as f64) * 100.0
    }
}

/// Schema variant of a coverage document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Per-class lines-valid / lines-missed attributes
    Summary,
    /// Nested `<line hits="..."/>` records per class
    Detail,
}

/// Parse a coverage report, selecting the schema variant by inspecting
/// the document structure
pub fn parse_report(content: &str) -> Result<CoverageReport> {
    match detect_variant(content)? {
        Variant::Summary => parse_summary(content),
        Variant::Detail => parse_detail(content),
    }
}

/// Decide which schema variant a document uses.
///
/// Any `<class>` element carrying a `lines-valid` attribute marks the
/// summary variant; otherwise totals must be derived from line records.
pub fn detect_variant(content: &str) -> Result<Variant> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut saw_coverage = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"coverage" => saw_coverage = true,
                b"class" => {
                    for attr in e.attributes().filter_map(|a| a.ok()) {
                        if attr.key.as_ref() == b"lines-valid" {
                            return Ok(Variant::Summary);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing coverage XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    if !saw_coverage {
        anyhow::bail!("Document has no <coverage> root element");
    }

    Ok(Variant::Detail)
}

/// Extract a required attribute from an element
pub(crate) fn require_attr(e: &BytesStart<'_>, name: &str) -> Result<String> {
    match opt_attr(e, name) {
        Some(value) => Ok(value),
        None => anyhow::bail!(
            "<{}> element is missing the {} attribute",
            String::from_utf8_lossy(e.name().as_ref()),
            name
        ),
    }
}

/// Extract an optional attribute from an element
pub(crate) fn opt_attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

/// Parse the root line-rate fraction, rejecting values outside [0, 1]
pub(crate) fn parse_rate(value: &str) -> Result<f64> {
    let rate: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("line-rate is not numeric: {:?}", value))?;
    if !(0.0..=1.0).contains(&rate) {
        anyhow::bail!("line-rate {} is outside [0, 1]", rate);
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_XML: &str = r#"<?xml version="1.0"?>
<coverage line-rate="0.9">
    <packages>
        <package name="src">
            <classes>
                <class name="main" filename="src/main.py" lines-valid="10" lines-missed="1"/>
            </classes>
        </package>
    </packages>
</coverage>"#;

    const DETAIL_XML: &str = r#"<?xml version="1.0"?>
<coverage line-rate="0.9">
    <packages>
        <package name="src">
            <classes>
                <class name="main" filename="src/main.py">
                    <lines>
                        <line number="1" hits="1"/>
                        <line number="2" hits="0"/>
                    </lines>
                </class>
            </classes>
        </package>
    </packages>
</coverage>"#;

    #[test]
    fn test_detect_summary_variant() {
        assert_eq!(detect_variant(SUMMARY_XML).unwrap(), Variant::Summary);
    }

    #[test]
    fn test_detect_detail_variant() {
        assert_eq!(detect_variant(DETAIL_XML).unwrap(), Variant::Detail);
    }

    #[test]
    fn test_detect_rejects_non_coverage_document() {
        let result = detect_variant("<report><class filename=\"a.py\"/></report>");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_report_dispatches_on_variant() {
        let from_summary = parse_report(SUMMARY_XML).unwrap();
        let from_detail = parse_report(DETAIL_XML).unwrap();

        assert_eq!(from_summary.files.len(), 1);
        assert_eq!(from_detail.files.len(), 1);
        assert_eq!(from_summary.files[0].stmts_total, 10);
        assert_eq!(from_detail.files[0].stmts_total, 2);
    }

    #[test]
    fn test_percent_is_zero_for_empty_file() {
        let file = FileCoverage {
            filename: "empty.py".to_string(),
            stmts_total: 0,
            stmts_missed: 0,
        };
        assert_eq!(file.percent(), 0.0);
    }

    #[test]
    fn test_percent_bounds() {
        let full = FileCoverage {
            filename: "full.py".to_string(),
            stmts_total: 10,
            stmts_missed: 0,
        };
        let none = FileCoverage {
            filename: "none.py".to_string(),
            stmts_total: 10,
            stmts_missed: 10,
        };
        assert!((full.percent() - 100.0).abs() < f64::EPSILON);
        assert_eq!(none.percent(), 0.0);
    }
}
