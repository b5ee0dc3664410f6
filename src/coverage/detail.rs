//! Per-line hit record schema parser
//!
//! Counts nested `<line hits="..."/>` records under each class. The root
//! line-rate attribute is optional in this variant; a document without one
//! reports an overall rate of 0.

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::{opt_attr, parse_rate, require_attr, CoverageReport, FileCoverage};

/// Parse a coverage document whose classes contain per-line hit records
pub fn parse_detail(content: &str) -> Result<CoverageReport> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut overall_rate = 0.0f64;
    let mut files: Vec<FileCoverage> = Vec::new();

    let mut current_file: Option<String> = None;
    let mut lines_total = 0u32;
    let mut lines_missed = 0u32;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"coverage" => {
                    if let Some(rate) = opt_attr(e, "line-rate") {
                        overall_rate = parse_rate(&rate)?;
                    }
                }
                b"class" => {
                    current_file = Some(require_attr(e, "filename")?);
                    lines_total = 0;
                    lines_missed = 0;
                }
                b"line" => {
                    if let Some(ref filename) = current_file {
                        let hits: u64 = parse_hits(filename, &require_attr(e, "hits")?)?;
                        lines_total += 1;
                        if hits == 0 {
                            lines_missed += 1;
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"coverage" => {
                    if let Some(rate) = opt_attr(e, "line-rate") {
                        overall_rate = parse_rate(&rate)?;
                    }
                }
                b"class" => {
                    // Self-closing class = file with no line records
                    files.push(FileCoverage {
                        filename: require_attr(e, "filename")?,
                        stmts_total: 0,
                        stmts_missed: 0,
                    });
                }
                b"line" => {
                    if let Some(ref filename) = current_file {
                        let hits: u64 = parse_hits(filename, &require_attr(e, "hits")?)?;
                        lines_total += 1;
                        if hits == 0 {
                            lines_missed += 1;
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"class" {
                    if let Some(filename) = current_file.take() {
                        files.push(FileCoverage {
                            filename,
                            stmts_total: lines_total,
                            stmts_missed: lines_missed,
                        });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing coverage XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(CoverageReport {
        overall_rate,
        files,
    })
}

fn parse_hits(filename: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("{}: hits is not numeric: {:?}", filename, value))
}
