//! Summary-attribute schema parser
//!
//! Per-class lines-valid / lines-missed counts, overall coverage from the
//! root line-rate fraction.

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::{parse_rate, require_attr, CoverageReport, FileCoverage};

/// Parse a coverage document whose classes carry summary count attributes
pub fn parse_summary(content: &str) -> Result<CoverageReport> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut overall_rate: Option<f64> = None;
    let mut files: Vec<FileCoverage> = Vec::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"coverage" => {
                    overall_rate = Some(parse_rate(&require_attr(e, "line-rate")?)?);
                }
                b"class" => {
                    let filename = require_attr(e, "filename")?;
                    let total: u32 = parse_count(&filename, "lines-valid", &require_attr(e, "lines-valid")?)?;
                    let missed: u32 = parse_count(&filename, "lines-missed", &require_attr(e, "lines-missed")?)?;

                    if missed > total {
                        anyhow::bail!(
                            "{}: lines-missed {} exceeds lines-valid {}",
                            filename,
                            missed,
                            total
                        );
                    }

                    files.push(FileCoverage {
                        filename,
                        stmts_total: total,
                        stmts_missed: missed,
                    });
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing coverage XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    let overall_rate =
        overall_rate.ok_or_else(|| anyhow::anyhow!("Document has no <coverage> root element"))?;

    Ok(CoverageReport {
        overall_rate,
        files,
    })
}

fn parse_count(filename: &str, attr: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("{}: {} is not numeric: {:?}", filename, attr, value))
}
