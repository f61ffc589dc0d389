//! Renderers for each report format.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::models::ComplianceReport;

use super::{ReportError, ReportFormat, ReportResult};

/// Render a report in the requested format.
///
/// The returned text always ends with a newline.
pub fn render(report: &ComplianceReport, format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Json => render_json(report),
        ReportFormat::Xml => render_xml(report),
        ReportFormat::Simple => Ok(render_simple(report)),
        ReportFormat::Text => Ok(render_text(report)),
    }
}

fn render_json(report: &ComplianceReport) -> ReportResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;

    let mut output = String::from_utf8(buf)?;
    output.push('\n');
    Ok(output)
}

fn render_xml(report: &ComplianceReport) -> ReportResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 1);

    let passed = report.passed.to_string();
    let adjustment = report.adjustment.to_string();
    let fields: [(&str, &str); 6] = [
        ("FileName", &report.file_name),
        ("PassedOrFailed", &passed),
        ("Loudness", &report.loudness),
        ("RecommendedAdjustment", &adjustment),
        ("RecommendedAdjustmentString", &report.adjustment_string),
        ("Standard", &report.standard),
    ];

    write_event(&mut writer, Event::Start(BytesStart::new("MediaFileLoudness")))?;
    for (name, value) in fields {
        write_event(&mut writer, Event::Start(BytesStart::new(name)))?;
        write_event(&mut writer, Event::Text(BytesText::new(value)))?;
        write_event(&mut writer, Event::End(BytesEnd::new(name)))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("MediaFileLoudness")))?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> ReportResult<()> {
    writer
        .write_event(event)
        .map_err(|e| ReportError::Xml(e.to_string()))
}

fn render_simple(report: &ComplianceReport) -> String {
    format!(
        "{}\nLoudness: {}\nAdjustment: {}\nPassed={}\n",
        report.file_name, report.loudness, report.adjustment_string, report.passed
    )
}

fn render_text(report: &ComplianceReport) -> String {
    let mut lines = vec![format!(
        "File checked to loudness standard:  {}",
        report.standard
    )];

    if report.passed {
        lines.push("FILE IS COMPLIANT TO STANDARD".to_string());
        lines.push(report.standard.clone());
        lines.push(format!("LOUDNESS: {} LUFS", report.loudness));
    } else {
        lines.push("FILE IS NOT COMPLIANT TO STANDARD".to_string());
        lines.push(format!("{} ", report.standard));
        lines.push(format!("LOUDNESS: {} LUFS", report.loudness));
        lines.push(format!("RECOMMENDED ADJUSTMENT: {}", report.adjustment_string));
        lines.push("IN ORDER TO ACHIEVE THE MEDIAN VALUE".to_string());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
