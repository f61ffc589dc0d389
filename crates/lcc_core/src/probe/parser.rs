//! Best-effort parsing of ffprobe JSON.

use serde_json::{Map, Value};

use crate::models::{CodecType, FormatDescriptor, MediaProbeReport, StreamDescriptor, StreamTags};

/// Parse the probe tool's JSON output.
///
/// Never fails. Text that is not a JSON object yields an empty report;
/// individual fields that are missing or of the wrong type yield their
/// zero value.
pub fn parse_probe_report(text: &str) -> MediaProbeReport {
    let json: Value = match serde_json::from_str(text) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Probe output is not valid JSON, using empty report: {}", e);
            return MediaProbeReport::default();
        }
    };

    let Some(root) = json.as_object() else {
        tracing::warn!("Probe output root is not an object, using empty report");
        return MediaProbeReport::default();
    };

    let streams = root
        .get("streams")
        .and_then(|s| s.as_array())
        .map(|streams| streams.iter().map(parse_stream).collect())
        .unwrap_or_default();

    let format = root.get("format").map(parse_format).unwrap_or_default();

    let report = MediaProbeReport { streams, format };
    tracing::debug!(
        "Parsed probe report: {} streams ({} audio), format '{}'",
        report.streams.len(),
        report.audio_stream_count(),
        report.format.format_name
    );
    report
}

/// Parse one element of the `streams` array.
fn parse_stream(stream: &Value) -> StreamDescriptor {
    let Some(obj) = stream.as_object() else {
        return StreamDescriptor::default();
    };

    StreamDescriptor {
        index: uint_field(obj, "index"),
        codec_type: CodecType::from_wire(&str_field(obj, "codec_type")),
        codec_name: str_field(obj, "codec_name"),
        bit_rate: str_field(obj, "bit_rate"),
        sample_rate: str_field(obj, "sample_rate"),
        channels: u32_field(obj, "channels"),
        codec_long_name: str_field(obj, "codec_long_name"),
        profile: str_field(obj, "profile"),
        codec_tag_string: str_field(obj, "codec_tag_string"),
        width: u32_field(obj, "width"),
        height: u32_field(obj, "height"),
        pix_fmt: str_field(obj, "pix_fmt"),
        sample_fmt: str_field(obj, "sample_fmt"),
        bits_per_sample: u32_field(obj, "bits_per_sample"),
        duration: str_field(obj, "duration"),
        time_base: str_field(obj, "time_base"),
        r_frame_rate: str_field(obj, "r_frame_rate"),
        avg_frame_rate: str_field(obj, "avg_frame_rate"),
        tags: obj.get("tags").map(parse_tags).unwrap_or_default(),
    }
}

/// Parse the `format` object.
fn parse_format(format: &Value) -> FormatDescriptor {
    let Some(obj) = format.as_object() else {
        return FormatDescriptor::default();
    };

    FormatDescriptor {
        filename: str_field(obj, "filename"),
        format_name: str_field(obj, "format_name"),
        format_long_name: str_field(obj, "format_long_name"),
        nb_streams: u32_field(obj, "nb_streams"),
        duration: str_field(obj, "duration"),
        start_time: str_field(obj, "start_time"),
        size: str_field(obj, "size"),
        bit_rate: str_field(obj, "bit_rate"),
        tags: obj.get("tags").map(parse_tags).unwrap_or_default(),
    }
}

fn parse_tags(tags: &Value) -> StreamTags {
    let Some(obj) = tags.as_object() else {
        return StreamTags::default();
    };

    StreamTags {
        language: str_field(obj, "language"),
        handler_name: str_field(obj, "handler_name"),
        major_brand: str_field(obj, "major_brand"),
        minor_version: str_field(obj, "minor_version"),
        compatible_brands: str_field(obj, "compatible_brands"),
    }
}

/// Read a string field. Any other JSON type reads as empty.
fn str_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Read a non-negative integer field. Strings, floats and negatives read as zero.
fn uint_field(obj: &Map<String, Value>, key: &str) -> u64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

fn u32_field(obj: &Map<String, Value>, key: &str) -> u32 {
    u32::try_from(uint_field(obj, key)).unwrap_or(0)
}
