//! Media probe report structures (streams, container format).
//!
//! These mirror the JSON emitted by `ffprobe -show_format -show_streams`.
//! Every field has a zero value so a partially broken report still
//! produces a usable model.

use serde::{Deserialize, Serialize};

use super::enums::CodecType;

/// Result of probing a file: its streams in report order plus container info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaProbeReport {
    /// Elementary streams, in the order the probe tool listed them.
    pub streams: Vec<StreamDescriptor>,
    /// Container-level information.
    pub format: FormatDescriptor,
}

impl MediaProbeReport {
    /// Iterate over streams of a given kind, preserving report order.
    pub fn streams_of(&self, codec_type: CodecType) -> impl Iterator<Item = &StreamDescriptor> {
        self.streams
            .iter()
            .filter(move |s| s.codec_type == codec_type)
    }

    /// Number of audio streams in the report.
    pub fn audio_stream_count(&self) -> usize {
        self.streams_of(CodecType::Audio).count()
    }
}

/// Free-form tags attached to a stream or container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTags {
    pub language: String,
    pub handler_name: String,
    pub major_brand: String,
    pub minor_version: String,
    pub compatible_brands: String,
}

/// One elementary stream within the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream index (probe ordering).
    pub index: u64,
    /// Interpreted `codec_type`.
    pub codec_type: CodecType,
    /// Codec name (e.g., "aac", "h264").
    pub codec_name: String,
    /// Bit rate in bits/second, string-encoded as on the wire.
    pub bit_rate: String,
    /// Sample rate in Hz, string-encoded as on the wire.
    pub sample_rate: String,
    /// Number of audio channels.
    pub channels: u32,

    // Descriptive fields, carried through for reporting only.
    pub codec_long_name: String,
    pub profile: String,
    pub codec_tag_string: String,
    pub width: u32,
    pub height: u32,
    pub pix_fmt: String,
    pub sample_fmt: String,
    pub bits_per_sample: u32,
    pub duration: String,
    pub time_base: String,
    pub r_frame_rate: String,
    pub avg_frame_rate: String,
    pub tags: StreamTags,
}

/// Container-level description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub filename: String,
    pub format_name: String,
    pub format_long_name: String,
    pub nb_streams: u32,
    pub duration: String,
    pub start_time: String,
    pub size: String,
    pub bit_rate: String,
    pub tags: StreamTags,
}
