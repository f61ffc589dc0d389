//! Audio stream selection.

use crate::models::{AudioParams, CodecType, MediaProbeReport};

/// Pick the audio parameters to preserve from a probe report.
///
/// Streams are scanned in report order and every audio stream replaces
/// the running selection, so the last audio stream wins. A report with no
/// audio stream yields zero-valued parameters rather than an error.
pub fn select_audio_params(report: &MediaProbeReport) -> AudioParams {
    report
        .streams
        .iter()
        .filter(|stream| stream.codec_type == CodecType::Audio)
        .fold(AudioParams::default(), |_, stream| AudioParams {
            codec: stream.codec_name.clone(),
            bit_rate: stream.bit_rate.clone(),
            sample_rate: stream.sample_rate.clone(),
            channels: stream.channels,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StreamDescriptor;

    fn audio(codec: &str, bit_rate: &str, sample_rate: &str, channels: u32) -> StreamDescriptor {
        StreamDescriptor {
            codec_type: CodecType::Audio,
            codec_name: codec.to_string(),
            bit_rate: bit_rate.to_string(),
            sample_rate: sample_rate.to_string(),
            channels,
            ..Default::default()
        }
    }

    #[test]
    fn selects_single_audio_stream() {
        let report = MediaProbeReport {
            streams: vec![
                StreamDescriptor {
                    codec_type: CodecType::Video,
                    codec_name: "h264".to_string(),
                    bit_rate: "5000000".to_string(),
                    ..Default::default()
                },
                audio("aac", "128000", "48000", 2),
            ],
            ..Default::default()
        };

        let params = select_audio_params(&report);
        assert_eq!(params.codec, "aac");
        assert_eq!(params.bit_rate, "128000");
        assert_eq!(params.sample_rate, "48000");
        assert_eq!(params.channels, 2);
    }

    #[test]
    fn last_audio_stream_wins() {
        let report = MediaProbeReport {
            streams: vec![
                audio("ac3", "384000", "48000", 6),
                StreamDescriptor {
                    codec_type: CodecType::Subtitle,
                    codec_name: "subrip".to_string(),
                    ..Default::default()
                },
                audio("aac", "96000", "44100", 2),
            ],
            ..Default::default()
        };

        let params = select_audio_params(&report);
        assert_eq!(params.codec, "aac");
        assert_eq!(params.channels, 2);
        assert_eq!(params.sample_rate, "44100");
    }

    #[test]
    fn no_audio_streams_yields_zero_values() {
        let report = MediaProbeReport {
            streams: vec![StreamDescriptor {
                codec_type: CodecType::Video,
                codec_name: "h264".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let params = select_audio_params(&report);
        assert_eq!(params, AudioParams::default());
        assert!(params.is_empty());
    }

    #[test]
    fn later_audio_stream_with_missing_fields_still_overrides() {
        let report = MediaProbeReport {
            streams: vec![audio("aac", "128000", "48000", 2), audio("opus", "", "", 0)],
            ..Default::default()
        };

        let params = select_audio_params(&report);
        assert_eq!(params.codec, "opus");
        assert_eq!(params.bit_rate, "");
        assert_eq!(params.channels, 0);
    }
}
