//! Probe report handling.
//!
//! Turns the JSON produced by the media-probe tool into a typed
//! [`MediaProbeReport`](crate::models::MediaProbeReport) and picks the
//! audio parameters a corrective re-encode must preserve.
//!
//! # Tolerance
//!
//! Probe output varies across container formats and tool versions, so
//! parsing never fails: a missing or mistyped field becomes its zero value.
//! Whether the report is *useful* (e.g. has an audio stream) is left to
//! downstream stages.
//!
//! # Usage
//!
//! ```
//! use lcc_core::probe::{parse_probe_report, select_audio_params};
//!
//! let json = r#"{"streams":[{"codec_type":"audio","codec_name":"aac","channels":2}]}"#;
//! let report = parse_probe_report(json);
//! let audio = select_audio_params(&report);
//! assert_eq!(audio.codec, "aac");
//! ```

mod parser;
mod selector;

pub use parser::parse_probe_report;
pub use selector::select_audio_params;
