//! Correction plan construction and output path derivation.

use std::path::{Path, PathBuf};

use crate::models::{AudioParams, ComplianceResult, CorrectionPlan};

/// Suffix inserted before the extension of the corrected file.
pub const OUTPUT_SUFFIX: &str = "-fixedAudio";

/// Derive the corrected file's path from the input path.
///
/// The directory is kept. The stem is everything before the **first** dot
/// of the file name, the extension is everything from the **last** dot, so
/// `a.b.mov` becomes `a-fixedAudio.mov`. Existing tooling depends on this
/// naming, including the dropped middle segment.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = file_name.split('.').next().unwrap_or("");
    let ext = file_name.rfind('.').map(|i| &file_name[i..]).unwrap_or("");
    let output_name = format!("{}{}{}", stem, OUTPUT_SUFFIX, ext);

    match input.parent() {
        Some(dir) => dir.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Build the corrective transcode plan for a checked file.
///
/// Parameters are copied verbatim; an empty selection (no audio stream)
/// produces a degenerate plan rather than an error.
pub fn build_plan(input: &Path, audio: &AudioParams, result: &ComplianceResult) -> CorrectionPlan {
    CorrectionPlan {
        input_path: input.to_path_buf(),
        output_path: derive_output_path(input),
        audio: audio.clone(),
        gain: result.adjustment_string(),
    }
}
