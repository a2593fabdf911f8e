//! Raw PCM helpers: silence rendering and gap-aware concatenation.

use super::AudioSpec;
use crate::error::SpeechError;

/// Render a zero-filled PCM buffer of the given duration.
///
/// Zero and negative durations yield an empty buffer.
pub fn silence(duration_secs: f64, spec: &AudioSpec) -> Vec<u8> {
    let samples_per_channel = (spec.sample_rate as f64 * duration_secs).floor().max(0.0) as usize;
    vec![0u8; samples_per_channel * spec.frame_bytes()]
}

/// Join per-paragraph PCM buffers into one, inserting a silence gap after
/// every buffer except the last.
///
/// `gap_secs[i]` is the gap following `buffers[i]`; missing entries count as
/// zero-duration gaps. The output preserves buffer order exactly — that
/// ordering is what makes the stitched speech intelligible.
pub fn concatenate(
    buffers: &[Vec<u8>],
    gap_secs: &[f64],
    spec: &AudioSpec,
) -> Result<Vec<u8>, SpeechError> {
    if buffers.is_empty() {
        return Err(SpeechError::NoBuffers);
    }

    let frame = spec.frame_bytes();
    for buf in buffers {
        if buf.len() % frame != 0 {
            return Err(SpeechError::MisalignedPcm {
                len: buf.len(),
                frame,
            });
        }
    }

    // No gap after the final buffer.
    let gaps: Vec<Vec<u8>> = (0..buffers.len() - 1)
        .map(|i| silence(gap_secs.get(i).copied().unwrap_or(0.0), spec))
        .collect();

    let total: usize = buffers.iter().map(Vec::len).sum::<usize>()
        + gaps.iter().map(Vec::len).sum::<usize>();

    let mut out = Vec::with_capacity(total);
    for (i, buf) in buffers.iter().enumerate() {
        out.extend_from_slice(buf);
        if let Some(gap) = gaps.get(i) {
            out.extend_from_slice(gap);
        }
    }
    debug_assert_eq!(out.len(), total);

    Ok(out)
}
