//! Minimal RIFF/WAVE codec for raw PCM payloads.

use super::AudioSpec;
use crate::error::SpeechError;

/// Wrap raw PCM bytes in a RIFF/WAVE container.
pub fn encode(pcm: &[u8], spec: &AudioSpec) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let block_align = spec.frame_bytes() as u16;

    let mut out = Vec::with_capacity(44 + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format tag
    out.extend_from_slice(&spec.channels.to_le_bytes());
    out.extend_from_slice(&spec.sample_rate.to_le_bytes());
    out.extend_from_slice(&spec.byte_rate().to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&spec.bit_depth.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

/// Extract the PCM payload from a WAV buffer.
///
/// Scans the chunk list from offset 12 until the `data` chunk turns up,
/// skipping other chunks and honoring the RIFF rule that odd-sized chunks
/// are padded to an even boundary.
pub fn decode(wav: &[u8]) -> Result<&[u8], SpeechError> {
    if wav.len() < 44 || &wav[0..4] != b"RIFF" || &wav[8..12] != b"WAVE" {
        return Err(SpeechError::InvalidWavFormat);
    }

    let mut pos = 12;
    while pos + 8 <= wav.len() {
        let id = &wav[pos..pos + 4];
        let size = u32::from_le_bytes([wav[pos + 4], wav[pos + 5], wav[pos + 6], wav[pos + 7]])
            as usize;
        let body = pos + 8;
        if id == b"data" {
            // A declared size past the end of the buffer means truncation.
            return wav
                .get(body..body + size)
                .ok_or(SpeechError::InvalidWavFormat);
        }
        pos = body + size + (size % 2);
    }

    Err(SpeechError::DataChunkNotFound)
}
