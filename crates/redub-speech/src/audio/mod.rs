//! PCM buffer manipulation and WAV container handling.

pub mod pcm;
pub mod wav;

/// Sample-format parameters shared by every buffer in one synthesis run.
///
/// The remote voice model emits 24 kHz mono 16-bit PCM for every call, so
/// the defaults apply everywhere. Passing one `AudioSpec` through the
/// pipeline keeps the silence generator, the concatenation engine, and the
/// WAV codec agreed on the frame layout; a mismatch between them would
/// silently corrupt the stitched output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub bit_depth: u16,
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self {
            sample_rate: 24_000,
            channels: 1,
            bit_depth: 16,
        }
    }
}

impl AudioSpec {
    /// Bytes per interleaved frame (all channels of one sample instant).
    pub fn frame_bytes(&self) -> usize {
        self.channels as usize * self.bit_depth as usize / 8
    }

    /// Bytes of PCM per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * self.bit_depth as u32 / 8
    }
}
