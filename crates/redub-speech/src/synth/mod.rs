//! Remote voice-model synthesis.

mod gemini;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiTts;

use crate::error::SpeechError;

pub type SharedSynthesizer = Arc<dyn SpeechSynthesizer>;

/// One speaker in a multi-speaker dialogue script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerVoice {
    /// Speaker tag as it appears in the script text.
    pub speaker: String,
    /// Catalog voice name for this speaker.
    pub voice: String,
}

/// A remote voice model that renders text to raw PCM.
///
/// Implementations return interleaved little-endian samples in the
/// pipeline's fixed 24 kHz mono 16-bit format. Calls are not retried; a
/// failed call fails the request that issued it.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` with a single voice.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError>;

    /// Render a script with per-speaker voices in one call.
    async fn synthesize_dialogue(
        &self,
        text: &str,
        speakers: &[SpeakerVoice],
    ) -> Result<Vec<u8>, SpeechError>;
}
