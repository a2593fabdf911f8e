use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::{SpeakerVoice, SpeechSynthesizer};
use crate::config::GeminiConfig;
use crate::error::SpeechError;
use crate::voice;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini TTS client.
///
/// One `generateContent` call per synthesis request, with the AUDIO response
/// modality; the response carries base64-encoded raw PCM inline.
pub struct GeminiTts {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiTts {
    pub fn new(config: &GeminiConfig) -> Result<Self, SpeechError> {
        let api_key = config.resolve_api_key().ok_or(SpeechError::MissingApiKey)?;
        Ok(Self {
            http: Client::new(),
            api_key,
            model: config.model.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }

    async fn send(&self, text: &str, speech_config: Value) -> Result<Vec<u8>, SpeechError> {
        let payload = json!({
            "contents": [{
                "parts": [{ "text": text }]
            }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": speech_config,
            }
        });

        let resp = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        extract_audio(resp)
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for GeminiTts {
    async fn synthesize(&self, text: &str, voice_name: &str) -> Result<Vec<u8>, SpeechError> {
        let voice_name = voice::validate(voice_name);
        info!(voice = voice_name, chars = text.len(), "requesting synthesis");
        let speech_config = json!({
            "voiceConfig": {
                "prebuiltVoiceConfig": { "voiceName": voice_name }
            }
        });
        self.send(text, speech_config).await
    }

    async fn synthesize_dialogue(
        &self,
        text: &str,
        speakers: &[SpeakerVoice],
    ) -> Result<Vec<u8>, SpeechError> {
        if speakers.is_empty() {
            return Err(SpeechError::NoSpeakers);
        }
        let speaker_configs: Vec<Value> = speakers
            .iter()
            .map(|s| {
                json!({
                    "speaker": s.speaker,
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": voice::validate(&s.voice) }
                    }
                })
            })
            .collect();
        info!(speakers = speakers.len(), "requesting multi-speaker synthesis");
        let speech_config = json!({
            "multiSpeakerVoiceConfig": { "speakerVoiceConfigs": speaker_configs }
        });
        self.send(text, speech_config).await
    }
}

/// Response schema, limited to the fields the audio path reads.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(default)]
    data: String,
}

/// Pull the PCM payload out of a decoded response, failing fast on any
/// missing piece of the expected shape.
fn extract_audio(resp: GenerateContentResponse) -> Result<Vec<u8>, SpeechError> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or(SpeechError::EmptyResponse)?;
    let part = candidate
        .content
        .ok_or(SpeechError::NoAudioData)?
        .parts
        .into_iter()
        .next()
        .ok_or(SpeechError::NoAudioData)?;
    let inline = part.inline_data.ok_or(SpeechError::NoAudioData)?;
    if inline.data.is_empty() {
        return Err(SpeechError::NoAudioData);
    }
    Ok(BASE64.decode(inline.data.as_bytes())?)
}
