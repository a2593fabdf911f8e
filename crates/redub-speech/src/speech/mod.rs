//! Top-level speech generation: segmentation, per-paragraph synthesis,
//! silence stitching, and container output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::audio::{self, AudioSpec};
use crate::error::SpeechError;
use crate::segment;
use crate::synth::{SharedSynthesizer, SpeakerVoice};
use crate::voice;

/// Drives one synthesis request end to end.
///
/// Holds no per-request state, so concurrent generations are safe as long
/// as callers supply distinct output paths.
pub struct SpeechGenerator {
    synth: SharedSynthesizer,
    spec: AudioSpec,
}

impl SpeechGenerator {
    pub fn new(synth: SharedSynthesizer) -> Self {
        Self {
            synth,
            spec: AudioSpec::default(),
        }
    }

    /// Render `text` as speech and write a WAV file at `output_path`.
    ///
    /// A positive `paragraph_gap_secs` splits the text into paragraphs,
    /// synthesizes each one in order, and inserts that much silence between
    /// them. With a zero (or negative) gap the whole text is rendered in one
    /// remote call, line breaks collapsed to spaces. Returns the output path
    /// on success; any sub-step failure aborts the whole generation.
    pub async fn generate(
        &self,
        text: &str,
        voice_name: &str,
        output_path: &Path,
        paragraph_gap_secs: f64,
    ) -> Result<PathBuf, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        let voice_name = voice::validate(voice_name);

        let pcm = if paragraph_gap_secs > 0.0 {
            let paragraphs = segment::split_paragraphs(text);
            if paragraphs.len() > 1 {
                self.synthesize_paragraphs(&paragraphs, voice_name, paragraph_gap_secs)
                    .await?
            } else {
                self.synth
                    .synthesize(&flatten_lines(text), voice_name)
                    .await?
            }
        } else {
            self.synth
                .synthesize(&flatten_lines(text), voice_name)
                .await?
        };

        self.write_wav(&pcm, output_path)
    }

    /// Render a multi-speaker script in one remote call and write a WAV
    /// file at `output_path`.
    pub async fn generate_dialogue(
        &self,
        text: &str,
        speakers: &[SpeakerVoice],
        output_path: &Path,
    ) -> Result<PathBuf, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        if speakers.is_empty() {
            return Err(SpeechError::NoSpeakers);
        }
        let pcm = self.synth.synthesize_dialogue(text, speakers).await?;
        self.write_wav(&pcm, output_path)
    }

    async fn synthesize_paragraphs(
        &self,
        paragraphs: &[String],
        voice_name: &str,
        gap_secs: f64,
    ) -> Result<Vec<u8>, SpeechError> {
        let mut buffers = Vec::with_capacity(paragraphs.len());
        // One await at a time: the collection order of `buffers` is the
        // order of speech on disk.
        for (i, paragraph) in paragraphs.iter().enumerate() {
            info!(
                paragraph = i + 1,
                total = paragraphs.len(),
                "synthesizing paragraph"
            );
            buffers.push(self.synth.synthesize(paragraph, voice_name).await?);
        }

        let gaps = vec![gap_secs; paragraphs.len() - 1];
        audio::pcm::concatenate(&buffers, &gaps, &self.spec)
    }

    fn write_wav(&self, pcm: &[u8], output_path: &Path) -> Result<PathBuf, SpeechError> {
        let wav = audio::wav::encode(pcm, &self.spec);
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, &wav)?;
        info!(
            path = %output_path.display(),
            bytes = wav.len(),
            "speech file written"
        );
        Ok(output_path.to_path_buf())
    }
}

/// Collapse line breaks to single spaces so the single-call path reads the
/// text as one paragraph.
fn flatten_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::audio::pcm;
    use crate::synth::SpeechSynthesizer;

    /// Records every request and returns a fixed PCM chunk.
    struct StubSynth {
        chunk: Vec<u8>,
        calls: Mutex<Vec<String>>,
    }

    impl StubSynth {
        fn new(chunk_len: usize) -> Self {
            Self {
                chunk: vec![0x55; chunk_len],
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for StubSynth {
        async fn synthesize(&self, text: &str, _voice: &str) -> Result<Vec<u8>, SpeechError> {
            self.calls.lock().unwrap().push(text.to_string());
            Ok(self.chunk.clone())
        }

        async fn synthesize_dialogue(
            &self,
            text: &str,
            _speakers: &[SpeakerVoice],
        ) -> Result<Vec<u8>, SpeechError> {
            self.calls.lock().unwrap().push(text.to_string());
            Ok(self.chunk.clone())
        }
    }

    fn temp_wav(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("redub-{name}-{}.wav", std::process::id()))
    }

    #[tokio::test]
    async fn multi_paragraph_generation_stitches_with_gaps() {
        let chunk_len = 1200;
        let synth = Arc::new(StubSynth::new(chunk_len));
        let generator = SpeechGenerator::new(synth.clone());
        let path = temp_wav("multi");

        let out = generator
            .generate("Line one.\nLine two.\nLine three.", "Kore", &path, 0.5)
            .await
            .unwrap();
        assert_eq!(out, path);

        let wav = fs::read(&path).unwrap();
        let payload = audio::wav::decode(&wav).unwrap();
        let gap_len = pcm::silence(0.5, &AudioSpec::default()).len();
        assert_eq!(payload.len(), 3 * chunk_len + 2 * gap_len);

        let calls = synth.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["Line one.", "Line two.", "Line three."]);

        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn single_paragraph_with_gap_skips_stitching() {
        let synth = Arc::new(StubSynth::new(800));
        let generator = SpeechGenerator::new(synth.clone());
        let path = temp_wav("single");

        generator
            .generate("Just one line", "Kore", &path, 0.5)
            .await
            .unwrap();

        let wav = fs::read(&path).unwrap();
        let payload = audio::wav::decode(&wav).unwrap();
        // No silence inserted anywhere.
        assert_eq!(payload.len(), 800);
        assert_eq!(synth.calls.lock().unwrap().len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn zero_gap_collapses_line_breaks() {
        let synth = Arc::new(StubSynth::new(400));
        let generator = SpeechGenerator::new(synth.clone());
        let path = temp_wav("flat");

        generator
            .generate("first\r\nsecond\nthird", "Kore", &path, 0.0)
            .await
            .unwrap();

        let calls = synth.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["first second third"]);

        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let synth = Arc::new(StubSynth::new(100));
        let generator = SpeechGenerator::new(synth);
        let path = temp_wav("empty");

        let err = generator.generate("   \n  ", "Kore", &path, 0.5).await;
        assert!(matches!(err, Err(SpeechError::EmptyText)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let synth = Arc::new(StubSynth::new(100));
        let generator = SpeechGenerator::new(synth);
        let dir = std::env::temp_dir().join(format!("redub-nested-{}", std::process::id()));
        let path = dir.join("deep").join("out.wav");

        generator.generate("hello", "Kore", &path, 0.0).await.unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn dialogue_requires_speakers() {
        let synth = Arc::new(StubSynth::new(100));
        let generator = SpeechGenerator::new(synth);
        let path = temp_wav("dialogue-empty");

        let err = generator.generate_dialogue("A: hi", &[], &path).await;
        assert!(matches!(err, Err(SpeechError::NoSpeakers)));
    }

    #[tokio::test]
    async fn dialogue_writes_wav_output() {
        let synth = Arc::new(StubSynth::new(600));
        let generator = SpeechGenerator::new(synth);
        let path = temp_wav("dialogue");

        let speakers = vec![
            SpeakerVoice {
                speaker: "Host".into(),
                voice: "Kore".into(),
            },
            SpeakerVoice {
                speaker: "Guest".into(),
                voice: "Puck".into(),
            },
        ];
        generator
            .generate_dialogue("Host: hi\nGuest: hello", &speakers, &path)
            .await
            .unwrap();

        let wav = fs::read(&path).unwrap();
        assert_eq!(audio::wav::decode(&wav).unwrap().len(), 600);

        let _ = fs::remove_file(&path);
    }
}
