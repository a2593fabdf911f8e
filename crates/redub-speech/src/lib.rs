//! Speech-generation core for Redub.
//!
//! Turns text into a single spoken WAV file by delegating synthesis to a
//! remote voice model. With a positive paragraph gap the text is split into
//! paragraphs, each paragraph is synthesized independently to raw PCM, and
//! the pieces are stitched back together with silence in between before the
//! result is wrapped in a WAV container.

pub mod audio;
pub mod config;
pub mod error;
pub mod segment;
pub mod speech;
pub mod synth;
pub mod voice;

pub use audio::AudioSpec;
pub use config::AppConfig;
pub use error::SpeechError;
pub use speech::SpeechGenerator;
pub use synth::{GeminiTts, SharedSynthesizer, SpeakerVoice, SpeechSynthesizer};
