//! Command-line front end for the Redub speech core.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use redub_speech::{
    AppConfig, GeminiTts, SpeakerVoice, SpeechGenerator,
    voice,
};

#[derive(Parser)]
#[command(author, version, about = "Text-to-speech rendering via the Redub speech core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to a spoken WAV file
    Speak(SpeakArgs),
    /// Render a multi-speaker script to a spoken WAV file
    Dialogue(DialogueArgs),
    /// List the available voice presets
    Voices,
}

#[derive(Args)]
struct SpeakArgs {
    /// Text to speak; reads --input instead when omitted
    text: Option<String>,
    /// Read the input text from this file
    #[arg(long)]
    input: Option<PathBuf>,
    /// Voice preset name (falls back to the configured default)
    #[arg(long)]
    voice: Option<String>,
    /// Output WAV path
    #[arg(long, default_value = "out.wav")]
    output: PathBuf,
    /// Silence between paragraphs, in seconds (0 renders in one call)
    #[arg(long)]
    gap: Option<f64>,
}

#[derive(Args)]
struct DialogueArgs {
    /// Script text; reads --input instead when omitted
    text: Option<String>,
    /// Read the script from this file
    #[arg(long)]
    input: Option<PathBuf>,
    /// speaker=voice pair; repeat once per speaker
    #[arg(long = "speaker", value_parser = parse_speaker)]
    speakers: Vec<SpeakerVoice>,
    /// Output WAV path
    #[arg(long, default_value = "out.wav")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Voices => {
            for label in voice::display_labels() {
                println!("{label}");
            }
            Ok(())
        }
        Commands::Speak(args) => speak(args).await,
        Commands::Dialogue(args) => dialogue(args).await,
    }
}

async fn speak(args: SpeakArgs) -> Result<()> {
    let config = AppConfig::load()?;
    config.gemini.validate();

    let text = read_input(args.text, args.input)?;
    let voice = args
        .voice
        .unwrap_or_else(|| config.speech.default_voice.clone());
    let gap = args.gap.unwrap_or(config.speech.paragraph_gap_secs);

    let synth = Arc::new(GeminiTts::new(&config.gemini)?);
    let generator = SpeechGenerator::new(synth);
    let path = generator.generate(&text, &voice, &args.output, gap).await?;
    info!(path = %path.display(), "speech rendered");
    Ok(())
}

async fn dialogue(args: DialogueArgs) -> Result<()> {
    let config = AppConfig::load()?;
    config.gemini.validate();

    let text = read_input(args.text, args.input)?;

    let synth = Arc::new(GeminiTts::new(&config.gemini)?);
    let generator = SpeechGenerator::new(synth);
    let path = generator
        .generate_dialogue(&text, &args.speakers, &args.output)
        .await?;
    info!(path = %path.display(), "dialogue rendered");
    Ok(())
}

fn read_input(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))
        }
        (None, None) => bail!("no input text; pass TEXT or --input FILE"),
    }
}

fn parse_speaker(raw: &str) -> Result<SpeakerVoice, String> {
    let (speaker, voice) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected speaker=voice, got {raw:?}"))?;
    if speaker.is_empty() || voice.is_empty() {
        return Err(format!("expected speaker=voice, got {raw:?}"));
    }
    Ok(SpeakerVoice {
        speaker: speaker.to_string(),
        voice: voice.to_string(),
    })
}
