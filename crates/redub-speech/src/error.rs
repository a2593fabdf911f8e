use thiserror::Error;

/// Errors produced by the speech-generation pipeline.
///
/// None of these are retried internally; any failure aborts the whole
/// generation and surfaces to the caller.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("text content is empty")]
    EmptyText,

    #[error("no speaker voices supplied")]
    NoSpeakers,

    #[error("voice model returned no candidates")]
    EmptyResponse,

    #[error("voice model response contains no audio data")]
    NoAudioData,

    #[error("no PCM buffers to concatenate")]
    NoBuffers,

    #[error("PCM buffer of {len} bytes is not aligned to {frame}-byte frames")]
    MisalignedPcm { len: usize, frame: usize },

    #[error("buffer is not a RIFF/WAVE container")]
    InvalidWavFormat,

    #[error("WAV container has no data chunk")]
    DataChunkNotFound,

    #[error("voice model API key is not configured")]
    MissingApiKey,

    #[error("voice model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("audio payload is not valid base64: {0}")]
    AudioDecode(#[from] base64::DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
