use serde::Serialize;

/// Model used when the configuration does not override it
pub const DEFAULT_MODEL: &str = "speech-01-turbo";

/// Voice used when the configuration does not override it
pub const DEFAULT_VOICE_ID: &str = "female-chengshu";

/// File extension of the synthesized audio
pub const AUDIO_EXTENSION: &str = "mp3";

/// Voice parameters sent with every synthesis request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceSetting {
    pub voice_id: String,
    /// Speech speed multiplier
    pub speed: f32,
    /// Volume multiplier
    pub vol: f32,
    /// Pitch offset in semitones
    pub pitch: i32,
}

impl Default for VoiceSetting {
    fn default() -> Self {
        Self {
            voice_id: DEFAULT_VOICE_ID.to_owned(),
            speed: 1.0,
            vol: 1.0,
            pitch: 0,
        }
    }
}

/// Non-streaming speech synthesis request
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Model identifier (e.g. "speech-01-turbo")
    pub model: String,
    /// Text to synthesize into speech
    pub text: String,
    pub voice: VoiceSetting,
}

impl SpeechRequest {
    /// Request for `text` with the default model and voice
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            text: text.into(),
            voice: VoiceSetting::default(),
        }
    }
}

/// Raw audio returned by a TTS provider
pub struct SpeechResponse {
    /// Decoded audio bytes
    pub audio: Vec<u8>,
}
