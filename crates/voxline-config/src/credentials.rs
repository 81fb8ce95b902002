//! Credential records and the keys they are read from

use secrecy::SecretString;

use crate::{ConfigError, ConfigSource};

/// MiniMax account group identifier
pub const GROUP_ID: &str = "GROUP_ID";
/// MiniMax API key
pub const API_KEY: &str = "API_KEY";
/// Zhipu key pair, formatted as `id.secret`
pub const ZHIPU_API_KEY: &str = "ZHIPU_API_KEY";
/// Optional TTS voice override
pub const VOICE_ID: &str = "VOICE_ID";
/// Optional TTS model override
pub const MODEL_ID: &str = "MODEL_ID";

/// Keys required by the credential checker, in report order
pub const ALL_REQUIRED: [&str; 3] = [GROUP_ID, API_KEY, ZHIPU_API_KEY];

/// Credentials for the MiniMax text-to-speech API
#[derive(Debug)]
pub struct TtsCredentials {
    /// Account group, sent as the `GroupId` query parameter
    pub group_id: String,
    /// Bearer API key
    pub api_key: SecretString,
}

impl TtsCredentials {
    /// Extract the TTS credentials from a parsed source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] naming every absent key
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        source.ensure_present(&[GROUP_ID, API_KEY])?;

        Ok(Self {
            group_id: source.require(GROUP_ID)?.to_owned(),
            api_key: SecretString::from(source.require(API_KEY)?.to_owned()),
        })
    }
}

/// Credentials for both providers
#[derive(Debug)]
pub struct Credentials {
    pub tts: TtsCredentials,
    /// Zhipu key pair; its `id.secret` shape is checked where it is used
    pub chat_key_pair: SecretString,
}

impl Credentials {
    /// Extract credentials for both providers from a parsed source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] naming every absent key
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        source.ensure_present(&ALL_REQUIRED)?;

        Ok(Self {
            tts: TtsCredentials::from_source(source)?,
            chat_key_pair: SecretString::from(source.require(ZHIPU_API_KEY)?.to_owned()),
        })
    }
}

/// Optional voice and model overrides for synthesis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceOverrides {
    pub voice_id: Option<String>,
    pub model: Option<String>,
}

impl VoiceOverrides {
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            voice_id: source.get(VOICE_ID).map(str::to_owned),
            model: source.get(MODEL_ID).map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn source(raw: &str) -> ConfigSource {
        ConfigSource::parse(raw)
    }

    #[test]
    fn tts_credentials_need_only_minimax_keys() {
        let creds = TtsCredentials::from_source(&source("GROUP_ID: \"g\"\nAPI_KEY: \"k\"")).unwrap();

        assert_eq!(creds.group_id, "g");
        assert_eq!(creds.api_key.expose_secret(), "k");
    }

    #[test]
    fn full_credentials_report_all_missing_keys() {
        let err = Credentials::from_source(&source("API_KEY: \"k\"")).unwrap_err();

        insta::assert_snapshot!(err.to_string(), @"missing configuration: GROUP_ID, ZHIPU_API_KEY");
    }

    #[test]
    fn empty_source_reports_every_key() {
        let err = Credentials::from_source(&ConfigSource::default()).unwrap_err();

        let ConfigError::MissingConfiguration { missing } = err else {
            panic!("expected missing configuration");
        };
        assert_eq!(missing, ALL_REQUIRED.to_vec());
    }

    #[test]
    fn key_pair_shape_is_not_validated_at_load() {
        let raw = "GROUP_ID: \"g\"\nAPI_KEY: \"k\"\nZHIPU_API_KEY: \"malformed-no-dot\"";
        let creds = Credentials::from_source(&source(raw)).unwrap();

        assert_eq!(creds.chat_key_pair.expose_secret(), "malformed-no-dot");
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let creds = TtsCredentials::from_source(&source("GROUP_ID: \"g\"\nAPI_KEY: \"top-secret\"")).unwrap();

        assert!(!format!("{creds:?}").contains("top-secret"));
    }

    #[test]
    fn unexpandable_override_does_not_block_tts_credentials() {
        temp_env::with_var_unset("VOXLINE_UNSET_VOICE", || {
            let raw = "GROUP_ID: \"g\"\nAPI_KEY: \"k\"\nVOICE_ID: \"{{ env.VOXLINE_UNSET_VOICE }}\"";
            let source = source(raw);

            TtsCredentials::from_source(&source).unwrap();
            assert_eq!(VoiceOverrides::from_source(&source).voice_id, None);
        });
    }

    #[test]
    fn voice_overrides_are_optional() {
        assert_eq!(VoiceOverrides::from_source(&ConfigSource::default()), VoiceOverrides::default());

        let overrides = VoiceOverrides::from_source(&source("VOICE_ID: \"male-qn\"\nMODEL_ID: \"speech-02-hd\""));
        assert_eq!(overrides.voice_id.as_deref(), Some("male-qn"));
        assert_eq!(overrides.model.as_deref(), Some("speech-02-hd"));
    }
}
