use serde::Deserialize;

use crate::crypto::secret::Secret;
use crate::crypto::signer::DigestAlg;
use crate::domain::error::{EngineError, EngineResult};

/// Centralized defaults for the restyle engine.
/// All opinionated defaults should be defined here for consistency.
pub struct EngineDefaults;

impl EngineDefaults {
    // Signing defaults
    pub const DIGEST_ALGORITHM: DigestAlg = DigestAlg::Sha1; // Matches already-issued URLs

    // URL defaults
    pub const URL_TEMPLATE: &'static str =
        "/system/:collection/:field/:id_partition/:style/:filename";
    pub const MISSING_URL_TEMPLATE: &'static str = "/:field/:style/missing.png";

    /// Directory name the unprocessed upload is kept under in a store.
    pub const ORIGINAL_STYLE: &'static str = "original";
}

/// Settings for dynamic-style URL signing.
///
/// There is deliberately no default secret: signing against a guessable
/// value would defeat the point, so an unset secret stays `None` and
/// surfaces as [`EngineError::SecretNotSet`] when a signer is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    pub secret: Option<Secret>,
    pub algorithm: DigestAlg,
}

impl StylesConfig {
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: Some(secret.into()),
            algorithm: EngineDefaults::DIGEST_ALGORITHM,
        }
    }

    /// Parse from a JSON string, e.g. `{"secret":"...","algorithm":"sha256"}`.
    /// Omitted fields fall back to their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

static GLOBAL_CONFIG: once_cell::sync::OnceCell<StylesConfig> = once_cell::sync::OnceCell::new();

/// Install the process-wide styles configuration. Errors if already set.
pub fn configure(config: StylesConfig) -> EngineResult<()> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| EngineError::Config("styles configuration is already set".to_string()))
}

/// Process-wide styles configuration, if [`configure`] has been called.
pub fn config() -> Option<&'static StylesConfig> {
    GLOBAL_CONFIG.get()
}
