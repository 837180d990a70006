//! URL signing strategy for the engine.
//! Signatures are `hex(digest(secret || style_name))` over the style name as
//! registered. SHA-1 is the compatibility default; SHA-256 is available for
//! new deployments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use thiserror::Error;

use crate::crypto::secret::Secret;
use crate::domain::error::{EngineError, EngineResult};
use crate::domain::types::StylesConfig;

#[derive(Debug, Error)]
pub enum DigestAlgError {
    #[error("Invalid digest algorithm: expected 'sha1' or 'sha256'")]
    InvalidAlgorithm,
}

/// Digest algorithm behind a URL signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlg {
    /// 40 hex chars. Default for compatibility with existing URLs.
    #[default]
    Sha1,
    /// 64 hex chars.
    Sha256,
}

impl DigestAlg {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlg {
    type Err = DigestAlgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(DigestAlg::Sha1),
            "sha256" => Ok(DigestAlg::Sha256),
            _ => Err(DigestAlgError::InvalidAlgorithm),
        }
    }
}

/// Computes and checks the `s=` signature carried by style URLs.
///
/// Borrows the secret from the configuration it was built from; nothing here
/// copies key material.
#[derive(Debug)]
pub struct UrlSigner<'a> {
    secret: &'a Secret,
    algorithm: DigestAlg,
}

impl<'a> UrlSigner<'a> {
    /// Fails with [`EngineError::SecretNotSet`] when the secret is empty.
    pub fn new(secret: &'a Secret, algorithm: DigestAlg) -> EngineResult<Self> {
        if secret.is_empty() {
            return Err(EngineError::SecretNotSet);
        }
        Ok(Self { secret, algorithm })
    }

    /// Build a signer from a styles configuration. An absent secret is
    /// reported the same way as an empty one.
    pub fn from_config(config: &'a StylesConfig) -> EngineResult<Self> {
        let secret = config.secret.as_ref().ok_or(EngineError::SecretNotSet)?;
        Self::new(secret, config.algorithm)
    }

    /// Hex signature for a style name. Input is the registered name
    /// (single-escaped for dynamic styles), not the URL path segment.
    pub fn generate(&self, style_name: &str) -> String {
        let mut input = Vec::with_capacity(self.secret.expose().len() + style_name.len());
        input.extend_from_slice(self.secret.expose().as_bytes());
        input.extend_from_slice(style_name.as_bytes());
        match self.algorithm {
            DigestAlg::Sha1 => hex::encode(Sha1::digest(&input)),
            DigestAlg::Sha256 => hex::encode(Sha256::digest(&input)),
        }
    }

    /// Whether `signature` matches the expected signature for `style_name`.
    /// Comparison is exact; generated signatures are lowercase hex.
    pub fn verify(&self, style_name: &str, signature: &str) -> bool {
        self.generate(style_name) == signature
    }
}
