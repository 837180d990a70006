//! Minting and serving signed dynamic-style URLs.
//!
//! `dynamic_url` is the outbound path: register the token, make sure the
//! rendition exists, sign the name. `handle_style_request` is the inbound
//! path: verify the signature before letting the request register or
//! process anything.

use url::Url;

use super::attachment::Attachment;
use super::error::{EngineError, EngineResult};
use super::naming;
use super::types::{StyleName, StylesConfig};
use super::urls;
use crate::crypto::signer::UrlSigner;

/// Derives signed URLs for dynamic styles against one configuration.
#[derive(Debug, Clone, Copy)]
pub struct UrlDeriver<'a> {
    config: &'a StylesConfig,
}

impl<'a> UrlDeriver<'a> {
    pub fn new(config: &'a StylesConfig) -> Self {
        Self { config }
    }

    /// Deriver over the process-wide configuration installed with
    /// [`crate::configure`].
    pub fn from_global() -> EngineResult<UrlDeriver<'static>> {
        let config = crate::domain::types::config()
            .ok_or_else(|| EngineError::Config("styles configuration is not set".to_string()))?;
        Ok(UrlDeriver { config })
    }

    /// Mint a signed URL for a raw style token.
    ///
    /// Registers the token (idempotently), processes the rendition if the
    /// store does not have it yet, then appends the `s=` signature over the
    /// registered name. The secret is checked first, so nothing is
    /// registered when signing cannot succeed anyway.
    pub fn dynamic_url(&self, attachment: &mut Attachment, token: &str) -> EngineResult<String> {
        let signer = UrlSigner::from_config(self.config)?;
        let name = attachment.register_dynamic(token)?;
        if !attachment.style_processed(&name) {
            attachment.process_dynamic_style(&name)?;
        }
        let url = attachment.url(&name);
        Ok(urls::append_query_param(&url, "s", &signer.generate(name.as_str())))
    }

    /// Check a signature against a style name (the registered,
    /// single-escaped form).
    pub fn verify(&self, style_name: &str, signature: &str) -> EngineResult<bool> {
        let signer = UrlSigner::from_config(self.config)?;
        Ok(signer.verify(style_name, signature))
    }

    /// Authorize an incoming style request and materialize its rendition.
    ///
    /// `style_segment` is the still-escaped path segment; decoding it once
    /// yields the registered style name the signature was minted over.
    /// Verification happens before registration, so a forged request leaves
    /// no trace in the registry or the store.
    pub fn handle_style_request(
        &self,
        attachment: &mut Attachment,
        style_segment: &str,
        signature: &str,
    ) -> EngineResult<StyleName> {
        let signer = UrlSigner::from_config(self.config)?;
        let style_name = naming::unescape_style_token(style_segment)?;
        if !signer.verify(&style_name, signature) {
            tracing::warn!(style = %style_name, "rejected style request with bad signature");
            return Err(EngineError::InvalidSignature);
        }
        let name = attachment.register_dynamic_name(&style_name)?;
        if !attachment.style_processed(&name) {
            attachment.process_dynamic_style(&name)?;
        }
        Ok(name)
    }
}

/// The pieces of an incoming style request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRequest {
    /// Style path segment exactly as it appeared, still escaped.
    pub style_segment: String,
    pub filename: String,
    /// Value of the `s` query parameter.
    pub signature: String,
}

impl StyleRequest {
    /// Split a request URL into its style segment, filename and signature.
    /// Accepts absolute URLs and root-relative paths. A URL without an `s`
    /// parameter can never verify, so it is rejected here.
    pub fn parse(raw: &str) -> EngineResult<Self> {
        let parsed = match Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                // Root-relative paths are the common case coming out of the
                // URL templates; give them a throwaway base.
                let base = Url::parse("http://attachment.invalid")
                    .map_err(|_| EngineError::Config("invalid URL".into()))?;
                base.join(raw)
                    .map_err(|_| EngineError::Config("invalid URL".into()))?
            }
            Err(_) => return Err(EngineError::Config("invalid URL".into())),
        };

        let segments: Vec<&str> = match parsed.path_segments() {
            Some(segments) => segments.collect(),
            None => Vec::new(),
        };
        if segments.len() < 2 {
            return Err(EngineError::Config(format!(
                "URL path has no style segment: {}",
                parsed.path()
            )));
        }
        let style_segment = segments[segments.len() - 2].to_string();
        let filename = segments[segments.len() - 1].to_string();

        let signature = parsed
            .query_pairs()
            .find(|(key, _)| key == "s")
            .map(|(_, value)| value.into_owned())
            .ok_or(EngineError::InvalidSignature)?;

        Ok(Self {
            style_segment,
            filename,
            signature,
        })
    }
}
