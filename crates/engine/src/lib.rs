// crates/engine/src/lib.rs

//! Public facade for the Restyle Engine.
//! Exposes a stable API and re-exports types for consumers (web hosts,
//! background jobs).
//!
//! Styles come in two flavors: declared up front on an
//! [`AttachmentDefinition`], or minted dynamically at request time from a
//! raw geometry token. Dynamic URLs carry an `s=` signature over the
//! registered style name; inbound requests are verified before anything is
//! registered or processed.

pub mod adapters;
pub mod crypto;
pub mod domain;

/// High-level helpers for the common signed-dynamic-URL path.
/// Internally build a `UrlDeriver`. These give web hosts a simple entrypoint.

pub fn dynamic_url(
    config: &StylesConfig,
    attachment: &mut Attachment,
    token: &str,
) -> EngineResult<String> {
    UrlDeriver::new(config).dynamic_url(attachment, token)
}

pub fn handle_style_request(
    config: &StylesConfig,
    attachment: &mut Attachment,
    style_segment: &str,
    signature: &str,
) -> EngineResult<StyleName> {
    UrlDeriver::new(config).handle_style_request(attachment, style_segment, signature)
}

/// Parse a request URL and serve it in one step: split out the style
/// segment and signature, then authorize and materialize the style.
pub fn authorize_style_request(
    config: &StylesConfig,
    attachment: &mut Attachment,
    url: &str,
) -> EngineResult<StyleName> {
    let request = StyleRequest::parse(url)?;
    UrlDeriver::new(config).handle_style_request(
        attachment,
        &request.style_segment,
        &request.signature,
    )
}

// Re-exports for convenience
pub use crypto::secret::Secret;
pub use crypto::signer::{DigestAlg, DigestAlgError, UrlSigner};
pub use domain::attachment::Attachment;
pub use domain::delete_queue::DeleteQueue;
pub use domain::deriver::{StyleRequest, UrlDeriver};
pub use domain::error::{EngineError, EngineResult};
pub use domain::naming::{dynamic_style_name, DYNAMIC_STYLE_PREFIX};
pub use domain::registry::StyleRegistry;
pub use domain::store::AttachmentStore;
pub use domain::types::{
    config, configure, AttachmentDefinition, AttachmentInfo, EngineDefaults, RecordInfo,
    StyleDefinition, StyleName, StylesConfig,
};
pub use domain::urls::{id_partition, UrlTemplate};

#[cfg(feature = "fs")]
pub use adapters::fs::FsStore;
