// crates/engine/src/domain/store.rs

use super::error::EngineResult;
use super::types::{AttachmentInfo, StyleDefinition, StyleName};

/// Trait implemented by storage backends (local filesystem today, object
/// stores later). The engine drives reprocessing and deletion through this
/// seam and never touches bytes itself.
pub trait AttachmentStore: Send {
    /// Produce the rendition for `style` from the attachment's original
    /// upload, replacing any previous output for that style.
    fn reprocess(&mut self, info: &AttachmentInfo, style: &StyleDefinition) -> EngineResult<()>;

    /// Remove the stored renditions for the given styles. Styles with no
    /// stored output are skipped, not errors.
    fn delete_styles(&mut self, info: &AttachmentInfo, names: &[StyleName]) -> EngineResult<()>;

    /// Whether a rendition for `style` currently exists in storage.
    fn exists(&self, info: &AttachmentInfo, style: &StyleName) -> bool;

    /// Names of dynamically minted styles already present in storage, used
    /// to re-seed a registry for a record the engine has seen before.
    /// Backends without cheap enumeration may return nothing.
    fn existing_dynamic_styles(&self, info: &AttachmentInfo) -> Vec<StyleName> {
        let _ = info;
        Vec::new()
    }
}
