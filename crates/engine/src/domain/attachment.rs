// crates/engine/src/domain/attachment.rs

//! One attachment bound to one record: the merged style registry, the
//! delete queue, and the storage backend behind it.

use std::collections::BTreeMap;

use super::delete_queue::DeleteQueue;
use super::error::{EngineError, EngineResult};
use super::naming;
use super::registry::StyleRegistry;
use super::store::AttachmentStore;
use super::types::{AttachmentDefinition, AttachmentInfo, RecordInfo, StyleDefinition, StyleName};
use super::urls::UrlTemplate;

impl AttachmentDefinition {
    /// Bind this definition to one record, backed by `store`.
    ///
    /// Dynamic styles the store already holds for the record are registered
    /// up front so previously issued URLs keep resolving; stored names that
    /// do not decode are skipped with a warning.
    pub fn attachment(&self, record: RecordInfo, store: Box<dyn AttachmentStore>) -> Attachment {
        let info = AttachmentInfo {
            collection: self.collection.clone(),
            field: self.field.clone(),
            id: record.id,
            filename: record.filename,
        };
        let mut registry = StyleRegistry::from_static(self.styles.iter().cloned());
        for name in store.existing_dynamic_styles(&info) {
            match naming::dynamic_style_token(name.as_str()) {
                Ok(token) => {
                    registry.insert_dynamic(&token);
                }
                Err(_) => {
                    tracing::warn!(style = %name, "skipping stored style with undecodable name");
                }
            }
        }
        Attachment {
            info,
            dynamic: self.dynamic,
            registry,
            queued_for_delete: DeleteQueue::new(),
            store,
            url_template: UrlTemplate::new(self.url_template.clone()),
            missing_url_template: UrlTemplate::new(self.missing_url_template.clone()),
        }
    }
}

/// A single attached file and everything the engine tracks for it.
pub struct Attachment {
    info: AttachmentInfo,
    dynamic: bool,
    registry: StyleRegistry,
    queued_for_delete: DeleteQueue,
    store: Box<dyn AttachmentStore>,
    url_template: UrlTemplate,
    missing_url_template: UrlTemplate,
}

impl Attachment {
    pub fn info(&self) -> &AttachmentInfo {
        &self.info
    }

    /// Whether request-time dynamic styles are allowed on this attachment.
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Present when a file has been uploaded, mirroring the host's notion
    /// of an attachment existing (the filename being set).
    pub fn is_present(&self) -> bool {
        self.info.filename.is_some()
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Every known style, declared and dynamic merged (declared wins).
    pub fn styles(&self) -> BTreeMap<StyleName, StyleDefinition> {
        self.registry.styles()
    }

    /// Only the dynamically minted styles.
    pub fn dynamic_styles(&self) -> BTreeMap<StyleName, StyleDefinition> {
        self.registry.dynamic_styles()
    }

    /// Register a dynamic style from its raw token, returning the name it
    /// is known under. Registering an existing token is a no-op.
    pub fn register_dynamic(&mut self, token: &str) -> EngineResult<StyleName> {
        self.ensure_dynamic()?;
        Ok(self.registry.insert_dynamic(token))
    }

    /// Register a dynamic style from its already-derived name, as presented
    /// by an incoming URL. The name must carry the dynamic prefix and
    /// decode cleanly back to a token.
    pub fn register_dynamic_name(&mut self, name: &str) -> EngineResult<StyleName> {
        self.ensure_dynamic()?;
        let token = naming::dynamic_style_token(name)?;
        Ok(self.registry.insert_dynamic(&token))
    }

    fn ensure_dynamic(&self) -> EngineResult<()> {
        if !self.dynamic {
            return Err(EngineError::Config(format!(
                "attachment {}/{} does not allow dynamic styles",
                self.info.collection, self.info.field
            )));
        }
        Ok(())
    }

    /// Whether the rendition for `name` exists in storage. A style can be
    /// registered without being processed yet; a failed processing attempt
    /// leaves it that way and the next request retries.
    pub fn style_processed(&self, name: &StyleName) -> bool {
        self.store.exists(&self.info, name)
    }

    /// Run a registered style through the store, regenerating its rendition
    /// from the original upload.
    pub fn process_dynamic_style(&mut self, name: &StyleName) -> EngineResult<()> {
        let style = self
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownStyle(name.to_string()))?;
        tracing::info!(style = %name, id = self.info.id, "reprocessing style");
        self.store.reprocess(&self.info, &style)
    }

    /// Public URL path for a style, unsigned.
    ///
    /// Dynamic style names are percent-escaped once more on the way into
    /// the path; decoding the segment therefore yields the registered name,
    /// not the raw token. Attachments without a file render the
    /// missing-file template instead.
    pub fn url(&self, style: &StyleName) -> String {
        let segment = if naming::is_dynamic_style_name(style.as_str()) {
            naming::escape_style_token(style.as_str())
        } else {
            style.as_str().to_string()
        };
        match &self.info.filename {
            Some(filename) => self.url_template.render(&self.info, &segment, filename),
            None => self
                .missing_url_template
                .render(&self.info, &segment, "missing.png"),
        }
    }

    /// Add styles to the delete queue without touching storage yet.
    pub fn queue_styles_for_delete(&mut self, styles: impl IntoIterator<Item = StyleName>) {
        self.queued_for_delete.queue(styles);
    }

    /// Hand everything queued to the store, clearing the queue on success.
    /// A failed flush keeps the queue so the deletes can be retried.
    pub fn flush_deletes(&mut self) -> EngineResult<()> {
        if self.queued_for_delete.is_empty() {
            return Ok(());
        }
        let queued: Vec<StyleName> = self.queued_for_delete.as_slice().to_vec();
        self.store.delete_styles(&self.info, &queued)?;
        tracing::info!(count = queued.len(), id = self.info.id, "flushed queued style deletes");
        self.queued_for_delete.drain();
        Ok(())
    }

    /// Queue and flush in one step. Anything queued earlier goes out in the
    /// same flush.
    pub fn delete_styles(&mut self, styles: impl IntoIterator<Item = StyleName>) -> EngineResult<()> {
        self.queue_styles_for_delete(styles);
        self.flush_deletes()
    }

    pub fn delete_queue(&self) -> &DeleteQueue {
        &self.queued_for_delete
    }

    /// Mutable access for hosts that seed the queue before the engine adds
    /// its own entries.
    pub fn delete_queue_mut(&mut self) -> &mut DeleteQueue {
        &mut self.queued_for_delete
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("info", &self.info)
            .field("dynamic", &self.dynamic)
            .field("styles", &self.registry.len())
            .field("queued_for_delete", &self.queued_for_delete.len())
            .finish()
    }
}
