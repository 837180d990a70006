use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

use restyle_engine as re;

/// Shared signing secret for tests.
pub const SECRET: &str = "abc123";

/// Styles configuration with the shared test secret and default algorithm.
pub fn test_config() -> re::StylesConfig {
    re::StylesConfig::new(SECRET)
}

/// One call the engine made against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Reprocess { style: String, geometry: String },
    Delete { names: Vec<String> },
}

pub type CallLog = Arc<Mutex<Vec<StoreCall>>>;

/// In-memory store that records every call. Styles reprocessed through it
/// count as existing afterwards, so repeat requests can be observed to skip
/// processing.
pub struct RecordingStore {
    calls: CallLog,
    processed: BTreeSet<String>,
}

impl RecordingStore {
    /// Fresh store plus a handle onto its call log.
    pub fn boxed() -> (Box<dyn re::AttachmentStore>, CallLog) {
        Self::boxed_with_existing(&[])
    }

    /// Store that already holds renditions for the given style names.
    pub fn boxed_with_existing(styles: &[&str]) -> (Box<dyn re::AttachmentStore>, CallLog) {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let store = RecordingStore {
            calls: Arc::clone(&calls),
            processed: styles.iter().map(|s| s.to_string()).collect(),
        };
        (Box::new(store), calls)
    }
}

impl re::AttachmentStore for RecordingStore {
    fn reprocess(
        &mut self,
        _info: &re::AttachmentInfo,
        style: &re::StyleDefinition,
    ) -> re::EngineResult<()> {
        self.calls.lock().unwrap().push(StoreCall::Reprocess {
            style: style.name.to_string(),
            geometry: style.geometry.clone(),
        });
        self.processed.insert(style.name.to_string());
        Ok(())
    }

    fn delete_styles(
        &mut self,
        _info: &re::AttachmentInfo,
        names: &[re::StyleName],
    ) -> re::EngineResult<()> {
        self.calls.lock().unwrap().push(StoreCall::Delete {
            names: names.iter().map(|n| n.to_string()).collect(),
        });
        for name in names {
            self.processed.remove(name.as_str());
        }
        Ok(())
    }

    fn exists(&self, _info: &re::AttachmentInfo, style: &re::StyleName) -> bool {
        self.processed.contains(style.as_str())
    }

    fn existing_dynamic_styles(&self, _info: &re::AttachmentInfo) -> Vec<re::StyleName> {
        self.processed
            .iter()
            .filter(|name| name.starts_with(re::DYNAMIC_STYLE_PREFIX))
            .map(|name| re::StyleName::new(name.clone()))
            .collect()
    }
}

/// Store that fails a configured number of reprocess and delete calls
/// before behaving like `RecordingStore`. A failed reprocess leaves no
/// rendition behind.
pub struct FailingStore {
    calls: CallLog,
    processed: BTreeSet<String>,
    reprocess_failures: usize,
    delete_failures: usize,
}

impl FailingStore {
    /// Store whose next `reprocess_failures` reprocess calls and next
    /// `delete_failures` delete calls fail, plus a handle onto its call log.
    pub fn boxed(
        reprocess_failures: usize,
        delete_failures: usize,
    ) -> (Box<dyn re::AttachmentStore>, CallLog) {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let store = FailingStore {
            calls: Arc::clone(&calls),
            processed: BTreeSet::new(),
            reprocess_failures,
            delete_failures,
        };
        (Box::new(store), calls)
    }

    fn disk_error() -> re::EngineError {
        re::EngineError::Io(io::Error::new(io::ErrorKind::Other, "disk unavailable"))
    }
}

impl re::AttachmentStore for FailingStore {
    fn reprocess(
        &mut self,
        _info: &re::AttachmentInfo,
        style: &re::StyleDefinition,
    ) -> re::EngineResult<()> {
        self.calls.lock().unwrap().push(StoreCall::Reprocess {
            style: style.name.to_string(),
            geometry: style.geometry.clone(),
        });
        if self.reprocess_failures > 0 {
            self.reprocess_failures -= 1;
            return Err(Self::disk_error());
        }
        self.processed.insert(style.name.to_string());
        Ok(())
    }

    fn delete_styles(
        &mut self,
        _info: &re::AttachmentInfo,
        names: &[re::StyleName],
    ) -> re::EngineResult<()> {
        self.calls.lock().unwrap().push(StoreCall::Delete {
            names: names.iter().map(|n| n.to_string()).collect(),
        });
        if self.delete_failures > 0 {
            self.delete_failures -= 1;
            return Err(Self::disk_error());
        }
        for name in names {
            self.processed.remove(name.as_str());
        }
        Ok(())
    }

    fn exists(&self, _info: &re::AttachmentInfo, style: &re::StyleName) -> bool {
        self.processed.contains(style.as_str())
    }
}

/// Definition used throughout: `photos/images` with one declared thumb
/// style and dynamic styles switched on.
pub fn photo_definition() -> re::AttachmentDefinition {
    let mut def = re::AttachmentDefinition::new("photos", "images");
    def.styles
        .push(re::StyleDefinition::new_static("thumb", "100x100>"));
    def.dynamic = true;
    def
}

/// Record id 1 with `rails.png` attached, bound through `photo_definition`.
pub fn rails_photo(store: Box<dyn re::AttachmentStore>) -> re::Attachment {
    photo_definition().attachment(
        re::RecordInfo {
            id: 1,
            filename: Some("rails.png".to_string()),
        },
        store,
    )
}
