use super::config::EngineDefaults;
use super::style::StyleDefinition;

/// Identity of one stored attachment: which collection and field it belongs
/// to, the owning record id, and the uploaded filename (if any file is
/// attached at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    pub collection: String,
    pub field: String,
    pub id: u64,
    pub filename: Option<String>,
}

/// The record side of an attachment: the owning row's id and the stored
/// filename. Combined with an [`AttachmentDefinition`] this is everything
/// needed to address the files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    pub id: u64,
    pub filename: Option<String>,
}

/// Declares how one attachment field behaves: its addressing pair
/// (`collection`/`field`), the styles processed at upload time, whether
/// request-time dynamic styles are allowed, and the URL templates.
#[derive(Debug, Clone)]
pub struct AttachmentDefinition {
    pub collection: String,
    pub field: String,
    pub styles: Vec<StyleDefinition>,
    pub dynamic: bool,
    pub url_template: String,
    pub missing_url_template: String,
}

impl AttachmentDefinition {
    /// Opinionated defaults; caller supplies the addressing pair. Styles are
    /// added by pushing onto `styles`, dynamic minting is opt-in via
    /// `dynamic`.
    pub fn new(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            styles: Vec::new(),
            dynamic: false,
            url_template: EngineDefaults::URL_TEMPLATE.to_string(),
            missing_url_template: EngineDefaults::MISSING_URL_TEMPLATE.to_string(),
        }
    }
}
