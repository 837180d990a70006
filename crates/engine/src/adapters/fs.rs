// crates/engine/src/adapters/fs.rs

//! Filesystem-backed attachment store.
//!
//! Layout mirrors the default URL template:
//! `root/collection/field/id_partition/style/filename`, with the original
//! upload kept under the `original` style directory. Rendition content is
//! produced by a pluggable transform; the default passes bytes through
//! unchanged, for hosts that do their image work elsewhere.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::error::{EngineError, EngineResult};
use crate::domain::naming;
use crate::domain::store::AttachmentStore;
use crate::domain::types::{AttachmentInfo, EngineDefaults, StyleDefinition, StyleName};
use crate::domain::urls::id_partition;

/// Produces rendition bytes from the original upload for one style.
pub type StyleTransform =
    Box<dyn Fn(&[u8], &StyleDefinition) -> EngineResult<Vec<u8>> + Send + Sync>;

pub struct FsStore {
    root: PathBuf,
    transform: StyleTransform,
}

impl FsStore {
    /// Store rooted at `root` with the identity transform.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_transform(root, Box::new(|bytes, _| Ok(bytes.to_vec())))
    }

    /// Store with a caller-provided transform (an image resizer, typically).
    pub fn with_transform(root: impl Into<PathBuf>, transform: StyleTransform) -> Self {
        Self {
            root: root.into(),
            transform,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_dir(&self, info: &AttachmentInfo) -> PathBuf {
        self.root
            .join(&info.collection)
            .join(&info.field)
            .join(id_partition(info.id))
    }

    fn style_dir(&self, info: &AttachmentInfo, style: &str) -> PathBuf {
        self.record_dir(info).join(style)
    }

    fn rendition_path(&self, info: &AttachmentInfo, style: &str) -> EngineResult<PathBuf> {
        let filename = info.filename.as_deref().ok_or_else(|| {
            EngineError::Config(format!(
                "attachment {}/{} id={} has no file",
                info.collection, info.field, info.id
            ))
        })?;
        Ok(self.style_dir(info, style).join(filename))
    }

    /// Put the original upload into place so styles can be processed from
    /// it later.
    pub fn attach_original(&mut self, info: &AttachmentInfo, bytes: &[u8]) -> EngineResult<()> {
        let path = self.rendition_path(info, EngineDefaults::ORIGINAL_STYLE)?;
        write_atomic(&path, bytes)
    }
}

// Renditions are served straight off disk, so they appear atomically:
// write to a temp file in the target directory, then rename into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> EngineResult<()> {
    let dir = path
        .parent()
        .ok_or_else(|| EngineError::Config("rendition path has no parent".into()))?;
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| EngineError::Io(e.error))?;
    Ok(())
}

impl AttachmentStore for FsStore {
    fn reprocess(&mut self, info: &AttachmentInfo, style: &StyleDefinition) -> EngineResult<()> {
        let original = self.rendition_path(info, EngineDefaults::ORIGINAL_STYLE)?;
        let bytes = fs::read(&original)?;
        let rendered = (self.transform)(&bytes, style)?;
        let path = self.rendition_path(info, style.name.as_str())?;
        write_atomic(&path, &rendered)?;
        tracing::debug!(style = %style.name, path = %path.display(), "wrote rendition");
        Ok(())
    }

    fn delete_styles(&mut self, info: &AttachmentInfo, names: &[StyleName]) -> EngineResult<()> {
        for name in names {
            let dir = self.style_dir(info, name.as_str());
            match fs::remove_dir_all(&dir) {
                Ok(()) => {
                    tracing::debug!(style = %name, "removed rendition directory");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn exists(&self, info: &AttachmentInfo, style: &StyleName) -> bool {
        self.rendition_path(info, style.as_str())
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn existing_dynamic_styles(&self, info: &AttachmentInfo) -> Vec<StyleName> {
        let mut names = Vec::new();
        let entries = match fs::read_dir(self.record_dir(info)) {
            Ok(entries) => entries,
            Err(_) => return names,
        };
        for entry in entries.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if naming::is_dynamic_style_name(name) {
                    names.push(StyleName::new(name));
                }
            }
        }
        names.sort();
        names
    }
}

impl std::fmt::Debug for FsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsStore").field("root", &self.root).finish()
    }
}
