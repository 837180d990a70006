use super::types::StyleName;

/// Styles waiting to be deleted from storage.
///
/// Queueing is additive: any styles already queued (typically by the host
/// application marking renditions obsolete) survive further `queue` calls,
/// and everything goes out together on the next flush.
#[derive(Debug, Clone, Default)]
pub struct DeleteQueue {
    queued: Vec<StyleName>,
}

impl DeleteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue pre-populated by the host before the engine adds its own
    /// entries.
    pub fn seeded(styles: impl IntoIterator<Item = StyleName>) -> Self {
        let mut queue = Self::new();
        queue.queue(styles);
        queue
    }

    /// Append styles, keeping arrival order and dropping duplicates.
    pub fn queue(&mut self, styles: impl IntoIterator<Item = StyleName>) {
        for style in styles {
            if !self.queued.contains(&style) {
                self.queued.push(style);
            }
        }
    }

    /// Take everything queued, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<StyleName> {
        std::mem::take(&mut self.queued)
    }

    pub fn as_slice(&self) -> &[StyleName] {
        &self.queued
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}
