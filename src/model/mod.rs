//! Domain model of a scanned document library.

mod modified_time;

pub use modified_time::ModifiedTime;

use crate::types::ListId;

/// Metadata of a document library, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMetadata {
    pub id: ListId,
    /// Display title; not necessarily equal to the internal URL name.
    pub title: String,
}

/// A single document or folder entry in a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItem {
    /// Leaf file name (`FileLeafRef`)
    pub name: Option<String>,
    /// Item title; often empty for plain documents
    pub title: Option<String>,
    /// Server-relative path (`FileRef`)
    pub path: String,
    pub modified_at: Option<ModifiedTime>,
    /// Display name of the last editor
    pub editor_name: String,
}

impl LibraryItem {
    /// Leaf name, falling back to the title, falling back to nothing.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.title.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// Everything one scan retrieves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub metadata: LibraryMetadata,
    pub items: Vec<LibraryItem>,
}

impl ScanResult {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
