//! Catalog store: the canonical in-memory publication list
//!
//! Edits are replacement-style: `update` and `remove` rebuild the list
//! rather than patching in place, so readers holding a snapshot never see
//! a half-edited record. Persistence is a JSON snapshot of the whole list.

use std::path::Path;

use tracing::{debug, info};
use vita_domain::Publication;

/// Errors from the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("publication not found: {0}")]
    NotFound(String),

    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Owner of the publication list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    publications: Vec<Publication>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from an existing list.
    pub fn from_publications(publications: Vec<Publication>) -> Self {
        Self { publications }
    }

    /// Borrow the current list.
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    /// Look up a publication by id.
    pub fn get(&self, id: &str) -> Option<&Publication> {
        self.publications.iter().find(|p| p.id == id)
    }

    /// Add a publication at the front of the list (newest first).
    pub fn add(&mut self, publication: Publication) {
        debug!(id = %publication.id, title = %publication.title, "adding publication");
        self.publications.insert(0, publication);
    }

    /// Replace the publication with the matching id, keeping list order.
    pub fn update(&mut self, publication: Publication) -> Result<(), StoreError> {
        if self.get(&publication.id).is_none() {
            return Err(StoreError::NotFound(publication.id));
        }
        debug!(id = %publication.id, "updating publication");
        let old = std::mem::take(&mut self.publications);
        self.publications = old
            .into_iter()
            .map(|p| {
                if p.id == publication.id {
                    publication.clone()
                } else {
                    p
                }
            })
            .collect();
        Ok(())
    }

    /// Remove the publication with the given id.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!(id = %id, "removing publication");
        self.publications.retain(|p| p.id != id);
        Ok(())
    }

    /// Load a catalog from a JSON snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let publications: Vec<Publication> = serde_json::from_str(&data)?;
        info!(
            path = %path.as_ref().display(),
            count = publications.len(),
            "loaded catalog snapshot"
        );
        Ok(Self { publications })
    }

    /// Write the catalog to a JSON snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.publications)?;
        std::fs::write(path.as_ref(), data)?;
        info!(
            path = %path.as_ref().display(),
            count = self.publications.len(),
            "saved catalog snapshot"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_domain::PublicationType;

    fn make(title: &str) -> Publication {
        Publication::new(title, 2023, PublicationType::Journal)
            .with_authors(vec!["Jane Smith".to_string()])
    }

    #[test]
    fn add_prepends() {
        let mut catalog = Catalog::new();
        catalog.add(make("older"));
        catalog.add(make("newer"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.publications()[0].title, "newer");
        assert_eq!(catalog.publications()[1].title, "older");
    }

    #[test]
    fn update_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.add(make("first"));
        catalog.add(make("second"));

        let mut edited = catalog.publications()[1].clone();
        edited.title = "first, revised".to_string();
        edited.citations = Some(3);
        catalog.update(edited).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.publications()[0].title, "second");
        assert_eq!(catalog.publications()[1].title, "first, revised");
        assert_eq!(catalog.publications()[1].citations, Some(3));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut catalog = Catalog::new();
        catalog.add(make("only"));
        let stray = make("stray");
        let err = catalog.update(stray).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn remove_by_id() {
        let mut catalog = Catalog::new();
        catalog.add(make("keep"));
        catalog.add(make("drop"));
        let drop_id = catalog.publications()[0].id.clone();

        catalog.remove(&drop_id).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.publications()[0].title, "keep");

        let err = catalog.remove(&drop_id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn get_by_id() {
        let mut catalog = Catalog::new();
        catalog.add(make("target"));
        let id = catalog.publications()[0].id.clone();
        assert_eq!(catalog.get(&id).unwrap().title, "target");
        assert!(catalog.get("no-such-id").is_none());
    }

    #[test]
    fn snapshot_round_trip() {
        let mut catalog = Catalog::new();
        catalog.add(make("saved"));
        catalog.add(
            make("cited")
                .with_journal("Nature")
                .with_citations(12)
                .with_tags(vec!["ml".to_string()]),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        catalog.save(&path).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.publications(), catalog.publications());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn load_malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
