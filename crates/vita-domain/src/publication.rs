//! Publication domain model

use serde::{Deserialize, Serialize};

/// Category of a catalogued work.
///
/// The set is closed; anything that does not match one of the four named
/// categories lands in `Other`, both when parsing strings and when
/// deserializing foreign data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    Journal,
    Conference,
    Book,
    Chapter,
    #[serde(other)]
    Other,
}

impl PublicationType {
    /// All categories in display order.
    pub const ALL: [PublicationType; 5] = [
        PublicationType::Journal,
        PublicationType::Conference,
        PublicationType::Book,
        PublicationType::Chapter,
        PublicationType::Other,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationType::Journal => "journal",
            PublicationType::Conference => "conference",
            PublicationType::Book => "book",
            PublicationType::Chapter => "chapter",
            PublicationType::Other => "other",
        }
    }

    /// Human-readable label for list headers and charts
    pub fn display_name(&self) -> &'static str {
        match self {
            PublicationType::Journal => "Journal Article",
            PublicationType::Conference => "Conference Paper",
            PublicationType::Book => "Book",
            PublicationType::Chapter => "Book Chapter",
            PublicationType::Other => "Other",
        }
    }

    /// Parse from a string. Total: unknown values map to `Other`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "journal" => PublicationType::Journal,
            "conference" => PublicationType::Conference,
            "book" => PublicationType::Book,
            "chapter" => PublicationType::Chapter,
            _ => PublicationType::Other,
        }
    }
}

/// A publication (journal article, conference paper, book, chapter, etc.)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    /// Ordered author names; the first entry is the submitting author.
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Citation count; `None` means "not yet known", which aggregates as 0
    /// but displays differently from an explicit 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
    #[serde(rename = "type")]
    pub pub_type: PublicationType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Publication {
    /// Create a new publication with required fields
    pub fn new(title: impl Into<String>, year: i32, pub_type: PublicationType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            authors: Vec::new(),
            journal: None,
            conference: None,
            book: None,
            year,
            doi: None,
            url: None,
            abstract_text: None,
            citations: None,
            pub_type,
            tags: Vec::new(),
        }
    }

    /// Builder method to set the author list
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Builder method to set the journal
    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    /// Builder method to set the conference
    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    /// Builder method to set the containing book title
    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Builder method to set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Builder method to set the abstract
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    /// Builder method to set the citation count
    pub fn with_citations(mut self, citations: u32) -> Self {
        self.citations = Some(citations);
        self
    }

    /// Builder method to set the tag list
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Citation count with absent treated as zero
    pub fn citation_count(&self) -> u32 {
        self.citations.unwrap_or(0)
    }

    /// Primary venue for display: journal, else conference
    pub fn venue(&self) -> Option<&str> {
        self.journal.as_deref().or(self.conference.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_new() {
        let pub_ = Publication::new("Test Paper", 2024, PublicationType::Journal);
        assert_eq!(pub_.title, "Test Paper");
        assert_eq!(pub_.year, 2024);
        assert!(pub_.authors.is_empty());
        assert!(pub_.citations.is_none());
        assert!(!pub_.id.is_empty());
    }

    #[test]
    fn test_citation_count_absent_is_zero() {
        let pub_ = Publication::new("Test", 2024, PublicationType::Journal);
        assert_eq!(pub_.citation_count(), 0);
        assert_eq!(pub_.with_citations(7).citation_count(), 7);
    }

    #[test]
    fn test_venue_prefers_journal() {
        let pub_ = Publication::new("Test", 2024, PublicationType::Journal)
            .with_journal("Nature")
            .with_conference("NeurIPS");
        assert_eq!(pub_.venue(), Some("Nature"));

        let conf_only = Publication::new("Test", 2024, PublicationType::Conference)
            .with_conference("NeurIPS");
        assert_eq!(conf_only.venue(), Some("NeurIPS"));

        let none = Publication::new("Test", 2024, PublicationType::Book);
        assert_eq!(none.venue(), None);
    }

    #[test]
    fn test_type_from_str_is_total() {
        assert_eq!(PublicationType::from_str("journal"), PublicationType::Journal);
        assert_eq!(PublicationType::from_str("Chapter"), PublicationType::Chapter);
        assert_eq!(PublicationType::from_str("preprint"), PublicationType::Other);
        assert_eq!(PublicationType::from_str(""), PublicationType::Other);
    }

    #[test]
    fn test_type_serde_lowercase() {
        let json = serde_json::to_string(&PublicationType::Chapter).unwrap();
        assert_eq!(json, "\"chapter\"");
        let back: PublicationType = serde_json::from_str("\"conference\"").unwrap();
        assert_eq!(back, PublicationType::Conference);
    }

    #[test]
    fn test_type_serde_unknown_maps_to_other() {
        let back: PublicationType = serde_json::from_str("\"whitepaper\"").unwrap();
        assert_eq!(back, PublicationType::Other);
    }

    #[test]
    fn test_publication_serde_round_trip() {
        let pub_ = Publication::new("A Great Paper", 2023, PublicationType::Journal)
            .with_authors(vec!["Jane Smith".to_string(), "Bob Lee".to_string()])
            .with_journal("Nature")
            .with_doi("10.1234/test")
            .with_citations(12)
            .with_tags(vec!["ml".to_string()]);

        let json = serde_json::to_string(&pub_).unwrap();
        assert!(json.contains("\"type\":\"journal\""));
        assert!(!json.contains("conference"));

        let back: Publication = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pub_);
    }

    #[test]
    fn test_publication_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "42",
            "title": "Minimal",
            "authors": ["Solo Author"],
            "year": 2020,
            "type": "other"
        }"#;
        let pub_: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(pub_.pub_type, PublicationType::Other);
        assert!(pub_.citations.is_none());
        assert!(pub_.tags.is_empty());
    }
}
