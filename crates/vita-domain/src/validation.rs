//! Structural validation for publications
//!
//! Validation runs at the editing boundary (forms, imports). The
//! aggregation and query layers assume structurally valid records and do
//! not revalidate.

use super::{Publication, PublicationType};
use serde::{Deserialize, Serialize};

/// Severity of a validation finding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a publication and return errors/warnings
pub fn validate_publication(publication: &Publication) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if publication.title.is_empty() {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if publication.authors.is_empty() {
        errors.push(ValidationError {
            field: "authors".to_string(),
            message: "At least one author is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if !(1900..=2100).contains(&publication.year) {
        errors.push(ValidationError {
            field: "year".to_string(),
            message: "Year should be between 1900 and 2100".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    // At most one of journal/conference may be set
    if publication.journal.is_some() && publication.conference.is_some() {
        errors.push(ValidationError {
            field: "venue".to_string(),
            message: "A publication should name a journal or a conference, not both".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    // Category-specific venue checks
    match publication.pub_type {
        PublicationType::Journal => {
            if publication.journal.is_none() {
                errors.push(ValidationError {
                    field: "journal".to_string(),
                    message: "Journal is recommended for journal articles".to_string(),
                    severity: ValidationSeverity::Warning,
                });
            }
        }
        PublicationType::Conference => {
            if publication.conference.is_none() {
                errors.push(ValidationError {
                    field: "conference".to_string(),
                    message: "Conference is recommended for conference papers".to_string(),
                    severity: ValidationSeverity::Warning,
                });
            }
        }
        PublicationType::Chapter => {
            if publication.book.is_none() {
                errors.push(ValidationError {
                    field: "book".to_string(),
                    message: "Containing book is recommended for chapters".to_string(),
                    severity: ValidationSeverity::Warning,
                });
            }
        }
        PublicationType::Book | PublicationType::Other => {}
    }

    // Identifier validation
    if let Some(ref doi) = publication.doi {
        if !doi.starts_with("10.") {
            errors.push(ValidationError {
                field: "doi".to_string(),
                message: "DOI should start with '10.'".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    errors
}

/// Check if a publication is valid (no errors)
pub fn is_valid(publication: &Publication) -> bool {
    validate_publication(publication)
        .iter()
        .all(|e| e.severity != ValidationSeverity::Error)
}
