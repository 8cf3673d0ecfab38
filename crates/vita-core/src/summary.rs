//! Aggregate statistics over a publication collection
//!
//! `summarize` is a pure function: it never mutates its input, allocates
//! all output maps fresh, and yields deep-equal results for repeated calls
//! on the same input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vita_domain::{Publication, PublicationType};

/// Derived statistics for a publication collection.
///
/// Recomputed on demand; never persisted independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationSummary {
    pub total_publications: usize,
    pub journal_articles: usize,
    pub conference_proceedings: usize,
    pub books: usize,
    pub book_chapters: usize,
    pub other: usize,
    /// Sum of citation counts, with absent counts as zero.
    pub citation_count: u64,
    /// Count per year, keyed by the year rendered as text.
    pub publications_by_year: HashMap<String, usize>,
    /// Count per journal name; records without a journal contribute nothing.
    pub top_journals: HashMap<String, usize>,
    /// Count per conference name; records without a conference contribute nothing.
    pub top_conferences: HashMap<String, usize>,
    /// Records per co-author name, excluding the profile owner.
    pub co_authors: HashMap<String, usize>,
}

impl PublicationSummary {
    /// Per-category count.
    pub fn type_count(&self, pub_type: PublicationType) -> usize {
        match pub_type {
            PublicationType::Journal => self.journal_articles,
            PublicationType::Conference => self.conference_proceedings,
            PublicationType::Book => self.books,
            PublicationType::Chapter => self.book_chapters,
            PublicationType::Other => self.other,
        }
    }
}

/// Compute summary statistics for a publication collection.
///
/// `self_author` is the profile owner's name, excluded from the co-author
/// counts by exact, case-sensitive match.
pub fn summarize(publications: &[Publication], self_author: &str) -> PublicationSummary {
    let mut summary = PublicationSummary {
        total_publications: publications.len(),
        ..PublicationSummary::default()
    };

    for pub_ in publications {
        match pub_.pub_type {
            PublicationType::Journal => summary.journal_articles += 1,
            PublicationType::Conference => summary.conference_proceedings += 1,
            PublicationType::Book => summary.books += 1,
            PublicationType::Chapter => summary.book_chapters += 1,
            PublicationType::Other => summary.other += 1,
        }

        summary.citation_count += u64::from(pub_.citation_count());

        *summary
            .publications_by_year
            .entry(pub_.year.to_string())
            .or_insert(0) += 1;

        if let Some(journal) = &pub_.journal {
            *summary.top_journals.entry(journal.clone()).or_insert(0) += 1;
        }

        if let Some(conference) = &pub_.conference {
            *summary.top_conferences.entry(conference.clone()).or_insert(0) += 1;
        }

        // A record with no authors contributes nothing here; it never
        // aborts the aggregate.
        for author in &pub_.authors {
            if author != self_author {
                *summary.co_authors.entry(author.clone()).or_insert(0) += 1;
            }
        }
    }

    summary
}
