//! Pre-shaped analytics rows for summary views
//!
//! The summary's maps carry no ordering, so chart and list consumers get
//! display-ready rows shaped here: year series ascending, top-N venue and
//! co-author rankings, and the category distribution with human-readable
//! labels and empty buckets dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vita_domain::{Publication, PublicationType};

use crate::summary::PublicationSummary;

/// One bar of the publication timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: String,
    pub count: usize,
}

/// One slice of the category distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlice {
    pub label: String,
    pub count: usize,
}

/// One row of a ranked name/count listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

/// Publication counts per year, ascending by numeric year.
pub fn year_series(summary: &PublicationSummary) -> Vec<YearCount> {
    let mut series: Vec<YearCount> = summary
        .publications_by_year
        .iter()
        .map(|(year, count)| YearCount {
            year: year.clone(),
            count: *count,
        })
        .collect();
    series.sort_by_key(|row| row.year.parse::<i32>().unwrap_or_default());
    series
}

/// Category distribution with display labels; empty buckets are dropped.
pub fn type_distribution(summary: &PublicationSummary) -> Vec<TypeSlice> {
    PublicationType::ALL
        .iter()
        .map(|t| TypeSlice {
            label: t.display_name().to_string(),
            count: summary.type_count(*t),
        })
        .filter(|slice| slice.count > 0)
        .collect()
}

/// Display-ready row for the summary's publication list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRow {
    pub title: String,
    /// "Authors, joined (Year)"
    pub author_line: String,
    /// Venue plus DOI, or a placeholder when no venue is known.
    pub venue_line: String,
}

/// Pre-shaped rows for the summary's publication list, in input order.
pub fn publication_rows(publications: &[Publication]) -> Vec<PublicationRow> {
    publications
        .iter()
        .map(|p| {
            let mut venue_line = p.venue().unwrap_or("No venue information").to_string();
            if let Some(doi) = &p.doi {
                venue_line.push_str(", DOI: ");
                venue_line.push_str(doi);
            }
            PublicationRow {
                title: p.title.clone(),
                author_line: format!("{} ({})", p.authors.join(", "), p.year),
                venue_line,
            }
        })
        .collect()
}

/// The `limit` highest counts from a name/count map, count descending with
/// name ascending as the deterministic tiebreak.
pub fn top_counts(counts: &HashMap<String, usize>, limit: usize) -> Vec<NamedCount> {
    let mut rows: Vec<NamedCount> = counts
        .iter()
        .map(|(name, count)| NamedCount {
            name: name.clone(),
            count: *count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows.truncate(limit);
    rows
}
