//! List query pipeline: search filter, type filter, stable sort
//!
//! `query` runs two sequential stages over a borrowed publication slice and
//! returns a freshly built, ordered list of clones. The input is never
//! mutated; an empty input or a filter matching nothing yields an empty
//! list, not an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use vita_domain::{Publication, PublicationType};

use crate::text::compare_text;

/// Sort field for the display list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Year,
    Citations,
    Title,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Category filter: everything, or one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    All,
    Only(PublicationType),
}

impl TypeFilter {
    fn matches(&self, pub_type: PublicationType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == pub_type,
        }
    }
}

/// Parameters for one query invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search_text: String,
    pub type_filter: TypeFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for QueryParams {
    /// The list's initial state: everything, newest year first.
    fn default() -> Self {
        Self {
            search_text: String::new(),
            type_filter: TypeFilter::All,
            sort_key: SortKey::Year,
            sort_order: SortOrder::Descending,
        }
    }
}

/// Produce the filtered, ordered display list for a publication collection.
pub fn query(publications: &[Publication], params: &QueryParams) -> Vec<Publication> {
    let needle = params.search_text.to_lowercase();

    let mut result: Vec<Publication> = publications
        .iter()
        .filter(|p| params.type_filter.matches(p.pub_type) && matches_search(p, &needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable; descending reverses the comparator rather
    // than the sorted list, so ties keep their input order either way.
    result.sort_by(|a, b| {
        let ord = compare_by_key(a, b, params.sort_key);
        match params.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });

    result
}

/// Case-insensitive substring match against title, any author, abstract,
/// journal, and conference. `needle` must already be lowercased; an empty
/// needle matches everything.
fn matches_search(pub_: &Publication, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    pub_.title.to_lowercase().contains(needle)
        || pub_
            .authors
            .iter()
            .any(|a| a.to_lowercase().contains(needle))
        || field_contains(&pub_.abstract_text, needle)
        || field_contains(&pub_.journal, needle)
        || field_contains(&pub_.conference, needle)
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_ref()
        .is_some_and(|v| v.to_lowercase().contains(needle))
}

fn compare_by_key(a: &Publication, b: &Publication, key: SortKey) -> Ordering {
    match key {
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Citations => a.citation_count().cmp(&b.citation_count()),
        SortKey::Title => compare_text(&a.title, &b.title),
    }
}
