//! Plain-text report export
//!
//! Serializes a summary plus the raw publication list into the
//! human-readable report offered behind the summary view's export button.

use std::fmt::Write;

use vita_domain::Publication;

use crate::summary::PublicationSummary;

/// Format one publication as a citation line:
/// "Authors. (Year). Title." plus venue and DOI suffixes when present.
pub fn format_citation(pub_: &Publication) -> String {
    let mut citation = format!(
        "{}. ({}). {}.",
        pub_.authors.join(", "),
        pub_.year,
        pub_.title
    );
    if let Some(journal) = &pub_.journal {
        let _ = write!(citation, " {}.", journal);
    }
    if let Some(conference) = &pub_.conference {
        let _ = write!(citation, " {}.", conference);
    }
    if let Some(doi) = &pub_.doi {
        let _ = write!(citation, " DOI: {}", doi);
    }
    citation
}

/// Render the full plain-text report: headline counts, per-year history
/// sorted by year, then the citation list separated by blank lines.
pub fn render_report(publications: &[Publication], summary: &PublicationSummary) -> String {
    let mut years: Vec<(i32, usize)> = summary
        .publications_by_year
        .iter()
        .map(|(year, count)| (year.parse::<i32>().unwrap_or_default(), *count))
        .collect();
    years.sort_by_key(|(year, _)| *year);

    let mut report = String::new();
    report.push_str("Publication Summary\n");
    report.push_str("==================\n\n");
    let _ = writeln!(report, "Total Publications: {}", summary.total_publications);
    let _ = writeln!(report, "Journal Articles: {}", summary.journal_articles);
    let _ = writeln!(
        report,
        "Conference Proceedings: {}",
        summary.conference_proceedings
    );
    let _ = writeln!(report, "Books: {}", summary.books);
    let _ = writeln!(report, "Book Chapters: {}", summary.book_chapters);
    let _ = writeln!(report, "Other Publications: {}", summary.other);
    let _ = writeln!(report, "Total Citations: {}", summary.citation_count);

    report.push_str("\nPublication History by Year:\n");
    for (year, count) in years {
        let _ = writeln!(report, "- {}: {} publications", year, count);
    }

    report.push_str("\nPublications\n");
    report.push_str("===========\n\n");
    let citations: Vec<String> = publications.iter().map(format_citation).collect();
    report.push_str(&citations.join("\n\n"));
    report.push('\n');

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;
    use vita_domain::PublicationType;

    fn journal_pub() -> Publication {
        Publication::new(
            "Machine Learning Approaches for Predictive Analytics",
            2023,
            PublicationType::Journal,
        )
        .with_authors(vec!["Jane Smith".to_string(), "Robert Johnson".to_string()])
        .with_journal("Journal of Educational Data Mining")
        .with_doi("10.1234/jedm.2023.01.001")
        .with_citations(12)
    }

    #[test]
    fn citation_line_with_journal_and_doi() {
        assert_eq!(
            format_citation(&journal_pub()),
            "Jane Smith, Robert Johnson. (2023). Machine Learning Approaches for \
             Predictive Analytics. Journal of Educational Data Mining. \
             DOI: 10.1234/jedm.2023.01.001"
        );
    }

    #[test]
    fn citation_line_without_venue_or_doi() {
        let pub_ = Publication::new("Plain Work", 2020, PublicationType::Book)
            .with_authors(vec!["Jane Smith".to_string()]);
        assert_eq!(format_citation(&pub_), "Jane Smith. (2020). Plain Work.");
    }

    #[test]
    fn report_layout() {
        let pubs = vec![
            journal_pub(),
            Publication::new("Cloud Frameworks", 2022, PublicationType::Conference)
                .with_authors(vec!["Jane Smith".to_string()])
                .with_conference("International Conference on Cloud Computing")
                .with_citations(8),
        ];
        let summary = summarize(&pubs, "Jane Smith");
        let report = render_report(&pubs, &summary);

        assert!(report.starts_with("Publication Summary\n==================\n\n"));
        assert!(report.contains("Total Publications: 2\n"));
        assert!(report.contains("Journal Articles: 1\n"));
        assert!(report.contains("Conference Proceedings: 1\n"));
        assert!(report.contains("Total Citations: 20\n"));
        assert!(report.contains(
            "\nPublication History by Year:\n- 2022: 1 publications\n- 2023: 1 publications\n"
        ));
        assert!(report.contains("\nPublications\n===========\n\n"));
        // Citations separated by a blank line, report ends with a newline
        assert!(report
            .contains("DOI: 10.1234/jedm.2023.01.001\n\nJane Smith. (2022). Cloud Frameworks."));
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn report_years_sort_numerically() {
        let pubs: Vec<Publication> = [2023, 1999, 2010]
            .iter()
            .map(|&year| {
                Publication::new("p", year, PublicationType::Other)
                    .with_authors(vec!["Jane Smith".to_string()])
            })
            .collect();
        let summary = summarize(&pubs, "Jane Smith");
        let report = render_report(&pubs, &summary);

        let history = report
            .split("Publication History by Year:\n")
            .nth(1)
            .unwrap();
        let y1999 = history.find("- 1999").unwrap();
        let y2010 = history.find("- 2010").unwrap();
        let y2023 = history.find("- 2023").unwrap();
        assert!(y1999 < y2010 && y2010 < y2023);
    }
}
