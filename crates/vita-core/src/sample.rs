//! Bundled demo data
//!
//! A small realistic corpus used by tests and demo builds in place of a
//! backend fetch. Ids are fixed so snapshots and edits are reproducible.

use vita_domain::{Publication, PublicationType, User};

/// The demo profile owner.
pub fn sample_user() -> User {
    let mut user = User::new("Dr. Jane Smith", "jane.smith@university.edu")
        .with_affiliation("University of Science & Technology")
        .with_position("Associate Professor")
        .with_department("Computer Science");
    user.id = "1".to_string();
    user
}

/// The demo publication list: three journal articles, two conference
/// papers, one book, one chapter.
pub fn sample_publications() -> Vec<Publication> {
    let mut pubs = vec![
        Publication::new(
            "Machine Learning Approaches for Predictive Analytics in Higher Education",
            2023,
            PublicationType::Journal,
        )
        .with_authors(vec![
            "Jane Smith".to_string(),
            "Robert Johnson".to_string(),
            "Maria Garcia".to_string(),
        ])
        .with_journal("Journal of Educational Data Mining")
        .with_doi("10.1234/jedm.2023.01.001")
        .with_abstract(
            "This study explores various machine learning algorithms to predict student \
             performance and retention in higher education institutions.",
        )
        .with_citations(12)
        .with_tags(vec![
            "machine learning".to_string(),
            "education".to_string(),
            "data mining".to_string(),
        ]),
        Publication::new(
            "A Framework for Secure Cloud Computing in Academic Environments",
            2022,
            PublicationType::Conference,
        )
        .with_authors(vec!["Jane Smith".to_string(), "David Lee".to_string()])
        .with_conference("International Conference on Cloud Computing")
        .with_doi("10.5678/iccc.2022.02.015")
        .with_abstract(
            "We present a novel framework for ensuring data security and privacy in \
             cloud-based academic computing environments.",
        )
        .with_citations(8)
        .with_tags(vec![
            "cloud computing".to_string(),
            "security".to_string(),
            "education".to_string(),
        ]),
        Publication::new(
            "Advances in Natural Language Processing for Scientific Literature Analysis",
            2023,
            PublicationType::Journal,
        )
        .with_authors(vec![
            "Jane Smith".to_string(),
            "Michael Brown".to_string(),
            "Sophia Wang".to_string(),
        ])
        .with_journal("Computational Linguistics Journal")
        .with_doi("10.9101/clj.2023.03.005")
        .with_abstract(
            "This paper reviews recent advances in NLP techniques specifically tailored \
             for analyzing scientific literature across disciplines.",
        )
        .with_citations(15)
        .with_tags(vec![
            "NLP".to_string(),
            "scientific literature".to_string(),
            "text mining".to_string(),
        ]),
        Publication::new(
            "Ethical Considerations in AI-Driven Educational Systems",
            2021,
            PublicationType::Chapter,
        )
        .with_authors(vec!["Jane Smith".to_string(), "Elena Rodriguez".to_string()])
        .with_book("Handbook of Artificial Intelligence in Education")
        .with_doi("10.1112/aie.2021.04.007")
        .with_abstract(
            "This chapter discusses ethical implications and considerations when \
             deploying AI systems in educational contexts.",
        )
        .with_citations(22)
        .with_tags(vec![
            "AI ethics".to_string(),
            "education".to_string(),
            "policy".to_string(),
        ]),
        Publication::new(
            "Quantum Computing: Implications for Cryptography and Data Security",
            2022,
            PublicationType::Journal,
        )
        .with_authors(vec![
            "Jane Smith".to_string(),
            "Alex Chen".to_string(),
            "William Taylor".to_string(),
        ])
        .with_journal("Journal of Quantum Information Science")
        .with_doi("10.3141/jqis.2022.05.012")
        .with_abstract(
            "We analyze how advances in quantum computing will impact current \
             cryptographic methods and data security protocols.",
        )
        .with_citations(18)
        .with_tags(vec![
            "quantum computing".to_string(),
            "cryptography".to_string(),
            "security".to_string(),
        ]),
        Publication::new(
            "Blockchain Technology for Academic Credential Verification",
            2021,
            PublicationType::Conference,
        )
        .with_authors(vec!["Jane Smith".to_string(), "Thomas Wilson".to_string()])
        .with_conference("IEEE Blockchain Conference")
        .with_doi("10.7272/ieee-bc.2021.06.009")
        .with_abstract(
            "This paper proposes a blockchain-based system for verifying academic \
             credentials and reducing certificate fraud.",
        )
        .with_citations(10)
        .with_tags(vec![
            "blockchain".to_string(),
            "education".to_string(),
            "security".to_string(),
        ]),
        Publication::new(
            "The Future of Higher Education: A Computational Perspective",
            2020,
            PublicationType::Book,
        )
        .with_authors(vec!["Jane Smith".to_string()])
        .with_book("Computational Approaches to Educational Innovation")
        .with_abstract(
            "This book explores how computational methods are reshaping higher \
             education systems globally.",
        )
        .with_citations(45)
        .with_tags(vec![
            "education".to_string(),
            "innovation".to_string(),
            "technology".to_string(),
        ]),
    ];

    for (index, pub_) in pubs.iter_mut().enumerate() {
        pub_.id = (index + 1).to_string();
    }
    pubs
}
