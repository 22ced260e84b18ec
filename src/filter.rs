//! Affiliation keyword filtering
//!
//! Selects articles with at least one author whose affiliation text points at
//! a company rather than an academic institution, and flattens each match
//! into an export-ready record.

use serde::{Deserialize, Serialize};

use crate::pubmed::models::{Author, NOT_AVAILABLE, PubMedArticle};

/// Keywords identifying a non-academic (company) affiliation
pub const COMPANY_KEYWORDS: &[&str] = &["pharma", "biotech"];

/// Export record for a paper with at least one company-affiliated author
///
/// The serde renames pin the CSV column names and order; field order here is
/// the header order of the output file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FilteredPaper {
    #[serde(rename = "PubMedID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Publication Date")]
    pub pub_date: Option<String>,
    /// Comma-joined display names of the matching authors only
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// Comma-joined affiliations of the same authors, in the same order
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    /// Always `"N/A"`; the E-utilities metadata carries no email addresses
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

/// Keep only articles with at least one company-affiliated author
///
/// Articles with no matching author are dropped. Matching authors keep their
/// encounter order and are not deduplicated.
pub fn filter_papers(articles: Vec<PubMedArticle>) -> Vec<FilteredPaper> {
    articles.into_iter().filter_map(into_filtered).collect()
}

fn into_filtered(article: PubMedArticle) -> Option<FilteredPaper> {
    let matching: Vec<&Author> = article
        .authors
        .iter()
        .filter(|author| is_company_author(author))
        .collect();

    if matching.is_empty() {
        return None;
    }

    let non_academic_authors = matching
        .iter()
        .map(|author| author.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let company_affiliations = matching
        .iter()
        .map(|author| author.affiliation_text())
        .collect::<Vec<_>>()
        .join(", ");

    Some(FilteredPaper {
        pmid: article.pmid,
        title: article.title,
        pub_date: article.pub_date,
        non_academic_authors,
        company_affiliations,
        corresponding_email: NOT_AVAILABLE.to_string(),
    })
}

/// Substring containment on the lowercased affiliation; no word boundaries
fn is_company_author(author: &Author) -> bool {
    match &author.affiliation {
        Some(affiliation) => {
            let lowered = affiliation.to_lowercase();
            COMPANY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
        }
        None => false,
    }
}
