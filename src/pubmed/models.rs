use serde::{Deserialize, Serialize};

/// Sentinel written wherever the source provides no value
pub const NOT_AVAILABLE: &str = "N/A";

/// A single author entry from an EFetch author list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name in "Last, First" form
    pub name: String,
    /// Free-text institutional affiliation, if present
    pub affiliation: Option<String>,
}

impl Author {
    /// Affiliation text with the `"N/A"` sentinel for absent values
    pub fn affiliation_text(&self) -> &str {
        self.affiliation.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Represents a PubMed article with the metadata this pipeline consumes
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PubMedArticle {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: Option<String>,
    /// Publication year from the journal issue PubDate
    pub pub_date: Option<String>,
    /// Authors in document order
    pub authors: Vec<Author>,
}
