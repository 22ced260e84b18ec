//! # pubmed-papers
//!
//! Query PubMed through the NCBI E-utilities, keep papers that have at least
//! one author with a pharma/biotech company affiliation, and export the
//! result to a CSV file.
//!
//! The pipeline is a linear three-stage flow: search (ESearch, JSON) →
//! fetch and parse (EFetch, XML) → filter and export (CSV).
//!
//! ## Quick start
//!
//! ```no_run
//! use pubmed_papers::{PubMedClient, filter_papers, save_to_csv};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!
//!     let articles = client.search_and_fetch("cancer immunotherapy", 10).await?;
//!     let papers = filter_papers(articles);
//!
//!     if papers.is_empty() {
//!         println!("No relevant papers found.");
//!     } else {
//!         let count = save_to_csv(&papers, "papers.csv".as_ref())?;
//!         println!("Saved {count} papers");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use export::save_to_csv;
pub use filter::{COMPANY_KEYWORDS, FilteredPaper, filter_papers};
pub use pubmed::{Author, PubMedArticle, PubMedClient, parse_articles_from_xml};
