//! PubMed E-utilities client, data model, and EFetch XML parser
//!
//! - [`client`] - ESearch/EFetch HTTP operations
//! - [`models`] - parsed article and author types
//! - [`parser`] - EFetch XML batch parsing
//! - `responses` - ESearch JSON deserialization types

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

pub use client::PubMedClient;
pub use models::{Author, NOT_AVAILABLE, PubMedArticle};
pub use parser::parse_articles_from_xml;
