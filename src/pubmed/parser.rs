//! EFetch XML parser
//!
//! Turns a PubMed EFetch batch response into [`PubMedArticle`] values, one per
//! `<PubmedArticle>` element. Extraction is best-effort: a missing title or
//! publication year yields `None`, an article with no author list yields an
//! empty author vector. Only malformed XML is fatal.

use std::io::BufReader;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{instrument, warn};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::{Author, PubMedArticle};

/// Parse all `<PubmedArticle>` entries from an EFetch XML response
///
/// Articles and authors are returned in document order. An article without a
/// PMID is skipped with a warning rather than failing the whole batch.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document cannot be parsed as XML.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<PubMedArticle>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();

    // Per-article state, reset on <PubmedArticle>
    let mut in_article = false;
    let mut pmid: Option<String> = None;
    let mut title: Option<String> = None;
    let mut pub_date: Option<String> = None;
    let mut authors: Vec<Author> = Vec::new();

    // Element flags
    let mut in_pmid = false;
    let mut in_article_title = false;
    let mut in_pub_date = false;
    let mut in_year = false;
    let mut in_author_list = false;
    let mut in_author = false;
    let mut in_last_name = false;
    let mut in_fore_name = false;
    let mut in_affiliation_info = false;
    let mut in_affiliation = false;

    // Per-author state, reset on <Author>
    let mut last_name = String::new();
    let mut fore_name = String::new();
    let mut affiliation: Option<String> = None;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    in_article = true;
                    pmid = None;
                    title = None;
                    pub_date = None;
                    authors.clear();
                }
                // Only the first PMID counts; later ones belong to references
                // and comment links
                b"PMID" if in_article && pmid.is_none() => in_pmid = true,
                b"ArticleTitle" if in_article && title.is_none() => {
                    in_article_title = true;
                    title = Some(String::new());
                }
                b"PubDate" if in_article => in_pub_date = true,
                b"Year" if in_pub_date => in_year = true,
                b"AuthorList" if in_article => in_author_list = true,
                b"Author" if in_author_list => {
                    in_author = true;
                    last_name.clear();
                    fore_name.clear();
                    affiliation = None;
                }
                b"LastName" if in_author => in_last_name = true,
                b"ForeName" if in_author => in_fore_name = true,
                b"AffiliationInfo" if in_author && affiliation.is_none() => {
                    in_affiliation_info = true;
                }
                b"Affiliation" if in_affiliation_info && affiliation.is_none() => {
                    in_affiliation = true;
                    affiliation = Some(String::new());
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| PubMedError::XmlError(format!("Invalid text content: {err}")))?;

                if in_pmid {
                    pmid = Some(text.into_owned());
                } else if in_article_title {
                    if let Some(t) = title.as_mut() {
                        append_fragment(t, &text);
                    }
                } else if in_year && pub_date.is_none() {
                    pub_date = Some(text.into_owned());
                } else if in_last_name {
                    last_name.push_str(&text);
                } else if in_fore_name {
                    fore_name.push_str(&text);
                } else if in_affiliation {
                    if let Some(a) = affiliation.as_mut() {
                        append_fragment(a, &text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => {
                    in_article = false;
                    match pmid.take() {
                        Some(id) => articles.push(PubMedArticle {
                            pmid: id,
                            title: title.take(),
                            pub_date: pub_date.take(),
                            authors: std::mem::take(&mut authors),
                        }),
                        None => warn!("PubmedArticle element without a PMID, skipping"),
                    }
                }
                b"PMID" => in_pmid = false,
                b"ArticleTitle" => in_article_title = false,
                b"PubDate" => in_pub_date = false,
                b"Year" => in_year = false,
                b"AuthorList" => in_author_list = false,
                b"Author" if in_author => {
                    in_author = false;
                    match display_name(&last_name, &fore_name) {
                        Some(name) => authors.push(Author {
                            name,
                            affiliation: affiliation.take(),
                        }),
                        // Collective-name authors carry no personal name parts
                        None => warn!("Author element without name parts, skipping"),
                    }
                }
                b"LastName" => in_last_name = false,
                b"ForeName" => in_fore_name = false,
                b"AffiliationInfo" => in_affiliation_info = false,
                b"Affiliation" => in_affiliation = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PubMedError::XmlError(format!("XML parsing error: {}", e)));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(articles)
}

/// Display name in "Last, First" form, falling back to whichever part exists
fn display_name(last: &str, fore: &str) -> Option<String> {
    match (last.is_empty(), fore.is_empty()) {
        (false, false) => Some(format!("{last}, {fore}")),
        (false, true) => Some(last.to_string()),
        (true, false) => Some(fore.to_string()),
        (true, true) => None,
    }
}

/// Join mixed-content text fragments with a single space
///
/// Inline markup like `<i>` inside titles splits the text into several
/// events; trimming plus space-joining keeps the words readable.
fn append_fragment(target: &mut String, fragment: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(fragment);
}
