use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PubMedArticle;
use crate::pubmed::parser::parse_articles_from_xml;
use crate::pubmed::responses::ESearchResult;

/// Client for the PubMed E-utilities search and fetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_papers::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_tool("my-pipeline");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Search PubMed and return matching PMIDs in rank order
    ///
    /// Issues a single ESearch request. An empty result list is `Ok(vec![])`,
    /// not an error; an empty query short-circuits without a network call.
    ///
    /// # Errors
    ///
    /// * [`PubMedError::RequestError`] - the HTTP request failed
    /// * [`PubMedError::JsonError`] - the response body is not valid ESearch JSON
    /// * [`PubMedError::ApiError`] - NCBI returned 200 OK with an `ERROR` field
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_pmids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!(%url, "Making ESearch API request");
        let response = self.client.get(&url).send().await?;
        let body = response.text().await?;
        debug!(%body, "ESearch raw response");

        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes returns 200 OK with an ERROR field in the body
        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {error_msg}"),
            });
        }

        Ok(search_result.esearchresult.idlist)
    }

    /// Fetch article metadata for the given PMIDs in one batch EFetch request
    ///
    /// All PMIDs are comma-joined into a single request. An empty slice
    /// returns `Ok(vec![])` without issuing a request.
    ///
    /// # Errors
    ///
    /// * [`PubMedError::RequestError`] - the HTTP request failed
    /// * [`PubMedError::XmlError`] - the response is not parseable XML
    #[instrument(skip(self), fields(pmid_count = pmids.len()))]
    pub async fn fetch_articles(&self, pmids: &[String]) -> Result<Vec<PubMedArticle>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = pmids.join(",");
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        );

        debug!(%url, "Making EFetch API request");
        let response = self.client.get(&url).send().await?;
        let xml_text = response.text().await?;

        let articles = parse_articles_from_xml(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = articles.len(),
            "Batch fetch completed"
        );
        Ok(articles)
    }

    /// Search and fetch article metadata in one call
    ///
    /// When the search yields no PMIDs, the fetch request is not issued.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_papers::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let articles = client.search_and_fetch("covid-19 treatment", 10).await?;
    ///     for article in &articles {
    ///         println!("{}: {:?}", article.pmid, article.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_and_fetch(&self, query: &str, limit: usize) -> Result<Vec<PubMedArticle>> {
        let pmids = self.search_pmids(query, limit).await?;
        if pmids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_articles(&pmids).await
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
