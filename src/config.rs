//! Client configuration for the NCBI E-utilities endpoints

use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_TOOL: &str = "pubmed-papers";

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// Endpoint URLs are derived from the configured base URL at client
/// construction; there are no mutable globals.
///
/// # Example
///
/// ```
/// use pubmed_papers::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_tool("my-pipeline")
///     .with_timeout(std::time::Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    tool: String,
}

impl ClientConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Override the E-utilities base URL (used by tests to point at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the tool name reported to NCBI via the user agent
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// The base URL requests are issued against
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// User agent string for outbound requests
    pub fn effective_user_agent(&self) -> String {
        format!("{}/{}", self.tool, env!("CARGO_PKG_VERSION"))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
