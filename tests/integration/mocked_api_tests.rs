//! Mocked E-utilities endpoint tests for the PubMed client
//!
//! These tests point the client at a wiremock server and verify request
//! construction, response handling, and the no-fetch-on-empty-search
//! guarantee.

use pubmed_papers::{ClientConfig, PubMedClient, PubMedError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: JSON response body from ESearch
fn esearch_json_response(pmids: &[&str]) -> String {
    let id_list: Vec<String> = pmids.iter().map(|id| format!("\"{}\"", id)).collect();
    format!(
        r#"{{
            "esearchresult": {{
                "count": "{}",
                "retmax": "{}",
                "retstart": "0",
                "idlist": [{}]
            }}
        }}"#,
        pmids.len(),
        pmids.len(),
        id_list.join(",")
    )
}

/// Helper: EFetch XML body with one minimal article per PMID
fn efetch_xml_response(pmids: &[&str]) -> String {
    let articles: Vec<String> = pmids
        .iter()
        .map(|pmid| {
            format!(
                r#"<PubmedArticle>
    <MedlineCitation>
        <PMID Version="1">{pmid}</PMID>
        <Article>
            <Journal>
                <JournalIssue>
                    <PubDate><Year>2023</Year></PubDate>
                </JournalIssue>
            </Journal>
            <ArticleTitle>Article {pmid}</ArticleTitle>
            <AuthorList>
                <Author>
                    <LastName>Doe</LastName>
                    <ForeName>John</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Acme Pharma Inc</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>"#
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" ?>\n<PubmedArticleSet>\n{}\n</PubmedArticleSet>",
        articles.join("\n")
    )
}

/// Helper: create a client pointing at the mock server
fn create_test_client(base_url: &str) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_tool("test-client");
    PubMedClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_search_pmids_returns_ids_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "asthma"))
        .and(query_param("retmax", "10"))
        .and(query_param("retmode", "json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_json_response(&["111", "222", "333"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let pmids = client.search_pmids("asthma", 10).await.unwrap();

    assert_eq!(pmids, vec!["111", "222", "333"]);
}

#[tokio::test]
async fn test_search_encodes_query_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "covid-19 treatment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&["444"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let pmids = client.search_pmids("covid-19 treatment", 10).await.unwrap();

    assert_eq!(pmids, vec!["444"]);
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let pmids = client.search_pmids("   ", 10).await.unwrap();

    assert!(pmids.is_empty());
}

#[tokio::test]
async fn test_search_error_field_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"ERROR": "Invalid db name specified"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.search_pmids("anything", 10).await;

    assert!(matches!(
        result,
        Err(PubMedError::ApiError { status: 200, ref message })
            if message.contains("Invalid db name")
    ));
}

#[tokio::test]
#[traced_test]
async fn test_zero_search_results_skip_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json_response(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The fetch endpoint must never be hit when the search is empty
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let articles = client.search_and_fetch("no hits here", 10).await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_fetch_articles_single_batch_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "123,456"))
        .and(query_param("retmode", "xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(efetch_xml_response(&["123", "456"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let pmids = vec!["123".to_string(), "456".to_string()];
    let articles = client.fetch_articles(&pmids).await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].pmid, "123");
    assert_eq!(articles[0].title.as_deref(), Some("Article 123"));
    assert_eq!(articles[0].pub_date.as_deref(), Some("2023"));
    assert_eq!(articles[1].pmid, "456");
}

#[tokio::test]
async fn test_fetch_articles_empty_slice_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let articles = client.fetch_articles(&[]).await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_fetch_malformed_xml_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<PubmedArticleSet><PubmedArticle></Mismatched>"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.fetch_articles(&["123".to_string()]).await;

    assert!(matches!(result, Err(PubMedError::XmlError(_))));
}
