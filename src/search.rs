// src/search.rs
use crate::models::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

const SEARCH_ENDPOINT: &str = "https://duckduckgo.com/html/?q=";

/// Search-result discovery against DuckDuckGo's plain HTML endpoint.
/// Returns external result links only; the engine's own links are filtered.
pub struct SearchClient {
    client: Client,
    result_selector: Selector,
}

impl SearchClient {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            result_selector: Selector::parse("a.result__a").unwrap(),
        })
    }

    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!("{}{}", SEARCH_ENDPOINT, urlencoding::encode(query));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(format!("search returned HTTP {}", response.status()).into());
        }

        let html = response.text().await?;
        let links = self.extract_result_links(&html, max_results);
        debug!("Query '{}' yielded {} result links", query, links.len());
        Ok(links)
    }

    fn extract_result_links(&self, html: &str, max_results: usize) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for element in document.select(&self.result_selector) {
            let href = match element.value().attr("href") {
                Some(href) => href,
                None => continue,
            };
            if !href.starts_with("http") {
                continue;
            }
            let host = Url::parse(href)
                .ok()
                .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
                .unwrap_or_default();
            if host.contains("duckduckgo.com") {
                continue;
            }
            links.push(href.to_string());
            if links.len() >= max_results {
                break;
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SearchClient {
        SearchClient::new("test-agent", 5).unwrap()
    }

    #[test]
    fn extracts_external_result_links_in_order() {
        let html = r#"
            <div class="results">
              <a class="result__a" href="https://www.vvs-akut.dk/">VVS Akut</a>
              <a class="result__a" href="https://duckduckgo.com/about">DDG</a>
              <a class="result__a" href="/html/?q=next">relative</a>
              <a class="result__a" href="https://laasesmeden.dk/akut">Låsesmed</a>
            </div>"#;
        let links = client().extract_result_links(html, 10);
        assert_eq!(
            links,
            vec![
                "https://www.vvs-akut.dk/".to_string(),
                "https://laasesmeden.dk/akut".to_string(),
            ]
        );
    }

    #[test]
    fn respects_the_per_query_cap() {
        let html = r#"
            <a class="result__a" href="https://a.dk/">a</a>
            <a class="result__a" href="https://b.dk/">b</a>
            <a class="result__a" href="https://c.dk/">c</a>"#;
        let links = client().extract_result_links(html, 2);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn anchors_without_result_class_are_ignored() {
        let html = r#"<a href="https://a.dk/">plain</a>"#;
        assert!(client().extract_result_links(html, 10).is_empty());
    }
}
