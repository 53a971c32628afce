// src/pipeline.rs
use crate::config::{Category, Config};
use crate::extract::filter::{looks_acute, unique_by_host};
use crate::extract::{BusinessExtractor, TextNormalizer};
use crate::models::{Business, Result};
use crate::search::SearchClient;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Sequential gather: category -> query -> search results -> per-page fetch
/// -> extraction -> filtering. One remote call at a time with a courtesy
/// pause after each; per-item failures are skipped, never retried.
pub struct ScrapePipeline {
    config: Config,
    client: Client,
    search: SearchClient,
    normalizer: TextNormalizer,
    extractor: BusinessExtractor,
}

impl ScrapePipeline {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.scraping.user_agent.as_str())
            .timeout(Duration::from_secs(config.scraping.timeout_seconds))
            .build()?;
        let search = SearchClient::new(
            &config.scraping.user_agent,
            config.scraping.timeout_seconds,
        )?;

        Ok(Self {
            config,
            client,
            search,
            normalizer: TextNormalizer::new(),
            extractor: BusinessExtractor::new(),
        })
    }

    pub async fn collect(&self) -> Result<Vec<Business>> {
        let mut collected: Vec<Business> = Vec::new();

        for category in &self.config.categories {
            info!("Collecting category '{}'", category.name);
            let urls = self.discover_urls(category).await;
            debug!("Category '{}': {} candidate pages", category.name, urls.len());

            for url in urls {
                match self.process_page(&category.name, &url).await {
                    Ok(Some(business)) => collected.push(business),
                    Ok(None) => debug!("Rejected {}", url),
                    Err(e) => debug!("Skipping {}: {}", url, e),
                }
                self.pause().await;
            }
        }

        let businesses = unique_by_host(collected);
        info!("Collected {} unique businesses", businesses.len());
        Ok(businesses)
    }

    /// Candidate URLs for one category, bounded per query. A failed query
    /// is skipped; the remaining queries still run.
    async fn discover_urls(&self, category: &Category) -> Vec<String> {
        let mut urls = Vec::new();
        for query in &category.queries {
            match self
                .search
                .search(query, self.config.scraping.limit_per_query)
                .await
            {
                Ok(links) => urls.extend(links),
                Err(e) => debug!("Query '{}' failed: {}", query, e),
            }
            self.pause().await;
        }
        urls
    }

    /// Fetches and extracts one page. `Ok(None)` means the page was fetched
    /// fine but failed relevance or the name/phone admission check.
    async fn process_page(&self, category: &str, url: &str) -> Result<Option<Business>> {
        let raw_html = self.fetch_page(url).await?;
        let text = self.normalizer.normalize(&raw_html);

        if !looks_acute(&text) {
            return Ok(None);
        }

        let title = self.normalizer.title(&raw_html);
        let business = self.extractor.extract(category, url, &title, &text);

        if business.name.is_empty() || business.phone.is_empty() {
            return Ok(None);
        }
        Ok(Some(business))
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()).into());
        }
        Ok(response.text().await?)
    }

    // Courtesy rate limiting toward the search engine and the scraped
    // sites; not a correctness mechanism.
    async fn pause(&self) {
        tokio::time::sleep(Duration::from_millis(self.config.scraping.pause_ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head>
  <title>VVS Akut A/S | Forside</title>
  <script>var tracking = "87654321";</script>
</head>
<body>
  <p>Kontakt VVS Akut A/S, N&oslash;rregade 5, 8000 Aarhus C.</p>
  <p>Ring 12345678. Timepris fra 450 kr/time. Vi har d&oslash;gnvagt.</p>
</body>
</html>"#;

    #[test]
    fn raw_page_flows_through_normalize_filter_and_extract() {
        let normalizer = TextNormalizer::new();
        let extractor = BusinessExtractor::new();

        let text = normalizer.normalize(PAGE);
        assert!(looks_acute(&text));

        let title = normalizer.title(PAGE);
        let business = extractor.extract("VVS", "https://www.vvs-akut.dk/", &title, &text);

        assert_eq!(business.name, "VVS Akut A/S");
        assert_eq!(business.postal_code, "8000");
        assert_eq!(business.city, "Aarhus C");
        assert_eq!(business.phone, "12345678");
        assert_eq!(business.hourly_price, "450 kr/time");
        // The script-embedded number never wins over body text.
        assert_ne!(business.phone, "87654321");
    }

    #[test]
    fn page_without_acute_signal_is_filtered_before_extraction() {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize("<html><body>Almindelig VVS, ring 12345678</body></html>");
        assert!(!looks_acute(&text));
    }
}
