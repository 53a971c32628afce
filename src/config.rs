use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub output: OutputConfig,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub limit_per_query: usize,
    pub pause_ms: u64,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: String,
    pub sheet_name: String,
}

/// One business category and the search queries used to discover it.
/// Categories run in the order they appear here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    pub queries: Vec<String>,
}

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/123.0 Safari/537.36";

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                limit_per_query: 5,
                pause_ms: 600,
                timeout_seconds: 15,
                user_agent: USER_AGENT.to_string(),
            },
            output: OutputConfig {
                path: "output/akut_virksomheder.xlsx".to_string(),
                sheet_name: "AkutVirksomheder".to_string(),
            },
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<Category> {
    let raw: &[(&str, &[&str])] = &[
        ("VVS", &["akut vvs", "døgnvagt vvs", "vvs akut"]),
        ("Elektriker", &["akut elektriker", "elektriker døgnvagt"]),
        ("Kloakfirma", &["akut kloak", "kloakmester døgnvagt"]),
        ("Låsesmed", &["akut låsesmed", "låsesmed døgnvagt"]),
        ("Glarmester", &["akut glarmester", "glarmester døgnvagt"]),
        ("Auto transport", &["autotransport akut", "vejhjælp autotransport"]),
        ("Vagt/sikkerhedsfirma", &["vagtfirma akut", "sikkerhedsfirma døgnvagt"]),
    ];

    raw.iter()
        .map(|(name, queries)| Category {
            name: name.to_string(),
            queries: queries.iter().map(|q| q.to_string()).collect(),
        })
        .collect()
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
