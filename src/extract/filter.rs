// src/extract/filter.rs
use crate::models::Business;
use std::collections::HashSet;
use url::Url;

/// Signal words that mark a page as offering emergency call-out service.
const ACUTE_KEYWORDS: [&str; 6] = [
    "akut",
    "døgnvagt",
    "24/7",
    "24 timer",
    "hurtig udrykning",
    "nødhjælp",
];

/// A page is relevant when its normalized text mentions at least one
/// emergency keyword, case-insensitively.
pub fn looks_acute(text: &str) -> bool {
    let lowered = text.to_lowercase();
    ACUTE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Dedup identity for a record: its website host, lowercased, without the
/// `www.` prefix. Several scraped pages can describe the same business under
/// slightly different titles, so host is the identity, not company name.
pub fn host_key(website: &str) -> String {
    Url::parse(website)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_default()
}

/// Keeps the first record per distinct host, in discovery order. Records
/// with an empty or already-seen host key are dropped.
pub fn unique_by_host(items: Vec<Business>) -> Vec<Business> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let host = host_key(&item.website);
        if host.is_empty() || !seen.insert(host) {
            continue;
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str, website: &str) -> Business {
        Business {
            name: name.to_string(),
            category: "VVS".to_string(),
            address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            phone: "12345678".to_string(),
            website: website.to_string(),
            hourly_price: String::new(),
        }
    }

    #[test]
    fn acute_keywords_match_case_insensitively() {
        assert!(looks_acute("Vi tilbyder AKUT service hele døgnet"));
        assert!(looks_acute("Åbent 24/7 for erhverv"));
        assert!(!looks_acute("Almindelig VVS service efter aftale"));
    }

    #[test]
    fn host_key_lowercases_and_strips_www() {
        assert_eq!(host_key("https://WWW.X.dk/kontakt"), "x.dk");
        assert_eq!(host_key("https://x.dk"), "x.dk");
        assert_eq!(host_key("not a url"), "");
    }

    #[test]
    fn www_and_bare_host_collapse_keeping_the_earlier() {
        let deduped = unique_by_host(vec![
            business("Første", "https://x.dk/"),
            business("Anden", "https://www.x.dk/om-os"),
            business("Tredje", "https://y.dk/"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "Første");
        assert_eq!(deduped[1].name, "Tredje");
    }

    #[test]
    fn dedup_is_idempotent_and_order_preserving() {
        let once = unique_by_host(vec![
            business("A", "https://a.dk"),
            business("B", "https://b.dk"),
            business("A2", "https://a.dk/andet"),
        ]);
        let twice = unique_by_host(once.clone());
        assert_eq!(once.len(), twice.len());
        let names: Vec<&str> = twice.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn records_without_parseable_host_are_dropped() {
        let deduped = unique_by_host(vec![business("Ukendt", "not a url")]);
        assert!(deduped.is_empty());
    }
}
