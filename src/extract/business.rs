// src/extract/business.rs
use crate::models::Business;
use regex::Regex;
use url::Url;

/// Address window: characters of text inspected before the postal code,
/// and the number of trailing tokens kept from that window. Tuned against
/// real pages; the values are part of the extraction contract.
const ADDRESS_WINDOW_CHARS: usize = 70;
const ADDRESS_MAX_TOKENS: usize = 8;

/// Recovers structured business fields from normalized page text using
/// first-match-wins regex heuristics. Total over any input: a field whose
/// pattern does not match comes back as an empty string, never an error.
pub struct BusinessExtractor {
    phone_regex: Regex,
    post_city_regex: Regex,
    price_regex: Regex,
}

impl BusinessExtractor {
    pub fn new() -> Self {
        Self {
            phone_regex: Regex::new(r"(?:\+45\s?)?(?:\d[\s.\-]?){8,}").unwrap(),
            post_city_regex: Regex::new(r"\b(\d{4})\s+([A-Za-zÆØÅæøå\- ]{2,})").unwrap(),
            price_regex: Regex::new(
                r"(?i)(?:(?:fra|ca\.?|timepris)\s*)?(\d{2,5})\s*(?:kr\.?|dkk)(?:\s*/\s*time|/t)?",
            )
            .unwrap(),
        }
    }

    pub fn extract(&self, category: &str, url: &str, title: &str, text: &str) -> Business {
        let (postal_code, city) = self.extract_postal_and_city(text);
        let address = if postal_code.is_empty() {
            String::new()
        } else {
            address_before(text, &postal_code)
        };

        Business {
            name: company_name(title, url),
            category: category.to_string(),
            address,
            postal_code,
            city,
            phone: self.extract_phone(text),
            website: url.to_string(),
            hourly_price: self.extract_price(text),
        }
    }

    /// Earliest 4-digit-plus-city mention wins; later postal mentions on the
    /// same page are ignored.
    fn extract_postal_and_city(&self, text: &str) -> (String, String) {
        match self.post_city_regex.captures(text) {
            Some(captures) => (
                captures[1].trim().to_string(),
                captures[2].trim().to_string(),
            ),
            None => (String::new(), String::new()),
        }
    }

    // The pattern lets every digit carry an optional separator, so a
    // sentence-ending dot right after the number would otherwise stick to
    // the match.
    fn extract_phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().trim().trim_end_matches([' ', '.', '-']).to_string())
            .unwrap_or_default()
    }

    fn extract_price(&self, text: &str) -> String {
        self.price_regex
            .captures(text)
            .map(|captures| format!("{} kr/time", &captures[1]))
            .unwrap_or_default()
    }
}

impl Default for BusinessExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First title segment before any pipe or hyphen separator; the source host
/// (without `www.`) when the page has no usable title.
fn company_name(title: &str, url: &str) -> String {
    if !title.is_empty() {
        let first_segment = title
            .split('|')
            .next()
            .unwrap_or("")
            .split('-')
            .next()
            .unwrap_or("");
        return first_segment.trim().to_string();
    }

    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_default()
}

/// The street address is assumed to sit immediately before the postal code.
/// Looks at the window of text preceding the first occurrence of the postal
/// substring and keeps only its trailing tokens, so unrelated prose further
/// back does not bleed in.
fn address_before(text: &str, postal_code: &str) -> String {
    let idx = match text.find(postal_code) {
        Some(idx) if idx > 0 => idx,
        _ => return String::new(),
    };

    // Character-based window; byte slicing could split a Danish letter.
    let window_start = text[..idx]
        .char_indices()
        .rev()
        .take(ADDRESS_WINDOW_CHARS)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(idx);

    let prefix = text[window_start..idx].trim_matches([' ', ',']);
    let tokens: Vec<&str> = prefix.split_whitespace().collect();
    let skip = tokens.len().saturating_sub(ADDRESS_MAX_TOKENS);
    tokens[skip..].join(" ").trim_matches([' ', ',']).to_string()
}
