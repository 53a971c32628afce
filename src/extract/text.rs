// src/extract/text.rs
use regex::Regex;

/// Turns raw markup into a single-line plain-text rendering plus a
/// best-effort page title. Pure; no extraction heuristics live here.
pub struct TextNormalizer {
    script_regex: Regex,
    style_regex: Regex,
    tag_regex: Regex,
    whitespace_regex: Regex,
    title_regex: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            script_regex: Regex::new(r"(?is)<script.*?</script>").unwrap(),
            style_regex: Regex::new(r"(?is)<style.*?</style>").unwrap(),
            tag_regex: Regex::new(r"<[^>]+>").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            title_regex: Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap(),
        }
    }

    /// Script and style blocks go first so their contents never leak into
    /// the extracted fields; then generic tags, entities, whitespace.
    pub fn normalize(&self, raw_html: &str) -> String {
        let no_script = self.script_regex.replace_all(raw_html, " ");
        let no_style = self.style_regex.replace_all(&no_script, " ");
        let no_tags = self.tag_regex.replace_all(&no_style, " ");
        let decoded = html_escape::decode_html_entities(&no_tags);
        self.whitespace_regex
            .replace_all(&decoded, " ")
            .trim()
            .to_string()
    }

    /// Content of the first title tag; empty string when there is none.
    pub fn title(&self, raw_html: &str) -> String {
        let inner = match self.title_regex.captures(raw_html) {
            Some(captures) => captures.get(1).map_or("", |m| m.as_str()).to_string(),
            None => return String::new(),
        };
        let no_tags = self.tag_regex.replace_all(&inner, " ");
        let decoded = html_escape::decode_html_entities(&no_tags);
        self.whitespace_regex
            .replace_all(&decoded, " ")
            .trim()
            .to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_tags_and_collapses_whitespace() {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize("<p>Ring  nu</p>\n<div>12 34 56 78</div>");
        assert_eq!(text, "Ring nu 12 34 56 78");
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
        assert!(!text.contains("  "));
    }

    #[test]
    fn normalize_drops_script_and_style_contents() {
        let normalizer = TextNormalizer::new();
        let html = "<SCRIPT>var telefon = '99999999';</SCRIPT>\
                    <style>.akut { color: red; }</style>Kontakt os";
        let text = normalizer.normalize(html);
        assert_eq!(text, "Kontakt os");
    }

    #[test]
    fn normalize_decodes_entities() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Smith &amp; S&oslash;n"),
            "Smith & Søn"
        );
    }

    #[test]
    fn title_takes_first_title_tag() {
        let normalizer = TextNormalizer::new();
        let html = "<html><title> VVS   Akut A/S | Forside </title>\
                    <title>ignored</title></html>";
        assert_eq!(normalizer.title(html), "VVS Akut A/S | Forside");
    }

    #[test]
    fn missing_title_is_empty_not_an_error() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.title("<html><body>no title</body></html>"), "");
    }
}
