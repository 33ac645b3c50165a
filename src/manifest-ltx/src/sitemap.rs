//! Sitemap extraction: turns sitemap text into ordered (location, priority) entries.

use std::sync::LazyLock;

use quick_xml::escape::unescape;
use regex::Regex;

use crate::errors::{Error, Result};

/// Priority assigned to entries whose `<priority>` is missing or unusable.
pub const DEFAULT_PRIORITY: f64 = 0.5;

static URL_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<url(?:\s[^>]*)?>(.*?)</url\s*>").expect("url block regex is valid"));

static LOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<loc\s*>(.*?)</loc\s*>").expect("loc regex is valid"));

static PRIORITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<priority\s*>(.*?)</priority\s*>").expect("priority regex is valid"));

/// A single `<url>` entry of a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// The URL location. Never empty.
    pub loc: String,
    /// Crawl priority hint in `[0, 1]`.
    pub priority: f64,
}

/// Extracts every `<url>` entry from sitemap text, in document order.
///
/// Supports sitemaps in the standard format:
/// ```xml
/// <urlset>
///   <url>
///     <loc>https://example.com/page</loc>
///     <priority>0.8</priority>
///   </url>
/// </urlset>
/// ```
///
/// Blocks without a `<loc>` are skipped and duplicate locations are kept.
///
/// # Errors
///
/// Returns [`Error::Parse`] when no entry could be extracted.
pub fn extract(xml: &str) -> Result<Vec<SitemapEntry>> {
    let entries: Vec<SitemapEntry> = URL_BLOCK
        .captures_iter(xml)
        .filter_map(|block| {
            let body = block.get(1)?.as_str();
            let loc = first_tag_text(&LOC, body).map(unescape_loc).filter(|loc| !loc.is_empty())?;
            let priority = first_tag_text(&PRIORITY, body)
                .map(parse_priority)
                .unwrap_or(DEFAULT_PRIORITY);
            Some(SitemapEntry { loc, priority })
        })
        .collect();

    if entries.is_empty() {
        return Err(Error::Parse("No URLs found in sitemap".to_string()));
    }

    Ok(entries)
}

fn first_tag_text<'a>(tag: &Regex, body: &'a str) -> Option<&'a str> {
    tag.captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

fn unescape_loc(raw: &str) -> String {
    match unescape(raw) {
        Ok(text) => text.trim().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// The whole (trimmed) text must be a number in `[0, 1]`. Anything else, including a
/// number followed by other text such as `0.8abc`, counts as unparsable.
fn parse_priority(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => p,
        _ => DEFAULT_PRIORITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sitemap() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/page1</loc>
    <priority>0.8</priority>
  </url>
  <url>
    <loc>https://example.com/page2</loc>
  </url>
</urlset>"#;

        let entries = extract(xml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].loc, "https://example.com/page1");
        assert_eq!(entries[0].priority, 0.8);
        assert_eq!(entries[1].loc, "https://example.com/page2");
        assert_eq!(entries[1].priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_extract_sitemap_empty() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
</urlset>"#;

        assert!(matches!(extract(xml), Err(Error::Parse(_))));
        assert!(matches!(extract(""), Err(Error::Parse(_))));
        assert!(matches!(extract("not xml at all"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_blocks_without_loc_are_skipped() {
        let xml = "<urlset><url><priority>0.9</priority></url><url><loc>  https://a.com/x  </loc></url></urlset>";
        let entries = extract(xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "https://a.com/x");

        let only_empty = "<url><loc>   </loc></url>";
        assert!(extract(only_empty).is_err());
    }

    #[test]
    fn test_case_insensitive_and_first_values_win() {
        let xml = "<URL><LOC>https://a.com/1</LOC><loc>https://a.com/ignored</loc><Priority>0.3</Priority><priority>0.9</priority></URL>";
        let entries = extract(xml).unwrap();
        assert_eq!(
            entries,
            vec![SitemapEntry {
                loc: "https://a.com/1".to_string(),
                priority: 0.3
            }]
        );
    }

    #[test]
    fn test_unusable_priority_defaults() {
        let xml = "<url><loc>https://a.com/1</loc><priority>high</priority></url>\
                   <url><loc>https://a.com/2</loc><priority>7</priority></url>\
                   <url><loc>https://a.com/3</loc><priority> 1.0 </priority></url>\
                   <url><loc>https://a.com/4</loc><priority>0.8abc</priority></url>";
        let priorities: Vec<f64> = extract(xml).unwrap().iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![0.5, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let xml = "<url><loc>https://a.com/</loc></url><url><loc>https://a.com/</loc></url>";
        assert_eq!(extract(xml).unwrap().len(), 2);
    }

    #[test]
    fn test_loc_entities_are_unescaped() {
        let xml = "<url><loc>https://a.com/search?q=1&amp;page=2</loc></url>";
        assert_eq!(extract(xml).unwrap()[0].loc, "https://a.com/search?q=1&page=2");
    }

    #[test]
    fn test_many_blocks_keep_document_order() {
        let xml: String = (0..25)
            .map(|i| format!("<url>\n<loc>https://a.com/{i}</loc>\n</url>\n"))
            .collect();
        let entries = extract(&xml).unwrap();
        assert_eq!(entries.len(), 25);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.loc, format!("https://a.com/{i}"));
        }
    }
}
