//! Line-level grammar of the llms.txt dialect.
//!
//! ```text
//! # <title>
//! > <description>
//!
//! ## Core Content
//! - [<title>](<url>)
//!
//! ## Optional
//! - [<title>](<url>)
//! ```

use std::collections::HashSet;

pub const TITLE_MARKER: &str = "# ";
pub const DESCRIPTION_MARKER: &str = ">";
pub const CORE_HEADER: &str = "## Core Content";
pub const OPTIONAL_HEADER: &str = "## Optional";

/// Formats the document's title line.
pub fn title_line(title: &str) -> String {
    format!("{TITLE_MARKER}{title}")
}

/// Formats the document's description blockquote.
pub fn description_line(description: &str) -> String {
    format!("{DESCRIPTION_MARKER} {description}")
}

/// Formats a link list item.
pub fn item_line(title: &str, url: &str) -> String {
    format!("- [{title}]({url})")
}

pub fn is_title_line(line: &str) -> bool {
    line.starts_with(TITLE_MARKER)
}

pub fn is_description_line(line: &str) -> bool {
    line.starts_with(DESCRIPTION_MARKER)
}

pub fn is_core_header(line: &str) -> bool {
    line.eq_ignore_ascii_case(CORE_HEADER)
}

pub fn is_optional_header(line: &str) -> bool {
    line.eq_ignore_ascii_case(OPTIONAL_HEADER)
}

/// Any markdown ATX header (`#`, `##`, ...).
pub fn is_header(line: &str) -> bool {
    let level = line.chars().take_while(|c| *c == '#').count();
    level > 0 && line[level..].starts_with(' ')
}

/// Text following the title marker.
pub fn title_text(line: &str) -> Option<&str> {
    line.strip_prefix(TITLE_MARKER).map(str::trim)
}

/// Text following the blockquote marker.
pub fn description_text(line: &str) -> Option<&str> {
    line.strip_prefix(DESCRIPTION_MARKER).map(str::trim)
}

/// A `- [title](url)` line, split into its title and URL.
///
/// The title runs up to the last `](`, the URL from there to the closing `)` that
/// ends the line, so brackets in titles and parentheses in URLs both survive. Neither
/// part may be blank. No whitespace is tolerated around the line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ItemLine<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

pub fn parse_item_line(line: &str) -> Option<ItemLine<'_>> {
    let inner = line.strip_prefix("- [")?.strip_suffix(')')?;
    let split = inner.rfind("](")?;
    let (title, url) = (&inner[..split], &inner[split + 2..]);
    if title.trim().is_empty() || url.trim().is_empty() {
        return None;
    }
    Some(ItemLine { title, url })
}

/// Drops every item line whose URL already appeared on an earlier item line.
/// Non-item lines are kept as they are.
pub fn dedup_items(lines: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    lines
        .into_iter()
        .filter(|line| match parse_item_line(line) {
            Some(item) => seen.insert(item.url.to_string()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lines() {
        assert_eq!(
            parse_item_line("- [Page One](https://example.com/page-one)"),
            Some(ItemLine {
                title: "Page One",
                url: "https://example.com/page-one"
            })
        );
        assert_eq!(
            parse_item_line("- [Wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
            Some(ItemLine {
                title: "Wiki",
                url: "https://en.wikipedia.org/wiki/Rust_(language)"
            })
        );
        assert_eq!(
            parse_item_line("- [See [x](y) docs](https://a.com/1)"),
            Some(ItemLine {
                title: "See [x](y) docs",
                url: "https://a.com/1"
            })
        );

        for not_an_item in [
            "- missing-brackets",
            "-[a](b)",
            "* [a](b)",
            "  - [a](b)",
            "- [a](b) trailing",
            "- [a] (b)",
            "- []()",
            "- [](x)",
            "- [ ](https://a.com)",
            "- [a]( )",
            "",
        ] {
            assert_eq!(parse_item_line(not_an_item), None, "{not_an_item}");
        }
    }

    #[test]
    fn test_dedup_items_keeps_first_url() {
        let lines: Vec<String> = [
            "## Core Content",
            "- [First](https://a.com/x)",
            "",
            "- [Second](https://a.com/x)",
            "- [Other](https://a.com/y)",
            "",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(
            dedup_items(lines),
            vec!["## Core Content", "- [First](https://a.com/x)", "", "- [Other](https://a.com/y)", ""]
        );
    }

    #[test]
    fn test_headers() {
        assert!(is_core_header("## Core Content"));
        assert!(is_core_header("## core content"));
        assert!(!is_core_header("## Core Content extra"));
        assert!(is_optional_header("## OPTIONAL"));
        assert!(!is_optional_header("### Optional"));

        assert!(is_header("# Title"));
        assert!(is_header("### Deep"));
        assert!(!is_header("#hashtag"));
        assert!(!is_header("- item"));
    }

    #[test]
    fn test_markers() {
        assert!(is_title_line("# Site"));
        assert!(!is_title_line("## Core Content"));
        assert_eq!(title_text("#  Site "), Some("Site"));
        assert_eq!(description_text(">A summary"), Some("A summary"));
        assert_eq!(description_line("A summary"), "> A summary");
        assert_eq!(item_line("A", "https://a.com"), "- [A](https://a.com)");
    }
}
