//! Reads llms.txt text back into structured data.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::grammar::{
    description_text, is_core_header, is_description_line, is_header, is_optional_header, is_title_line,
    parse_item_line, title_text,
};
use crate::model::ContentItem;

/// The structured contents of an llms.txt document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedManifest {
    pub title: String,
    pub description: String,
    pub core_content: Vec<ContentItem>,
    pub optional_content: Vec<ContentItem>,
}

#[derive(PartialEq, Eq, Copy, Clone)]
enum Section {
    None,
    Core,
    Optional,
}

/// Parses llms.txt text.
///
/// More forgiving than [`crate::validate_and_correct`]: the title and description may sit
/// anywhere, sections may come in any order, lines are trimmed, and anything inside a
/// section that is not a link item is skipped. URLs are not checked.
///
/// # Errors
///
/// [`Error::Structure`] when there is no title line, no description line, or no item in
/// the `## Core Content` section.
pub fn parse(text: &str) -> Result<ParsedManifest> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let title = lines
        .iter()
        .find(|line| is_title_line(line))
        .and_then(|line| title_text(line))
        .ok_or_else(|| Error::Structure("missing '# <title>' line".to_string()))?;

    let description = lines
        .iter()
        .find(|line| is_description_line(line))
        .and_then(|line| description_text(line))
        .ok_or_else(|| Error::Structure("missing '> <description>' line".to_string()))?;

    let mut core_content = Vec::new();
    let mut optional_content = Vec::new();
    let mut section = Section::None;

    for line in &lines {
        if is_core_header(line) {
            section = Section::Core;
        } else if is_optional_header(line) {
            section = Section::Optional;
        } else if is_header(line) {
            section = Section::None;
        } else if let Some(item) = parse_item_line(line) {
            let item = ContentItem::new(item.title, item.url);
            match section {
                Section::Core => core_content.push(item),
                Section::Optional => optional_content.push(item),
                Section::None => {}
            }
        }
    }

    if core_content.is_empty() {
        return Err(Error::Structure(
            "no '- [title](url)' items found in the '## Core Content' section".to_string(),
        ));
    }

    Ok(ParsedManifest {
        title: title.to_string(),
        description: description.to_string(),
        core_content,
        optional_content,
    })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_parse_document() {
        let parsed = parse(indoc! {"
            # Test Site
            > A test description

            ## Core Content
            - [Page One](https://example.com/page-one)
            - [Page Two](https://example.com/page-two)

            ## Optional
            - [Extra](https://example.com/extra)
        "})
        .unwrap();

        assert_eq!(parsed.title, "Test Site");
        assert_eq!(parsed.description, "A test description");
        assert_eq!(
            parsed.core_content,
            vec![
                ContentItem::new("Page One", "https://example.com/page-one"),
                ContentItem::new("Page Two", "https://example.com/page-two"),
            ]
        );
        assert_eq!(parsed.optional_content, vec![ContentItem::new("Extra", "https://example.com/extra")]);
    }

    #[test]
    fn test_parse_is_permissive() {
        let parsed = parse(indoc! {"
            Some preamble text.

            ## OPTIONAL
              - [Extra](not even a url)
            stray words

            # Test Site
              > A test description
            ## core content
            - missing-brackets
            - [Page One](https://example.com/page-one)
            ## Other Section
            - [Ignored](https://example.com/ignored)
        "})
        .unwrap();

        assert_eq!(parsed.title, "Test Site");
        assert_eq!(parsed.description, "A test description");
        assert_eq!(
            parsed.core_content,
            vec![ContentItem::new("Page One", "https://example.com/page-one")]
        );
        assert_eq!(parsed.optional_content, vec![ContentItem::new("Extra", "not even a url")]);
    }

    #[test]
    fn test_parse_failures() {
        let no_title = "> desc\n## Core Content\n- [A](https://a.com)";
        let no_description = "# Title\n## Core Content\n- [A](https://a.com)";
        let no_core = "# Title\n> desc\n## Optional\n- [A](https://a.com)";
        let empty_core = "# Title\n> desc\n## Core Content\n- missing-brackets";

        for text in [no_title, no_description, no_core, empty_core, ""] {
            assert!(matches!(parse(text), Err(Error::Structure(_))), "{text:?}");
        }
    }

    #[test]
    fn test_json_shape() {
        let parsed = parse("# T\n> D\n## Core Content\n- [A](https://a.com/a)").unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "T",
                "description": "D",
                "coreContent": [{"title": "A", "url": "https://a.com/a"}],
                "optionalContent": []
            })
        );
    }
}
