//! Renders a [`ContentModel`] as llms.txt markdown.

use crate::grammar::{CORE_HEADER, OPTIONAL_HEADER, dedup_items, description_line, item_line, title_line};
use crate::model::ContentModel;

/// Renders the model as llms.txt text.
///
/// The `## Optional` section is only written when there are optional items. An item
/// whose URL was already written (core items come first) is left out.
///
/// A model without metadata still renders, with empty `# ` and `> ` lines. Use
/// [`crate::ManifestManager::generate`] to refuse that case instead.
///
/// # Examples
///
/// ```
/// # use manifest_ltx::{ContentItem, ContentModel, render};
/// let mut model = ContentModel::new();
/// model.set_metadata("Site", "About the site").unwrap();
/// model.add_core_content(&[ContentItem::new("Home", "https://example.com/")]).unwrap();
///
/// assert_eq!(
///     render(&model),
///     "# Site\n> About the site\n\n## Core Content\n- [Home](https://example.com/)\n"
/// );
/// ```
pub fn render(model: &ContentModel) -> String {
    let (title, description) = model
        .metadata()
        .map(|m| (m.title(), m.description()))
        .unwrap_or_default();

    let mut lines = vec![
        title_line(title),
        description_line(description),
        String::new(),
        CORE_HEADER.to_string(),
    ];
    lines.extend(model.core_content().iter().map(|item| item_line(&item.title, &item.url)));
    lines.push(String::new());

    if !model.optional_content().is_empty() {
        lines.push(OPTIONAL_HEADER.to_string());
        lines.extend(model.optional_content().iter().map(|item| item_line(&item.title, &item.url)));
        lines.push(String::new());
    }

    dedup_items(lines).join("\n")
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::model::ContentItem;

    fn model_with(core: &[ContentItem], optional: &[ContentItem]) -> ContentModel {
        let mut model = ContentModel::new();
        model.set_metadata("Test Site", "A test description").unwrap();
        model.add_core_content(core).unwrap();
        model.add_optional_content(optional).unwrap();
        model
    }

    #[test]
    fn test_render_full_document() {
        let model = model_with(
            &[
                ContentItem::new("Page One", "https://example.com/page-one"),
                ContentItem::new("Page Two", "https://example.com/page-two"),
            ],
            &[ContentItem::new("Changelog", "https://example.com/changelog")],
        );

        let expected = indoc! {"
            # Test Site
            > A test description

            ## Core Content
            - [Page One](https://example.com/page-one)
            - [Page Two](https://example.com/page-two)

            ## Optional
            - [Changelog](https://example.com/changelog)
        "};
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_render_omits_empty_optional_section() {
        let model = model_with(&[ContentItem::new("Page One", "https://example.com/page-one")], &[]);
        let text = render(&model);
        assert!(!text.contains("## Optional"));
        assert!(text.ends_with("- [Page One](https://example.com/page-one)\n"));
    }

    #[test]
    fn test_render_empty_core_keeps_header() {
        let model = model_with(&[], &[]);
        assert_eq!(render(&model), "# Test Site\n> A test description\n\n## Core Content\n");
    }

    #[test]
    fn test_duplicate_urls_keep_first_title() {
        let model = model_with(
            &[
                ContentItem::new("First", "https://example.com/x"),
                ContentItem::new("Second", "https://example.com/x"),
            ],
            &[ContentItem::new("Third", "https://example.com/x")],
        );
        let text = render(&model);
        assert_eq!(text.matches("https://example.com/x").count(), 1);
        assert!(text.contains("- [First](https://example.com/x)"));
        // the optional header survives even though its only item was a duplicate
        assert!(text.contains("## Optional"));
    }
}
