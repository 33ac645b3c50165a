//! Normalize-or-reject pass over llms.txt text.
//!
//! The title and description lines are fully determined by the supplied metadata, so they
//! are rewritten in place. Link sections cannot be guessed at: any line that is not an exact
//! `- [title](url)` item with a parsable URL rejects the whole document.

use url::Url;

use crate::errors::{Error, Result};
use crate::grammar::{
    dedup_items, description_line, is_core_header, is_description_line, is_optional_header, is_title_line,
    parse_item_line, title_line,
};
use crate::model::ManifestMetadata;

/// Corrects the title and description lines of `text` to match `metadata`, checks both
/// link sections and drops items whose URL appeared earlier.
///
/// Running it on its own output returns the same text.
///
/// # Errors
///
/// [`Error::Structure`] when the `## Core Content` section is missing, or a section holds
/// a line that is not a link item, or a link item's URL does not parse.
pub fn validate_and_correct(text: &str, metadata: &ManifestMetadata) -> Result<String> {
    let mut lines: Vec<String> = text.split('\n').map(|line| line.trim_end().to_string()).collect();

    let expected_title = title_line(metadata.title());
    match lines.first() {
        Some(first) if is_title_line(first) => {
            if *first != expected_title {
                lines[0] = expected_title;
            }
        }
        _ => lines.insert(0, expected_title),
    }

    let expected_description = description_line(metadata.description());
    if lines.get(1) != Some(&expected_description) {
        while lines.len() > 1 && is_description_line(&lines[1]) {
            lines.remove(1);
        }
        lines.insert(1, expected_description);
    }

    let core = lines
        .iter()
        .position(|line| is_core_header(line))
        .ok_or_else(|| Error::Structure("missing required '## Core Content' section".to_string()))?;
    let optional = lines.iter().position(|line| is_optional_header(line));

    let core_end = match optional {
        Some(o) if o > core => o,
        _ => lines.len(),
    };
    check_section("Core Content", &lines[core + 1..core_end])?;
    if let Some(o) = optional {
        check_section("Optional", &lines[o + 1..])?;
    }

    Ok(dedup_items(lines).join("\n"))
}

fn check_section(section: &str, lines: &[String]) -> Result<()> {
    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        let item = parse_item_line(line).ok_or_else(|| {
            Error::Structure(format!(
                "'{section}' section line is not a '- [title](url)' item: '{line}'"
            ))
        })?;
        Url::parse(item.url)
            .map_err(|e| Error::Structure(format!("'{section}' section has an invalid URL '{}': {e}", item.url)))?;
    }
    Ok(())
}
