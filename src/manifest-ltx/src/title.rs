//! Derives human-readable page titles from URLs.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").expect("separator regex is valid"));

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w+$").expect("extension regex is valid"));

static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").expect("word start regex is valid"));

/// Converts the last path segment of a URL into a title.
///
/// Root URLs produce the hostname. Anything that cannot be handled (unparsable URL,
/// percent-escapes that do not decode to UTF-8) yields the input unchanged.
///
/// # Examples
///
/// ```
/// # use manifest_ltx::derive_title;
/// assert_eq!(derive_title("https://example.com/docs/getting_started.html"), "Getting Started");
/// assert_eq!(derive_title("https://example.com/"), "example.com");
/// assert_eq!(derive_title("not a url"), "not a url");
/// ```
pub fn derive_title(url: &str) -> String {
    try_derive_title(url).unwrap_or_else(|| url.to_string())
}

fn try_derive_title(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let path = parsed.path();

    if path.is_empty() || path == "/" {
        return parsed.host_str().map(str::to_string);
    }

    let path = path.strip_suffix('/').unwrap_or(path);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;

    let spaced = SEPARATORS.replace_all(&decoded, " ");
    let stem = EXTENSION.replace(&spaced, "");
    let title = WORD_START.replace_all(&stem, |c: &regex::Captures| c[0].to_uppercase());

    Some(title.into_owned())
}
