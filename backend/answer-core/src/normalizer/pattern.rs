//! Regex rewrite pipeline. Rule order matters: later rules see the output of
//! earlier ones.

use super::entities::decode_entities;
use super::heading_block;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?>(.*?)</h[1-6]\s*>").unwrap());
static BLOCK_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:p|div)(?:\s[^>]*)?/?>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br(?:\s[^>]*)?/?>").unwrap());
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<strong(?:\s[^>]*)?>(.*?)</strong\s*>").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b(?:\s[^>]*)?>(.*?)</b\s*>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Markup to tag-free, entity-decoded text. Whitespace is left for the caller.
pub(super) fn render(raw: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(raw, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = HEADING.replace_all(&text, |caps: &Captures| heading_block(&caps[1]));
    let text = BLOCK_BOUNDARY.replace_all(&text, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = STRONG.replace_all(&text, "**${1}**");
    let text = BOLD.replace_all(&text, "**${1}**");
    let text = ANY_TAG.replace_all(&text, "");

    decode_entities(&text)
}
