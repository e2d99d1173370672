//! HTML answer to spreadsheet-friendly plain text.
//!
//! Two strategies produce the same shape of output:
//! - [`NormalizeStrategy::Pattern`] runs an ordered list of regex rewrites over
//!   the markup. Fast, and tolerant of broken HTML at the cost of being
//!   approximate on pathological nesting.
//! - [`NormalizeStrategy::Tree`] parses the markup into a node tree and emits
//!   text per element kind.
//!
//! Both finish with the same whitespace pass: collapse space runs and blank
//! lines, trim every line, drop empty lines, separate the disclaimer, trim.
//! Every function here is pure and total.

mod entities;
mod pattern;
mod tree;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Width of the `=` rule written under headings.
pub const HEADING_RULE_WIDTH: usize = 40;

/// Marker that gets a blank line in front of it.
pub const DISCLAIMER_MARKER: &str = "**Disclaimer:**";

static HEADING_RULE: Lazy<String> = Lazy::new(|| "=".repeat(HEADING_RULE_WIDTH));

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeStrategy {
    #[default]
    Pattern,
    Tree,
}

/// Normalize with the regex pipeline.
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, NormalizeStrategy::Pattern)
}

/// Normalize by walking a parsed node tree.
pub fn normalize_tree(raw: &str) -> String {
    normalize_with(raw, NormalizeStrategy::Tree)
}

pub fn normalize_with(raw: &str, strategy: NormalizeStrategy) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = match strategy {
        NormalizeStrategy::Pattern => pattern::render(raw),
        NormalizeStrategy::Tree => tree::render(raw),
    };

    tidy_whitespace(&text)
}

/// Shared tail of both strategies; operates on tag-free, entity-decoded text.
pub(crate) fn tidy_whitespace(text: &str) -> String {
    let text = SPACE_RUN.replace_all(text, " ");
    let text = NEWLINE_RUN.replace_all(&text, "\n");

    let joined = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    separate_disclaimers(&joined).trim().to_string()
}

/// Blank line before every disclaimer marker, wherever it sits on its line.
fn separate_disclaimers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (index, piece) in text.split(DISCLAIMER_MARKER).enumerate() {
        if index > 0 {
            out.truncate(out.trim_end().len());
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(DISCLAIMER_MARKER);
        }
        out.push_str(piece);
    }

    out
}

/// `"\n<inner>\n<rule>\n"`, the heading block both strategies emit.
pub(crate) fn heading_block(inner: &str) -> String {
    format!("\n{inner}\n{}\n", HEADING_RULE.as_str())
}
