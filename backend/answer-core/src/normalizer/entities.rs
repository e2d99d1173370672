use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::Html;

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

/// Decode named, decimal and hex character references.
///
/// Each reference is handed to the HTML parser on its own, so stray `<` in the
/// surrounding text is never reinterpreted as markup. Unknown names stay as written.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY
        .replace_all(text, |caps: &Captures| decode_one(&caps[0]))
        .into_owned()
}

fn decode_one(reference: &str) -> String {
    let fragment = Html::parse_fragment(reference);
    let decoded: String = fragment.root_element().text().collect();

    if decoded.is_empty() {
        reference.to_string()
    } else {
        decoded
    }
}
