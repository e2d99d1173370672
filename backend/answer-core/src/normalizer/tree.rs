//! Parse-tree rendition of the pattern rules. Text nodes arrive already
//! entity-decoded from the parser.

use super::heading_block;

use scraper::{ElementRef, Html};

pub(super) fn render(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let mut out = String::with_capacity(raw.len());
    emit_children(fragment.root_element(), &mut out);
    out
}

fn emit_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            emit_element(child_element, out);
        }
    }
}

fn emit_element(element: ElementRef<'_>, out: &mut String) {
    match element.value().name() {
        "script" | "style" => {}
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let mut inner = String::new();
            emit_children(element, &mut inner);
            out.push_str(&heading_block(&inner));
        }
        "p" | "div" => {
            out.push('\n');
            emit_children(element, out);
            out.push('\n');
        }
        "br" => out.push('\n'),
        "strong" | "b" => {
            out.push_str("**");
            emit_children(element, out);
            out.push_str("**");
        }
        _ => emit_children(element, out),
    }
}
