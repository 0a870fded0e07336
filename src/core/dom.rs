// src/core/dom.rs
//
// Small lookup helpers over the parsed document. All structural access
// goes through these; callers never slice raw markup.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// First element matching `css` under `root`, if the selector is valid
/// and anything matches.
pub fn first_match<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    root.select(&sel).next()
}

/// Find an element by its `id` attribute anywhere in the document.
/// Attribute lookup rather than a `#id` selector: the planning page uses
/// purely numeric ids, which are not valid CSS identifiers.
pub fn by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.tree
        .nodes()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().attr("id") == Some(id))
}

/// All `div` elements whose inline style contains `marker`, in document
/// order.
pub fn divs_with_style_marker<'a>(doc: &'a Html, marker: &str) -> Vec<ElementRef<'a>> {
    doc.tree
        .nodes()
        .filter_map(ElementRef::wrap)
        .filter(|el| {
            el.value().name() == "div"
                && el.value().attr("style").is_some_and(|s| s.contains(marker))
        })
        .collect()
}

/// Whitespace-normalized text content of an element.
pub fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text content of an element split at `<br>` boundaries, in order.
/// Text inside nested elements lands in the current segment; each
/// segment is whitespace-normalized but blanks are kept (callers decide
/// what a blank segment means).
pub fn br_segments(el: ElementRef) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = s!();

    for node in el.descendants() {
        if let Some(e) = node.value().as_element() {
            if e.name() == "br" {
                segments.push(normalize_ws(&current));
                current.clear();
            }
        } else if let Some(t) = node.value().as_text() {
            current.push_str(t);
            current.push(' ');
        }
    }
    segments.push(normalize_ws(&current));
    segments
}
