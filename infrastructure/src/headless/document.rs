//! Parsed snapshot of the headless page source and structural edits.
//!
//! Every element in the page source carries a `data-headless-id`
//! attribute. Ids are handed out by an [`IdAllocator`] when the page is
//! loaded and when an edit inserts new markup, and are never reused, so an
//! id keeps naming the same element across edits elsewhere in the page.
//! Serialization for callers ([`Snapshot::html`], [`Snapshot::inner_html`])
//! leaves the attribute out.

use super::HeadlessPageError;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use toolbar_domain::ElementId;

pub(super) const ID_ATTR: &str = "data-headless-id";

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

#[derive(Debug, Clone, Copy)]
pub(super) enum Edit<'a> {
    Remove,
    ReplaceChildren(&'a str),
}

/// Monotonic element id source for one page.
#[derive(Debug, Default)]
pub(super) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

pub(super) struct Snapshot {
    doc: Html,
}

impl Snapshot {
    pub(super) fn parse(source: &str) -> Self {
        Self {
            doc: Html::parse_document(source),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.doc.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    pub(super) fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.elements().find(|e| id_of(e) == Some(id))
    }

    /// Ids of every element currently in the document.
    pub(super) fn ids(&self) -> HashSet<ElementId> {
        self.elements().filter_map(|e| id_of(&e)).collect()
    }

    /// Elements matching `selector`, optionally restricted to strict
    /// descendants of `within`.
    pub(super) fn select(
        &self,
        selector: &str,
        within: Option<ElementId>,
    ) -> Result<Vec<ElementId>, HeadlessPageError> {
        let parsed = Selector::parse(selector).map_err(|e| HeadlessPageError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{:?}", e),
        })?;
        let scope = match within {
            Some(root) => match self.element(root) {
                Some(element) => Some(element),
                None => return Ok(Vec::new()),
            },
            None => None,
        };
        Ok(self
            .doc
            .select(&parsed)
            .filter(|el| match scope {
                Some(scope) => el.ancestors().any(|a| a.id() == scope.id()),
                None => true,
            })
            .filter_map(|el| id_of(&el))
            .collect())
    }

    /// Serialize the document with an id on every element. With `restamp`
    /// ids already present in the source are discarded and reassigned.
    pub(super) fn stamped(&self, ids: &mut IdAllocator, restamp: bool) -> String {
        Writer::new(Some(ids), restamp, None).document(&self.doc)
    }

    /// Serialize the document with `edit` applied to `target`. Elements
    /// outside the edited subtree keep their ids; inserted markup gets
    /// fresh ones.
    pub(super) fn edit(
        &self,
        target: ElementId,
        edit: Edit<'_>,
        ids: &mut IdAllocator,
    ) -> Option<String> {
        let element = self.element(target)?;
        let out = Writer::new(Some(&mut *ids), false, Some((element, edit))).document(&self.doc);
        // reparsing may synthesize elements the writer never saw
        Some(Snapshot::parse(&out).stamped(ids, false))
    }

    /// Document source without id attributes.
    pub(super) fn html(&self) -> String {
        Writer::new(None, false, None).document(&self.doc)
    }

    /// Inner HTML of `id` without id attributes.
    pub(super) fn inner_html(&self, id: ElementId) -> Option<String> {
        let element = self.element(id)?;
        let mut writer = Writer::new(None, false, None);
        writer.children(element, Origin::Document);
        Some(writer.out)
    }
}

fn id_of(element: &ElementRef<'_>) -> Option<ElementId> {
    element
        .value()
        .attr(ID_ATTR)
        .and_then(|v| v.parse().ok())
        .map(ElementId)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Document,
    Fragment,
}

struct Stamp<'i> {
    ids: &'i mut IdAllocator,
    seen: HashSet<ElementId>,
}

struct Writer<'d, 'i> {
    out: String,
    stamp: Option<Stamp<'i>>,
    restamp: bool,
    edit: Option<(ElementRef<'d>, Edit<'d>)>,
}

impl<'d, 'i> Writer<'d, 'i> {
    fn new(
        ids: Option<&'i mut IdAllocator>,
        restamp: bool,
        edit: Option<(ElementRef<'d>, Edit<'d>)>,
    ) -> Self {
        Self {
            out: String::new(),
            stamp: ids.map(|ids| Stamp {
                ids,
                seen: HashSet::new(),
            }),
            restamp,
            edit,
        }
    }

    fn document(mut self, doc: &Html) -> String {
        for child in doc.tree.root().children() {
            match ElementRef::wrap(child) {
                Some(el) => self.element(el, Origin::Document),
                None => write_leaf(child.value(), false, &mut self.out),
            }
        }
        self.out
    }

    fn children(&mut self, element: ElementRef<'_>, origin: Origin) {
        let raw = RAW_TEXT_ELEMENTS.contains(&element.value().name());
        for child in element.children() {
            match ElementRef::wrap(child) {
                Some(el) => self.element(el, origin),
                None => write_leaf(child.value(), raw, &mut self.out),
            }
        }
    }

    /// The id to write for `element`, if ids are being written at all.
    /// A duplicated id keeps its first holder.
    fn id_for(&mut self, element: &ElementRef<'_>, origin: Origin) -> Option<ElementId> {
        let fresh = self.restamp || origin == Origin::Fragment;
        let stamp = self.stamp.as_mut()?;
        let existing = if fresh { None } else { id_of(element) };
        let id = match existing {
            Some(id) if !stamp.seen.contains(&id) => id,
            _ => stamp.ids.allocate(),
        };
        stamp.seen.insert(id);
        Some(id)
    }

    fn element(&mut self, element: ElementRef<'_>, origin: Origin) {
        // fragment nodes live in another tree, so their node ids can collide
        let edit = match self.edit {
            Some((target, edit)) if origin == Origin::Document && target.id() == element.id() => {
                Some(edit)
            }
            _ => None,
        };
        if matches!(edit, Some(Edit::Remove)) {
            return;
        }

        let value = element.value();
        let name = value.name();
        self.out.push('<');
        self.out.push_str(name);
        for (attr, attr_value) in value.attrs() {
            if attr == ID_ATTR {
                continue;
            }
            self.out.push(' ');
            self.out.push_str(attr);
            self.out.push_str("=\"");
            escape_into(attr_value, true, &mut self.out);
            self.out.push('"');
        }
        if let Some(id) = self.id_for(&element, origin) {
            self.out.push(' ');
            self.out.push_str(ID_ATTR);
            self.out.push_str("=\"");
            self.out.push_str(&id.0.to_string());
            self.out.push('"');
        }
        self.out.push('>');
        if VOID_ELEMENTS.contains(&name) {
            return;
        }

        match edit {
            Some(Edit::ReplaceChildren(html)) => self.fragment(name, html),
            _ => self.children(element, origin),
        }

        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn fragment(&mut self, parent: &str, html: &str) {
        if RAW_TEXT_ELEMENTS.contains(&parent) {
            self.out.push_str(html);
            return;
        }
        let fragment = Html::parse_fragment(html);
        // the fragment parser wraps its nodes in a synthetic <html>
        self.children(fragment.root_element(), Origin::Fragment);
    }
}

fn write_leaf(node: &Node, raw: bool, out: &mut String) {
    match node {
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(text) if raw => out.push_str(text),
        Node::Text(text) => escape_into(text, false, out),
        _ => {}
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head></head><body><div id="a"><p>one</p><p>two</p></div><span id="b">x &amp; y</span></body></html>"#;

    fn stamped(source: &str) -> (Snapshot, IdAllocator) {
        let mut ids = IdAllocator::default();
        let snapshot = Snapshot::parse(&Snapshot::parse(source).stamped(&mut ids, true));
        (snapshot, ids)
    }

    fn one(snapshot: &Snapshot, selector: &str) -> ElementId {
        snapshot.select(selector, None).unwrap()[0]
    }

    #[test]
    fn test_every_element_gets_a_distinct_id() {
        let (snapshot, _) = stamped(PAGE);
        // html, head, body, div, p, p, span
        assert_eq!(snapshot.ids().len(), 7);
        assert_eq!(snapshot.select("p", None).unwrap().len(), 2);
    }

    #[test]
    fn test_restamp_ignores_ids_in_source() {
        let source = r#"<html><body><p data-headless-id="9">a</p><p data-headless-id="9">b</p></body></html>"#;
        let (snapshot, _) = stamped(source);
        let paragraphs = snapshot.select("p", None).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_ne!(paragraphs[0], paragraphs[1]);
    }

    #[test]
    fn test_select_within_excludes_root_and_outside() {
        let (snapshot, _) = stamped(PAGE);
        let div = one(&snapshot, "#a");
        assert_eq!(
            snapshot.select("p, span", Some(div)).unwrap(),
            snapshot.select("p", None).unwrap()
        );
        assert!(snapshot.select("div", Some(div)).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        let (snapshot, _) = stamped(PAGE);
        assert!(matches!(
            snapshot.select("[[", None),
            Err(HeadlessPageError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_remove_keeps_other_ids() {
        let (snapshot, mut ids) = stamped(PAGE);
        let span = one(&snapshot, "#b");
        let source = snapshot.edit(one(&snapshot, "#a"), Edit::Remove, &mut ids).unwrap();

        let edited = Snapshot::parse(&source);
        assert!(edited.select("p", None).unwrap().is_empty());
        assert_eq!(one(&edited, "#b"), span);
        assert_eq!(edited.html().matches("x &amp; y").count(), 1);
    }

    #[test]
    fn test_replace_children_stamps_inserted_markup() {
        let (snapshot, mut ids) = stamped(PAGE);
        let div = one(&snapshot, "#a");
        let span = one(&snapshot, "#b");
        let before = snapshot.ids();
        let source = snapshot
            .edit(div, Edit::ReplaceChildren("<ul><li>a</li><li>b</li></ul>"), &mut ids)
            .unwrap();

        let edited = Snapshot::parse(&source);
        assert_eq!(one(&edited, "#a"), div);
        assert_eq!(one(&edited, "#b"), span);
        let inserted = edited.select("ul, li", None).unwrap();
        assert_eq!(inserted.len(), 3);
        assert!(inserted.iter().all(|id| !before.contains(id)));
        assert_eq!(
            edited.inner_html(div).unwrap(),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_inserted_markup_cannot_claim_existing_ids() {
        let (snapshot, mut ids) = stamped(PAGE);
        let div = one(&snapshot, "#a");
        let span = one(&snapshot, "#b");
        let copied = format!(r#"<i data-headless-id="{}">copy</i>"#, span.0);
        let source = snapshot
            .edit(div, Edit::ReplaceChildren(&copied), &mut ids)
            .unwrap();

        let edited = Snapshot::parse(&source);
        assert_eq!(one(&edited, "#b"), span);
        assert_ne!(one(&edited, "i"), span);
    }

    #[test]
    fn test_html_hides_ids() {
        let (snapshot, _) = stamped(PAGE);
        let html = snapshot.html();
        assert!(!html.contains(ID_ATTR));
        assert!(html.contains(r#"<div id="a"><p>one</p><p>two</p></div>"#));
    }
}
