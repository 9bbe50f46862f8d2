// SPDX-License-Identifier: PMPL-1.0-or-later
//! Parsed HTML documents and element handles.
//!
//! A [`Document`] owns the parsed tree; an [`Element`] is a cheap, copyable
//! handle into it that remembers its owning document, mirroring the browser
//! DOM surface the matcher needs: `ownerDocument`, `contains` and
//! `querySelector`.

use crate::error::DomError;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// URL reported for documents parsed without one
pub const BLANK_URL: &str = "about:blank";

/// A parsed HTML document
pub struct Document {
    url: String,
    html: Html,
}

impl Document {
    /// Parse a full HTML document
    pub fn parse(content: &str) -> Self {
        Self::parse_with_url(BLANK_URL, content)
    }

    /// Parse a full HTML document served from `url`
    pub fn parse_with_url(url: impl Into<String>, content: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(content),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The root `<html>` element
    pub fn document_element(&self) -> Element<'_> {
        Element {
            document: self,
            node: self.html.root_element(),
        }
    }

    /// The `<body>` element, if the parser produced one
    pub fn body(&self) -> Option<Element<'_>> {
        self.query_selector("body").ok().flatten()
    }

    /// First element in document order matching `selector`.
    ///
    /// Returns `Ok(None)` when nothing matches and an error when the
    /// selector cannot be parsed.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element<'_>>, DomError> {
        let parsed = Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self
            .html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|node| parsed.matches(node))
            .map(|node| Element {
                document: self,
                node,
            }))
    }

    /// Look up an element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|node| node.value().id() == Some(id))
            .map(|node| Element {
                document: self,
                node,
            })
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").field("url", &self.url).finish_non_exhaustive()
    }
}

/// Handle to an element inside a [`Document`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    document: &'a Document,
    node: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// The document this element belongs to
    pub fn owner_document(&self) -> &'a Document {
        self.document
    }

    /// Lowercase tag name
    pub fn tag_name(&self) -> &'a str {
        self.node.value().name()
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.value().id()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.value().attr(name)
    }

    /// Serialized outer HTML
    pub fn outer_html(&self) -> String {
        self.node.html()
    }

    /// Whether `other` is this element or one of its descendants.
    ///
    /// Elements of different documents never contain each other.
    pub fn contains(&self, other: &Element<'_>) -> bool {
        if !std::ptr::eq(self.document, other.document) {
            return false;
        }

        let root = *self.node;
        other.node == self.node || other.node.ancestors().any(|ancestor| ancestor == root)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.node == other.node
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .field("id", &self.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
        <body>
            <div id="container"><p class="note">inside</p></div>
            <img id="sibling" src="a.png">
            <p class="note">outside</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_contains_self_and_descendants() {
        let document = Document::parse(PAGE);
        let body = document.body().expect("body");
        let container = document.get_element_by_id("container").expect("container");
        let note = document.query_selector("#container > p").unwrap().expect("note");

        assert!(container.contains(&container));
        assert!(container.contains(&note));
        assert!(body.contains(&note));
        assert!(!note.contains(&container));
    }

    #[test]
    fn test_sibling_not_contained() {
        let document = Document::parse(PAGE);
        let container = document.get_element_by_id("container").expect("container");
        let sibling = document.get_element_by_id("sibling").expect("sibling");
        assert!(!container.contains(&sibling));
    }

    #[test]
    fn test_elements_of_other_documents_not_contained() {
        let first = Document::parse(PAGE);
        let second = Document::parse(PAGE);
        let body = first.body().expect("body");
        let img = second.get_element_by_id("sibling").expect("img");
        assert!(!body.contains(&img));
    }

    #[test]
    fn test_query_selector_returns_first_in_document_order() {
        let document = Document::parse(PAGE);
        let note = document.query_selector(".note").unwrap().expect("note");
        assert_eq!(note.outer_html(), r#"<p class="note">inside</p>"#);
    }

    #[test]
    fn test_query_selector_no_match() {
        let document = Document::parse(PAGE);
        assert!(document.query_selector("table").unwrap().is_none());
    }

    #[test]
    fn test_query_selector_invalid() {
        let document = Document::parse(PAGE);
        let err = document.query_selector("[invalid>>>").unwrap_err();
        assert!(matches!(err, DomError::InvalidSelector { .. }));
    }

    #[test]
    fn test_document_element_is_html() {
        let document = Document::parse(PAGE);
        assert_eq!(document.document_element().tag_name(), "html");
        assert_eq!(document.url(), BLANK_URL);
    }

    #[test]
    fn test_owner_document_identity() {
        let document = Document::parse_with_url("https://example.test/", PAGE);
        let img = document.get_element_by_id("sibling").expect("img");
        assert!(std::ptr::eq(img.owner_document(), &document));
        assert_eq!(img.attr("src"), Some("a.png"));
    }
}
