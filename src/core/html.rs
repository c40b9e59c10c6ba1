// src/core/html.rs
//! Lenient document tree.
//!
//! Thin wrapper over `scraper::Html` (html5ever tree construction). Malformed
//! markup never fails to parse; html5ever recovers per the HTML standard and
//! records what it recovered from in `Html::errors`.
//!
//! Non-empty input always gains the implied `<html>`, `<head>` and `<body>`
//! elements. Empty input, or input made only of HTML whitespace (ASCII tab,
//! LF, FF, CR, space), is the one exception: it yields a bare document node
//! with no children.

use scraper::{ElementRef, Html, Selector};

use super::error::{Result, ScrapeError};
use super::sanitize::{is_html_blank, normalize_ws};

#[derive(Debug)]
pub struct Document {
    html: Html,
}

/// Counts reported by `fbref_scrape --summary`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSummary {
    pub title: Option<String>,
    pub root_elements: Vec<String>,
    pub elements: usize,
    pub tables: usize,
    pub recoveries: usize,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let html = if is_html_blank(text) {
            Html::new_document()
        } else {
            Html::parse_document(text)
        };
        Self { html }
    }

    /// The underlying scraper tree, or `None` for an empty document.
    ///
    /// An empty document has no `<html>` element, and `Html::root_element`
    /// panics on such a tree, so it is not handed out.
    pub fn html(&self) -> Option<&Html> {
        (!self.is_empty()).then_some(&self.html)
    }

    /// True when the document node has no children at all.
    pub fn is_empty(&self) -> bool {
        !self.html.tree.root().has_children()
    }

    /// Element children of the document node (doctype and comments skipped).
    pub fn root_elements(&self) -> Vec<ElementRef<'_>> {
        self.html
            .tree
            .root()
            .children()
            .filter_map(ElementRef::wrap)
            .collect()
    }

    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = Selector::parse(css)
            .map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))?;
        Ok(self.html.select(&selector).collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.html
            .tree
            .nodes()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
    }

    pub fn element_count(&self) -> usize {
        self.html
            .tree
            .nodes()
            .filter(|n| n.value().is_element())
            .count()
    }

    /// Number of parse errors html5ever recovered from.
    pub fn recoveries(&self) -> usize {
        self.html.errors.len()
    }

    pub fn title(&self) -> Option<String> {
        self.html
            .tree
            .nodes()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "title")
            .map(|el| normalize_ws(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
    }

    pub fn summary(&self) -> DocumentSummary {
        let tables = self
            .html
            .tree
            .nodes()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "table")
            .count();

        DocumentSummary {
            title: self.title(),
            root_elements: self
                .root_elements()
                .iter()
                .map(|el| el.value().name().to_string())
                .collect(),
            elements: self.element_count(),
            tables,
            recoveries: self.recoveries(),
        }
    }
}
