use html5ever::{LocalName, Namespace, QualName};
use kuchiki::{traits::*, NodeRef};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Capability to turn a markup string into a traversable element tree.
///
/// Injected into [`super::PageBuilderParser`] so the same parser runs in
/// contexts with and without an HTML parser available.
pub trait MarkupBackend {
    /// Parses `markup` and returns the synthetic root whose children are the
    /// top-level elements of the input, or `None` when parsing is unavailable.
    fn parse_root(&self, markup: &str) -> Option<NodeRef>;
}

/// html5ever-backed parsing through kuchiki.
///
/// The input is parsed as the contents of a `div`, the way a browser assigns
/// `innerHTML`, so head-only elements such as `<title>` stay in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Backend;

impl MarkupBackend for Html5Backend {
    fn parse_root(&self, markup: &str) -> Option<NodeRef> {
        let context = QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from("div"),
        );
        let document = kuchiki::parse_fragment(context, Vec::new()).one(markup.to_string());
        // Fragment parsing collects the nodes under a synthetic `<html>` element.
        let root = document
            .first_child()
            .filter(|child| child.as_element().is_some())
            .unwrap_or(document);
        Some(root)
    }
}

/// Stands in for an execution context with no markup parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackend;

impl MarkupBackend for NoBackend {
    fn parse_root(&self, _markup: &str) -> Option<NodeRef> {
        None
    }
}

impl<B: MarkupBackend + ?Sized> MarkupBackend for &B {
    fn parse_root(&self, markup: &str) -> Option<NodeRef> {
        (**self).parse_root(markup)
    }
}
