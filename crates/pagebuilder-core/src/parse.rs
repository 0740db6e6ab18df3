use thiserror::Error;

use crate::config::ParserOptions;
use crate::types::ContentNode;

mod background;
mod backend;
mod dispatch;
mod dom;
mod entities;
mod serialize;
mod style;
mod tree;


pub use backend::{Html5Backend, MarkupBackend, NoBackend};

/// Why a markup string produced no content tree. These are expected outcomes
/// for ordinary CMS pages, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotApplicable {
    #[error("markup is empty")]
    Empty,
    #[error("markup carries no page builder marker")]
    NoMarker,
    #[error("no markup parser available in this context")]
    NoBackend,
    #[error("markup contains no page builder blocks")]
    NoBlocks,
}

pub(crate) struct BuildContext<'a> {
    pub(crate) options: &'a ParserOptions,
}

impl BuildContext<'_> {
    pub(crate) fn marker(&self) -> &str {
        &self.options.marker_attribute
    }
}

pub struct PageBuilderParser<B = Html5Backend> {
    backend: B,
    options: ParserOptions,
}

impl Default for PageBuilderParser<Html5Backend> {
    fn default() -> Self {
        Self::new(Html5Backend, ParserOptions::default())
    }
}

impl<B: MarkupBackend> PageBuilderParser<B> {
    pub fn new(backend: B, options: ParserOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses page builder markup into its top-level content nodes, in
    /// document order.
    pub fn parse(&self, markup: &str) -> Result<Vec<ContentNode>, NotApplicable> {
        if markup.trim().is_empty() {
            return Err(NotApplicable::Empty);
        }
        if !markup.contains(self.options.marker_attribute.as_str()) {
            tracing::debug!("markup has no {} attribute", self.options.marker_attribute);
            return Err(NotApplicable::NoMarker);
        }
        let Some(root) = self.backend.parse_root(markup) else {
            tracing::debug!("markup backend unavailable; skipping page builder parse");
            return Err(NotApplicable::NoBackend);
        };
        let ctx = BuildContext {
            options: &self.options,
        };
        let nodes = tree::build_children(&root, &ctx, 1);
        if nodes.is_empty() {
            return Err(NotApplicable::NoBlocks);
        }
        tracing::debug!("parsed {} top-level page builder blocks", nodes.len());
        Ok(nodes)
    }
}

/// Parses with the html5ever backend and default options. `None` means the
/// markup is not page builder content.
pub fn parse_page_builder(markup: &str) -> Option<Vec<ContentNode>> {
    PageBuilderParser::<Html5Backend>::default()
        .parse(markup)
        .ok()
}
