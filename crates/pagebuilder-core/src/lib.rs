//! Converts CMS page-builder markup into a typed tree of content blocks.
//!
//! ```ignore
//! let nodes = pagebuilder_core::parse_page_builder(html).unwrap_or_default();
//! for node in &nodes {
//!     println!("{}", node.kind().as_str());
//! }
//! ```

pub mod config;
pub mod parse;
pub mod shortcode;
pub mod types;

pub use config::ParserOptions;
pub use parse::{parse_page_builder, NotApplicable, PageBuilderParser};
pub use types::{ContentKind, ContentNode};
