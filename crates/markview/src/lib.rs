//! # markview
//!
//! Line-oriented Markdown to HTML conversion.
//!
//! The parser classifies a document line by line into block constructs,
//! runs a fixed sequence of inline extraction passes over text content,
//! and produces the [`Node`] tree defined in `markview-core`; [`render`]
//! turns that tree back into an HTML string. Both halves are pure and
//! total: no input makes them fail, and repeated calls share no state.
//!
//! ## Example
//!
//! ```rust
//! use markview::to_html;
//!
//! let html = to_html("# Hello\n\nThis is **bold** text.");
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1><p>This is <strong>bold</strong> text.</p>"
//! );
//! ```
//!
//! For callers that want to inspect or transform the tree between the
//! two halves, [`parse`] and [`render`] are exposed separately:
//!
//! ```rust
//! use markview::{parse, render, Node};
//!
//! let ast = parse("Paragraph 1\n\nParagraph 2");
//! assert!(matches!(&ast, Node::Root { children } if children.len() == 2));
//! assert_eq!(render(&ast), "<p>Paragraph 1</p><p>Paragraph 2</p>");
//! ```

mod block;
mod inline;

pub use block::parse;
pub use markview_core::{render, Node};

/// Convert a Markdown document straight to an HTML string.
pub fn to_html(markdown: &str) -> String {
    render(&parse(markdown))
}
