//! markview-core - Markdown AST and HTML rendering
//!
//! This crate provides the core data structures and HTML rendering for
//! markview. The parser in the `markview` crate produces the [`Node`]
//! tree; [`render`] walks it back out as an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──parse──▶ ┌──────────────┐
//!                            │ Markdown AST │ ──render──▶ HTML String
//!                            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use markview_core::{render, Node};
//!
//! let ast = Node::Root {
//!     children: vec![
//!         Node::Heading {
//!             level: 1,
//!             children: vec![Node::text("Hello World")],
//!         },
//!         Node::Paragraph {
//!             children: vec![
//!                 Node::text("This is "),
//!                 Node::Bold {
//!                     children: vec![Node::text("bold")],
//!                 },
//!                 Node::text(" text."),
//!             ],
//!         },
//!     ],
//! };
//!
//! let html = render(&ast);
//! assert_eq!(
//!     html,
//!     "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>"
//! );
//! ```

mod ast;
mod render;

pub use ast::Node;
pub use render::render;
