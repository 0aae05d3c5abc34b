//! HTML rendering
//!
//! Converts an AST into an HTML string. Rendering is pure and total:
//! every node kind maps to a fragment template, children are rendered
//! recursively and concatenated in order, and nothing is escaped (the
//! text leaves carry their raw source characters into the output).

use std::fmt::Write;

use crate::ast::Node;

/// Render a node (usually the root) to an HTML string
pub fn render(node: &Node) -> String {
    let mut out = String::with_capacity(4096);
    render_into(node, &mut out);
    out
}

fn render_into(node: &Node, out: &mut String) {
    match node {
        // The root has no wrapper of its own
        Node::Root { children } => render_children(children, out),

        Node::Heading { level, children } => {
            let _ = write!(out, "<h{level}>");
            render_children(children, out);
            let _ = write!(out, "</h{level}>");
        }

        Node::Paragraph { children } => wrap("p", children, out),
        Node::PreformattedText { children } => wrap("pre", children, out),

        Node::Table { children } => wrap("table", children, out),
        Node::TableRow { children } => wrap("tr", children, out),
        Node::TableCell { children } => wrap("td", children, out),

        Node::Text { value } => out.push_str(value),

        Node::Bold { children } => wrap("strong", children, out),
        Node::Italic { children } => wrap("em", children, out),
        Node::Strikethrough { children } => wrap("del", children, out),
        Node::InlineCode { children } => wrap("code", children, out),

        Node::Link { url, children } => {
            let _ = write!(out, "<a href=\"{url}\">");
            render_children(children, out);
            out.push_str("</a>");
        }

        Node::Image { url, alt } => {
            let _ = write!(out, "<img src=\"{url}\" alt=\"{alt}\" />");
        }

        Node::Blockquote { children } => wrap("blockquote", children, out),

        // Lists emit exactly one <li> around all children; the parser
        // produces one list node per marker line, so there is no
        // per-item splitting to do here.
        Node::UnorderedList { children } => {
            out.push_str("<ul><li>");
            render_children(children, out);
            out.push_str("</li></ul>");
        }

        Node::OrderedList { order, children } => {
            let _ = write!(out, "<ol start=\"{order}\"><li>");
            render_children(children, out);
            out.push_str("</li></ol>");
        }

        Node::HorizontalRule => out.push_str("<hr />"),
    }
}

fn render_children(children: &[Node], out: &mut String) {
    for child in children {
        render_into(child, out);
    }
}

fn wrap(tag: &str, children: &[Node], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_children(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
