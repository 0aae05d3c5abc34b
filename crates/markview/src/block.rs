//! Block parser
//!
//! Classifies the document line by line into block constructs and
//! delegates text content to the inline scanner. Parsing is total:
//! malformed input degrades to paragraph text, and every call returns a
//! well-formed root node.

use markview_core::Node;

use crate::inline::scan_line;

/// Indices of the blocks still accepting content, pointing into the
/// root children. Blocks are pushed when opened and filled in place, so
/// the order of root children is the order blocks were opened in.
#[derive(Default)]
struct OpenBlocks {
    paragraph: Option<usize>,
    table: Option<usize>,
}

/// Parse a Markdown document into its AST.
///
/// Never fails; empty input yields a root with no children.
pub fn parse(markdown: &str) -> Node {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut children: Vec<Node> = Vec::new();
    let mut open = OpenBlocks::default();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if line.starts_with('#') {
            let level = line.bytes().take_while(|&b| b == b'#').count();
            let rest = &line[level..];
            let text = rest.strip_prefix(' ').unwrap_or(rest);
            children.push(Node::Heading {
                level,
                children: scan_line(text),
            });
            open = OpenBlocks::default();
        } else if line.starts_with("```") {
            let mut literal = String::new();
            let mut end = i + 1;
            while end < lines.len() && !lines[end].starts_with("```") {
                literal.push_str(lines[end]);
                literal.push('\n');
                end += 1;
            }
            children.push(Node::PreformattedText {
                children: vec![Node::text(literal)],
            });
            open = OpenBlocks::default();
            // Jump past the consumed span and the closing fence so
            // neither is classified a second time
            i = end + 1;
            continue;
        } else if line.starts_with('|') {
            let table = match open.table {
                Some(index) => index,
                None => {
                    children.push(Node::Table {
                        children: Vec::new(),
                    });
                    open.table = Some(children.len() - 1);
                    children.len() - 1
                }
            };
            // Splitting on '|' leaves empty fragments before the leading
            // and after the trailing pipe; those are not cells
            let segments: Vec<&str> = line.split('|').collect();
            let mut cells = Vec::new();
            for segment in &segments[1..segments.len() - 1] {
                cells.push(Node::TableCell {
                    children: scan_line(segment.trim()),
                });
            }
            if let Node::Table { children: rows } = &mut children[table] {
                rows.push(Node::TableRow { children: cells });
            }
        } else if !line.trim().is_empty() {
            let paragraph = match open.paragraph {
                Some(index) => index,
                None => {
                    children.push(Node::Paragraph {
                        children: Vec::new(),
                    });
                    open.paragraph = Some(children.len() - 1);
                    children.len() - 1
                }
            };
            let inline = scan_line(line);
            if let Node::Paragraph { children: content } = &mut children[paragraph] {
                content.extend(inline);
            }
        } else {
            // A blank line closes the paragraph but leaves any open
            // table accepting further rows
            open.paragraph = None;
        }

        i += 1;
    }

    Node::Root { children }
}
