//! Inline scanner
//!
//! Extracts inline constructs from a single line of text as a fixed
//! sequence of passes, one per construct, each scanning whatever suffix
//! of the line the previous passes left unconsumed. The pass order is
//! part of the observable behavior: an earlier pass claims its matches
//! outright, so constructs never nest (`**a *b* c**` is one bold span,
//! and the italic pass only ever sees text outside it).

use markview_core::Node;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s*(.*)").unwrap());
static UNORDERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s*(.*)").unwrap());
// [0-9] rather than \d keeps the order number ASCII-only
static ORDERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s*(.*)").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-{3,}|_{3,}|\*{3,})").unwrap());

/// Scan one line of paragraph, heading, or table-cell text into an
/// ordered sequence of inline nodes.
pub(crate) fn scan_line(line: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut rest = line;

    rest = span_pass(&mut nodes, rest, &BOLD, |caps| Node::Bold {
        children: vec![Node::text(&caps[1])],
    });
    rest = span_pass(&mut nodes, rest, &ITALIC, |caps| Node::Italic {
        children: vec![Node::text(&caps[1])],
    });
    rest = span_pass(&mut nodes, rest, &STRIKETHROUGH, |caps| {
        Node::Strikethrough {
            children: vec![Node::text(&caps[1])],
        }
    });
    rest = span_pass(&mut nodes, rest, &LINK, |caps| Node::Link {
        url: caps[2].to_string(),
        children: vec![Node::text(&caps[1])],
    });
    rest = span_pass(&mut nodes, rest, &IMAGE, |caps| Node::Image {
        url: caps[2].to_string(),
        alt: caps[1].to_string(),
    });
    rest = span_pass(&mut nodes, rest, &INLINE_CODE, |caps| Node::InlineCode {
        children: vec![Node::text(&caps[1])],
    });

    // The marker constructs are tested once against the start of the
    // remaining suffix; a match consumes the rest of the line.
    if let Some(caps) = BLOCKQUOTE.captures(rest) {
        nodes.push(Node::Blockquote {
            children: vec![Node::text(&caps[1])],
        });
        rest = "";
    } else if let Some(caps) = UNORDERED_LIST.captures(rest) {
        nodes.push(Node::UnorderedList {
            children: vec![Node::text(&caps[1])],
        });
        rest = "";
    } else if let Some(caps) = ORDERED_LIST.captures(rest) {
        nodes.push(Node::OrderedList {
            order: caps[1].parse().unwrap_or(u32::MAX),
            children: vec![Node::text(&caps[2])],
        });
        rest = "";
    } else if HORIZONTAL_RULE.is_match(rest) {
        nodes.push(Node::HorizontalRule);
        rest = "";
    }

    if !rest.is_empty() {
        nodes.push(Node::text(rest));
    }

    nodes
}

/// Run one repeated extraction pass: take every non-overlapping match
/// left to right, flushing the plain-text prefix before each match and
/// advancing the cursor past it. Returns the unconsumed suffix for the
/// next pass.
fn span_pass<'a, F>(nodes: &mut Vec<Node>, mut rest: &'a str, pattern: &Regex, build: F) -> &'a str
where
    F: Fn(&Captures) -> Node,
{
    while let Some(caps) = pattern.captures(rest) {
        let Some(matched) = caps.get(0) else { break };
        if matched.start() > 0 {
            nodes.push(Node::text(&rest[..matched.start()]));
        }
        nodes.push(build(&caps));
        rest = &rest[matched.end()..];
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Node {
        Node::text(value)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(scan_line("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(scan_line(""), Vec::<Node>::new());
    }

    #[test]
    fn test_bold_with_prefix_and_suffix() {
        assert_eq!(
            scan_line("a **b** c"),
            vec![
                text("a "),
                Node::Bold {
                    children: vec![text("b")]
                },
                text(" c"),
            ]
        );
    }

    #[test]
    fn test_repeated_pass_takes_all_matches() {
        assert_eq!(
            scan_line("**a** and **b**"),
            vec![
                Node::Bold {
                    children: vec![text("a")]
                },
                text(" and "),
                Node::Bold {
                    children: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn test_bold_swallows_inner_italic() {
        assert_eq!(
            scan_line("**a *b* c**"),
            vec![Node::Bold {
                children: vec![text("a *b* c")]
            }]
        );
    }

    #[test]
    fn test_italic_before_bold_ends_up_in_flushed_text() {
        // The bold pass runs first and flushes everything before its
        // match as plain text; the italic pass never sees that prefix.
        assert_eq!(
            scan_line("*i* then **b**"),
            vec![
                text("*i* then "),
                Node::Bold {
                    children: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn test_italic_alone() {
        assert_eq!(
            scan_line("*i* only"),
            vec![
                Node::Italic {
                    children: vec![text("i")]
                },
                text(" only"),
            ]
        );
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(
            scan_line("~~gone~~"),
            vec![Node::Strikethrough {
                children: vec![text("gone")]
            }]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            scan_line("see [a](http://x) now"),
            vec![
                text("see "),
                Node::Link {
                    url: "http://x".to_string(),
                    children: vec![text("a")],
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_image_syntax_is_claimed_by_the_link_pass() {
        // The link pass runs before the image pass and matches the
        // bracket-paren part of `![alt](url)`, leaving a literal `!`.
        assert_eq!(
            scan_line("![alt](img.png)"),
            vec![
                text("!"),
                Node::Link {
                    url: "img.png".to_string(),
                    children: vec![text("alt")],
                },
            ]
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            scan_line("run `cmd` now"),
            vec![
                text("run "),
                Node::InlineCode {
                    children: vec![text("cmd")]
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_backticks_inside_bold_stay_literal() {
        assert_eq!(
            scan_line("**`x`**"),
            vec![Node::Bold {
                children: vec![text("`x`")]
            }]
        );
    }

    #[test]
    fn test_blockquote_consumes_rest_of_line() {
        assert_eq!(
            scan_line(">   quoted text"),
            vec![Node::Blockquote {
                children: vec![text("quoted text")]
            }]
        );
    }

    #[test]
    fn test_blockquote_marker_mid_line_is_plain_text() {
        assert_eq!(scan_line("x > y"), vec![text("x > y")]);
    }

    #[test]
    fn test_unordered_list_markers() {
        for line in ["- item", "* item", "+ item"] {
            assert_eq!(
                scan_line(line),
                vec![Node::UnorderedList {
                    children: vec![text("item")]
                }],
                "marker line: {line}"
            );
        }
    }

    #[test]
    fn test_ordered_list_keeps_literal_number() {
        assert_eq!(
            scan_line("3. things"),
            vec![Node::OrderedList {
                order: 3,
                children: vec![text("things")],
            }]
        );
    }

    #[test]
    fn test_ordered_list_number_saturates() {
        assert_eq!(
            scan_line("99999999999. big"),
            vec![Node::OrderedList {
                order: u32::MAX,
                children: vec![text("big")],
            }]
        );
    }

    #[test]
    fn test_dashes_are_taken_by_the_list_pass_not_the_rule_pass() {
        // `^[-*+]` wins against `^-{3,}` because the list pass runs
        // first, so a dash rule line becomes a one-item list.
        assert_eq!(
            scan_line("---"),
            vec![Node::UnorderedList {
                children: vec![text("--")]
            }]
        );
    }

    #[test]
    fn test_horizontal_rule_via_underscores() {
        assert_eq!(scan_line("___"), vec![Node::HorizontalRule]);
        assert_eq!(scan_line("_____"), vec![Node::HorizontalRule]);
    }

    #[test]
    fn test_unclosed_double_asterisk_becomes_empty_italic() {
        // The bold pass needs a closing `**`, but the italic pass then
        // reads the leading pair as an empty emphasis span.
        assert_eq!(
            scan_line("**unclosed"),
            vec![
                Node::Italic {
                    children: vec![text("")]
                },
                text("unclosed"),
            ]
        );
    }

    #[test]
    fn test_unclosed_link_stays_text() {
        assert_eq!(scan_line("[label](nope"), vec![text("[label](nope")]);
    }
}
