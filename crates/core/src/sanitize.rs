// ABOUTME: Attribute-stripping HTML sanitizer that preserves tag structure and text.
// ABOUTME: Serializes the body subtree with every element attribute removed.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// One unit of serialization work. Closing tags are pushed as explicit
/// steps so the walk needs no recursion and deep nesting is bounded by
/// the heap rather than the call stack.
enum Step<'a> {
    Visit(NodeRef<'a, Node>),
    Close(&'a str),
}

/// Strips every attribute from every element in `markup` while keeping
/// tag names, nesting, and text content intact, then returns the inner
/// markup of the first `<body>` element.
///
/// Returns an empty string when the parsed tree contains no body node.
/// Malformed-markup recovery is entirely the parser's policy; comments
/// and script/style text pass through unmodified.
pub fn sanitize_keeping_structure(markup: &str) -> String {
    let doc = Html::parse_document(markup);

    let Some(body) = find_body(&doc) else {
        return String::new();
    };

    let mut out = String::new();
    for child in body.children() {
        serialize_stripped(child, &mut out);
    }
    out
}

/// First element named "body" in document order, if any.
fn find_body(doc: &Html) -> Option<NodeRef<'_, Node>> {
    doc.tree.root().descendants().find(|node| {
        matches!(node.value(), Node::Element(el) if el.name().eq_ignore_ascii_case("body"))
    })
}

/// Serializes the subtree at `root`, emitting elements with tag name only.
fn serialize_stripped(root: NodeRef<'_, Node>, out: &mut String) {
    let mut stack = vec![Step::Visit(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(node) => match node.value() {
                Node::Text(text) => out.push_str(&**text),
                Node::Element(el) => {
                    let name = el.name();
                    out.push('<');
                    out.push_str(name);

                    if is_void_element(name) {
                        out.push_str(" />");
                        continue;
                    }

                    out.push('>');
                    stack.push(Step::Close(name));

                    // Children go on the stack back-to-front so they pop
                    // in document order.
                    let mut child = node.last_child();
                    while let Some(c) = child {
                        child = c.prev_sibling();
                        stack.push(Step::Visit(c));
                    }
                }
                Node::Comment(comment) => {
                    out.push_str("<!--");
                    out.push_str(&**comment);
                    out.push_str("-->");
                }
                _ => {}
            },
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

/// Check if tag is a void element (serialized self-closed, no children).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
