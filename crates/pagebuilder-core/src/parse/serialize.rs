//! HTML serialisation for the markup fields of content nodes.
//!
//! Output matches html5ever's serializer. The walk keeps its own stack, so a
//! subtree of any nesting depth serialises without native recursion.

use kuchiki::{NodeData, NodeRef};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

const VOID_ELEMENTS: [&str; 18] = [
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

// Text inside these is written verbatim. `noscript` assumes scripting enabled.
const RAW_TEXT_ELEMENTS: [&str; 8] = [
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

enum Step {
    Open(NodeRef),
    Close(String),
}

pub(crate) fn outer_html(node: &NodeRef) -> String {
    let mut out = String::new();
    write_nodes(&mut out, vec![node.clone()]);
    out
}

pub(crate) fn inner_html(node: &NodeRef) -> String {
    let mut out = String::new();
    let contents = node
        .as_element()
        .and_then(|el| el.template_contents.clone())
        .unwrap_or_else(|| node.clone());
    write_nodes(&mut out, contents.children().collect());
    out
}

fn write_nodes(out: &mut String, nodes: Vec<NodeRef>) {
    let mut stack: Vec<Step> = nodes.into_iter().rev().map(Step::Open).collect();
    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Open(node) => node,
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
                continue;
            }
        };
        match node.data() {
            NodeData::Element(el) => {
                let name = el.name.local.to_string();
                out.push('<');
                out.push_str(&name);
                for (key, attribute) in el.attributes.borrow().map.iter() {
                    out.push(' ');
                    if let Some(prefix) = &attribute.prefix {
                        out.push_str(prefix);
                        out.push(':');
                    }
                    out.push_str(&key.local);
                    out.push_str("=\"");
                    escape_into(out, &attribute.value, true);
                    out.push('"');
                }
                out.push('>');
                if &*el.name.ns == HTML_NAMESPACE && VOID_ELEMENTS.contains(&name.as_str()) {
                    continue;
                }
                stack.push(Step::Close(name));
                let contents = el.template_contents.as_ref().unwrap_or(&node);
                stack.extend(contents.children().rev().map(Step::Open));
            }
            NodeData::Text(text) => {
                let text = text.borrow();
                if in_raw_text_element(&node) {
                    out.push_str(&text);
                } else {
                    escape_into(out, &text, false);
                }
            }
            NodeData::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(&comment.borrow());
                out.push_str("-->");
            }
            NodeData::ProcessingInstruction(instruction) => {
                let instruction = instruction.borrow();
                out.push_str("<?");
                out.push_str(&instruction.0);
                out.push(' ');
                out.push_str(&instruction.1);
                out.push('>');
            }
            NodeData::Doctype(doctype) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(&doctype.name);
                out.push('>');
            }
            NodeData::Document(_) | NodeData::DocumentFragment => {
                stack.extend(node.children().rev().map(Step::Open));
            }
        }
    }
}

fn in_raw_text_element(node: &NodeRef) -> bool {
    node.parent()
        .and_then(|parent| {
            parent.as_element().map(|el| {
                &*el.name.ns == HTML_NAMESPACE && RAW_TEXT_ELEMENTS.contains(&&*el.name.local)
            })
        })
        .unwrap_or(false)
}

fn escape_into(out: &mut String, text: &str, attr_mode: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use kuchiki::traits::*;

    use super::*;

    fn body(html: &str) -> NodeRef {
        let document = kuchiki::parse_html().one(html);
        document.select_first("body").unwrap().as_node().clone()
    }

    #[test]
    fn matches_kuchiki_output() {
        let node = body(
            r#"<div class="a" title='say "hi"'>x &amp; y<br><img src="/i.png"><!-- note --><p>a&nbsp;b &lt;c&gt;</p></div>"#,
        );
        let div = node.first_child().unwrap();
        assert_eq!(outer_html(&div), div.to_string());
        assert_eq!(
            inner_html(&node),
            node.children().map(|c| c.to_string()).collect::<String>()
        );
    }

    #[test]
    fn raw_text_is_not_escaped() {
        let node = body("<div><style>a > b { color: red }</style><p>a > b</p></div>");
        let html = inner_html(&node.first_child().unwrap());
        assert_eq!(html, "<style>a > b { color: red }</style><p>a &gt; b</p>");
    }

    #[test]
    fn void_elements_have_no_end_tag() {
        let node = body(r#"<hr data-element="line"><input value="1">"#);
        assert_eq!(inner_html(&node), r#"<hr data-element="line"><input value="1">"#);
    }

    #[test]
    fn serialises_very_deep_subtrees() {
        let depth = 20_000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let node = body(&html);
        let out = inner_html(&node);
        assert_eq!(out.matches("<div>").count(), depth);
        assert_eq!(out.matches("</div>").count(), depth);
        assert!(out.contains("<div>x</div>"));
    }
}
