use kuchiki::NodeRef;

use super::style::Declarations;

pub(crate) fn tag_name(node: &NodeRef) -> Option<String> {
    node.as_element().map(|el| el.name.local.to_lowercase())
}

pub(crate) fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let el = node.as_element()?;
    let attrs = el.attributes.borrow();
    attrs.get(name).map(|s| s.to_string())
}

pub(crate) fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .map(|el| el.attributes.borrow().contains(name))
        .unwrap_or(false)
}

/// Non-empty, trimmed attribute value.
pub(crate) fn attr_value(node: &NodeRef, name: &str) -> Option<String> {
    attr(node, name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(crate) fn style(node: &NodeRef) -> Declarations {
    attr(node, "style")
        .map(|s| Declarations::parse(&s))
        .unwrap_or_default()
}

pub(crate) fn text(node: &NodeRef) -> Option<String> {
    let text = node.text_contents();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// First descendant matching `pred`, in document order, that belongs to the
/// same block: the walk does not enter elements carrying `marker`.
pub(crate) fn find_in_block<P>(node: &NodeRef, marker: &str, pred: P) -> Option<NodeRef>
where
    P: Fn(&NodeRef) -> bool,
{
    let mut stack: Vec<NodeRef> = node.children().rev().collect();
    while let Some(current) = stack.pop() {
        if current.as_element().is_none() || has_attr(&current, marker) {
            continue;
        }
        if pred(&current) {
            return Some(current);
        }
        stack.extend(current.children().rev());
    }
    None
}

pub(crate) fn find_element(node: &NodeRef, marker: &str, role: &str) -> Option<NodeRef> {
    find_in_block(node, marker, |n| {
        attr(n, "data-element").as_deref() == Some(role)
    })
}

pub(crate) fn find_tag(node: &NodeRef, marker: &str, tag: &str) -> Option<NodeRef> {
    find_in_block(node, marker, |n| tag_name(n).as_deref() == Some(tag))
}

/// Link target of an anchor plus whether it opens in a new tab.
pub(crate) fn link_target(link: &NodeRef) -> (Option<String>, bool) {
    let href = attr_value(link, "href");
    let new_tab = attr(link, "target")
        .map(|t| t.trim().eq_ignore_ascii_case("_blank"))
        .unwrap_or(false);
    (href, new_tab)
}

pub(crate) fn is_heading(node: &NodeRef) -> bool {
    matches!(
        tag_name(node).as_deref(),
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    )
}

/// `"false"` is the only value that disables a flag that defaults to on.
pub(crate) fn flag_default_on(node: &NodeRef, name: &str) -> bool {
    attr(node, name)
        .map(|v| v.trim() != "false")
        .unwrap_or(true)
}

pub(crate) fn flag(node: &NodeRef, name: &str) -> bool {
    attr(node, name)
        .map(|v| matches!(v.trim(), "true" | "1"))
        .unwrap_or(false)
}

pub(crate) fn number<T: std::str::FromStr>(node: &NodeRef, name: &str) -> Option<T> {
    attr(node, name)?.trim().parse::<T>().ok()
}

/// Comma-separated list with blanks dropped.
pub(crate) fn list(node: &NodeRef, name: &str) -> Vec<String> {
    attr(node, name)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
