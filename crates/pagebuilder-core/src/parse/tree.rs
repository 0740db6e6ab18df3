use kuchiki::{iter::Siblings, NodeRef};

use crate::types::ContentNode;

use super::dispatch::dispatch;
use super::dom::has_attr;
use super::BuildContext;

/// Collects the content nodes directly below `node`.
///
/// Marked children are dispatched. Unmarked element children are transparent:
/// their marked descendants are spliced in at this level, in document order.
/// The descent through wrappers keeps its own stack, so arbitrarily deep
/// scaffolding costs heap, not native stack.
pub(crate) fn build_children(
    node: &NodeRef,
    ctx: &BuildContext<'_>,
    depth: usize,
) -> Vec<ContentNode> {
    let marker = ctx.marker();
    let mut out = Vec::new();
    let mut stack: Vec<Siblings> = vec![node.children()];
    loop {
        let next = match stack.last_mut() {
            Some(siblings) => siblings.next(),
            None => break,
        };
        let Some(child) = next else {
            stack.pop();
            continue;
        };
        if child.as_element().is_none() {
            continue;
        }
        if has_attr(&child, marker) {
            out.push(dispatch(&child, ctx, depth));
        } else {
            stack.push(child.children());
        }
    }
    out
}
