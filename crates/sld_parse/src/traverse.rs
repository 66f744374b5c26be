//! Read-only traversal helpers over a built tree.

use crate::ast::{Element, Node, Root};

/// Visit every node in pre-order with its depth (root children are depth 0).
///
/// Uses an explicit stack, so deeply nested templates cannot overflow.
pub fn walk<'a>(root: &'a Root, mut visit: impl FnMut(&'a Node, usize)) {
    let mut stack: Vec<(&'a Node, usize)> = root.children.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        visit(node, depth);
        stack.extend(node.children().iter().rev().map(|c| (c, depth + 1)));
    }
}

/// Innermost node whose span contains `offset`.
///
/// An offset inside an element's opening or closing tag resolves to that
/// element rather than to any of its children.
pub fn node_at_offset(root: &Root, offset: usize) -> Option<&Node> {
    let mut found = None;
    let mut siblings = root.children.as_slice();
    'descend: loop {
        for node in siblings {
            if !node.span().contains(offset) {
                continue;
            }
            found = Some(node);
            match node {
                Node::Element(element) if !in_tag(element, offset) => {
                    siblings = &element.children;
                    continue 'descend;
                }
                _ => return found,
            }
        }
        return found;
    }
}

fn in_tag(element: &Element, offset: usize) -> bool {
    element.open.cover(element.close).contains(offset)
        || element.end_tag.is_some_and(|end| end.contains(offset))
}
