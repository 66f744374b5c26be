//! Stack of open containers.

use crate::ast::{Element, Node, Root};
use crate::shared::{Span, TagSet, TreeBuilderError};

/// Open containers, seeded with the root.
///
/// Elements are attached to their parent when they are popped. Nothing is
/// appended to a parent while one of its children is open, so source order is
/// preserved.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenElementsStack {
    root: Vec<Node>,
    items: Vec<Element>,
}

impl OpenElementsStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of open containers including the root.
    pub(crate) fn depth(&self) -> usize {
        self.items.len() + 1
    }

    /// Name of the innermost open element, `None` at the root.
    pub(crate) fn current_name(&self) -> Option<&str> {
        self.items.last().map(|element| element.name.as_str())
    }

    /// Append a child to the innermost open container.
    pub(crate) fn append(&mut self, node: Node) {
        match self.items.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root.push(node),
        }
    }

    pub(crate) fn push(&mut self, element: Element) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "sld.tree_builder", "push <{}> depth={}", element.name, self.depth() + 1);
        self.items.push(element);
    }

    /// Close the innermost element with its end tag and attach it to its
    /// parent. Void elements lose whatever children they accumulated.
    pub(crate) fn pop(&mut self, end_tag: Span, void_elements: &TagSet) -> bool {
        let Some(mut element) = self.items.pop() else {
            return false;
        };
        if void_elements.contains(&element.name) && !element.children.is_empty() {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(
                target: "sld.tree_builder",
                "void <{}> discards {} children",
                element.name,
                element.children.len()
            );
            element.children.clear();
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "sld.tree_builder", "pop <{}> depth={}", element.name, self.depth());
        element.end_tag = Some(end_tag);
        self.append(Node::Element(element));
        true
    }

    /// Hand out the root once every element has been closed.
    pub(crate) fn finish(self) -> Result<Root, TreeBuilderError> {
        if let Some(open) = self.items.last() {
            return Err(TreeBuilderError::UnclosedTag {
                name: open.name.clone(),
                offset: open.open.start,
            });
        }
        Ok(Root {
            children: self.root,
        })
    }
}
