//! Template tree produced by the tree builder.
//!
//! The tree is built in a single pass and handed out by value; there is no
//! mutation API. Every node carries byte spans into the concatenated chunks.

use crate::shared::{Quote, Span};

/// Root of a parsed template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Root {
    pub children: Vec<Node>,
}

/// Child node of the root or of an element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node {
    Element(Element),
    Text(Text),
    Expression(Expression),
}

/// Flat discriminant over node shapes, with components split out of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Component,
    Text,
    Expression,
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Element(element) => element.span(),
            Node::Text(text) => text.span,
            Node::Expression(expression) => expression.span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(element) => match element.kind {
                ElementKind::Element => NodeKind::Element,
                ElementKind::Component => NodeKind::Component,
            },
            Node::Text(_) => NodeKind::Text,
            Node::Expression(_) => NodeKind::Expression,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Expression(_) => &[],
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Node::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Naming-convention discriminant: a tag whose name starts with an uppercase
/// ASCII letter is a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Element,
    Component,
}

impl ElementKind {
    pub fn for_tag_name(name: &str) -> Self {
        if name.starts_with(|ch: char| ch.is_ascii_uppercase()) {
            ElementKind::Component
        } else {
            ElementKind::Element
        }
    }
}

/// Element or component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub kind: ElementKind,
    pub name: String,
    pub name_span: Span,
    /// Properties in source order.
    pub props: Vec<Property>,
    pub children: Vec<Node>,
    /// The `<` that opens the tag.
    pub open: Span,
    /// The `>` that ends the opening tag.
    pub close: Span,
    /// The `/` of a self-closing tag (`<x />`).
    pub self_closing: Option<Span>,
    /// The matching `</x>` from its `<` through its `>`.
    pub end_tag: Option<Span>,
}

impl Element {
    pub fn is_component(&self) -> bool {
        self.kind == ElementKind::Component
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing.is_some()
    }

    /// From the opening `<` through the end of the closing tag (or of the
    /// self-closing `/>`).
    pub fn span(&self) -> Span {
        let end = self.end_tag.unwrap_or(self.close);
        self.open.cover(end)
    }

    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.props.iter().find(|prop| prop.name() == Some(name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub value: String,
    pub span: Span,
}

/// Interpolation point in content position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    /// Zero-based index of the hole.
    pub hole: usize,
    pub span: Span,
}

/// One part of a mixed attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValuePart {
    Literal(String),
    Hole(usize),
}

/// Attribute on an element or component.
///
/// Value classification for quoted values: no parts is an empty `Static`, one
/// literal part is `Static`, one hole is `Expression`, anything longer is
/// `Mixed` with the parts kept in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Property {
    /// `name`
    Boolean { name: String, name_span: Span },
    /// `name="text"` or `name=""`
    Static {
        name: String,
        name_span: Span,
        value: String,
        quote: Quote,
        span: Span,
    },
    /// `name=${}` (unquoted, `quote` is `None`) or `name="${}"`
    Expression {
        name: String,
        name_span: Span,
        hole: usize,
        quote: Option<Quote>,
        span: Span,
    },
    /// `name="text ${} more ${}"`
    Mixed {
        name: String,
        name_span: Span,
        parts: Vec<ValuePart>,
        quote: Quote,
        span: Span,
    },
    /// `...${}`
    Spread { hole: usize, span: Span },
}

impl Property {
    /// Attribute name; spreads have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Property::Boolean { name, .. }
            | Property::Static { name, .. }
            | Property::Expression { name, .. }
            | Property::Mixed { name, .. } => Some(name),
            Property::Spread { .. } => None,
        }
    }

    /// Whole source extent of the property, from its name (or `...`) through
    /// the end of its value.
    pub fn span(&self) -> Span {
        match self {
            Property::Boolean { name_span, .. } => *name_span,
            Property::Static { span, .. }
            | Property::Expression { span, .. }
            | Property::Mixed { span, .. }
            | Property::Spread { span, .. } => *span,
        }
    }
}
