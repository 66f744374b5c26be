//! Deterministic tree formatting for golden tests.
//!
//! One line per node or property, indented two spaces per level. Properties
//! are listed under their element before its children.

use crate::ast::{Element, Node, Property, Root, ValuePart};
use crate::fmt::escape_text;
use crate::shared::{Quote, Span};
use crate::traverse::walk;

pub fn format_tree(root: &Root) -> Vec<String> {
    let mut out = vec!["#root".to_string()];
    walk(root, |node, depth| {
        let indent = "  ".repeat(depth + 1);
        match node {
            Node::Element(element) => {
                out.push(format!("{indent}{}", element_line(element)));
                for prop in &element.props {
                    out.push(format!("{indent}  {}", prop_line(prop)));
                }
            }
            Node::Text(text) => out.push(format!(
                "{indent}TEXT \"{}\" {}",
                escape_text(&text.value),
                span(text.span)
            )),
            Node::Expression(expr) => {
                out.push(format!("{indent}EXPR #{} {}", expr.hole, span(expr.span)))
            }
        }
    });
    out
}

fn element_line(element: &Element) -> String {
    let head = if element.is_component() {
        "COMPONENT"
    } else {
        "ELEMENT"
    };
    let suffix = if element.is_self_closing() {
        " self_closing"
    } else {
        ""
    };
    format!("{head} {} {}{suffix}", element.name, span(element.span()))
}

fn prop_line(prop: &Property) -> String {
    match prop {
        Property::Boolean { name, name_span } => format!("PROP boolean {name} {}", span(*name_span)),
        Property::Static {
            name,
            value,
            quote,
            span: s,
            ..
        } => format!(
            "PROP static {name}={q}{}{q} {}",
            escape_text(value),
            span(*s),
            q = quote_str(*quote)
        ),
        Property::Expression {
            name,
            hole,
            quote,
            span: s,
            ..
        } => {
            let q = quote.map_or("", quote_str);
            format!("PROP expression {name}={q}#{hole}{q} {}", span(*s))
        }
        Property::Mixed {
            name,
            parts,
            quote,
            span: s,
            ..
        } => {
            let parts: Vec<String> = parts
                .iter()
                .map(|part| match part {
                    ValuePart::Literal(text) => format!("\"{}\"", escape_text(text)),
                    ValuePart::Hole(hole) => format!("#{hole}"),
                })
                .collect();
            format!(
                "PROP mixed {name}={q}[{}]{q} {}",
                parts.join(", "),
                span(*s),
                q = quote_str(*quote)
            )
        }
        Property::Spread { hole, span: s } => format!("PROP spread #{hole} {}", span(*s)),
    }
}

fn quote_str(quote: Quote) -> &'static str {
    match quote {
        Quote::Double => "\"",
        Quote::Single => "'",
    }
}

fn span(span: Span) -> String {
    format!("@{}..{}", span.start, span.end)
}
