use super::{TreeBuilder, TreeBuilderConfig, format_tree, parse};
use crate::ast::{ElementKind, Node, Property, Root, ValuePart};
use crate::shared::{Quote, Span, TagSet, Token, TokenKind, TreeBuilderError};
use crate::tokenizer::tokenize;

fn build(chunks: &[&str]) -> Result<Root, TreeBuilderError> {
    let stream = tokenize(chunks, &TagSet::raw_text_elements())
        .expect("tokenizing test input must succeed");
    parse(stream.tokens(), &TagSet::void_elements())
}

fn tree(chunks: &[&str]) -> Vec<String> {
    format_tree(&build(chunks).expect("tree building must succeed"))
}

fn single_element_props(chunks: &[&str]) -> Vec<Property> {
    let root = build(chunks).expect("tree building must succeed");
    let element = root.children[0].as_element().expect("first child is an element");
    element.props.clone()
}

#[test]
fn element_with_text() {
    assert_eq!(
        tree(&["<div>Hello</div>"]),
        vec!["#root", "  ELEMENT div @0..16", "    TEXT \"Hello\" @5..10"]
    );
}

#[test]
fn self_closing_with_boolean_prop() {
    let root = build(&["<input checked />"]).expect("builds");
    let input = root.children[0].as_element().expect("element");
    assert_eq!(input.name, "input");
    assert_eq!(input.self_closing, Some(Span::new(15, 16)));
    assert_eq!(input.close, Span::new(16, 17));
    assert!(input.children.is_empty());
    assert_eq!(
        input.props,
        vec![Property::Boolean {
            name: "checked".to_string(),
            name_span: Span::new(7, 14)
        }]
    );
}

#[test]
fn unquoted_hole_is_expression_prop() {
    assert_eq!(
        single_element_props(&["<div id=", "></div>"]),
        vec![Property::Expression {
            name: "id".to_string(),
            name_span: Span::new(5, 7),
            hole: 0,
            quote: None,
            span: Span::new(5, 8),
        }]
    );
}

#[test]
fn quoted_single_hole_is_expression_not_mixed() {
    assert_eq!(
        single_element_props(&["<div id=\"", "\"></div>"]),
        vec![Property::Expression {
            name: "id".to_string(),
            name_span: Span::new(5, 7),
            hole: 0,
            quote: Some(Quote::Double),
            span: Span::new(5, 10),
        }]
    );
}

#[test]
fn literal_and_hole_is_mixed() {
    let props = single_element_props(&["<div class=\"btn ", "\"></div>"]);
    assert!(
        matches!(
            props.as_slice(),
            [Property::Mixed { name, parts, quote: Quote::Double, .. }]
                if name == "class"
                    && parts == &vec![ValuePart::Literal("btn ".to_string()), ValuePart::Hole(0)]
        ),
        "unexpected props: {props:?}"
    );
}

#[test]
fn mixed_parts_keep_order_and_runs() {
    let props = single_element_props(&["<a title='", " and ", "", "!'></a>"]);
    let Property::Mixed { parts, quote, .. } = &props[0] else {
        panic!("expected mixed prop, got {props:?}");
    };
    assert_eq!(*quote, Quote::Single);
    assert_eq!(
        parts,
        &vec![
            ValuePart::Hole(0),
            ValuePart::Literal(" and ".to_string()),
            ValuePart::Hole(1),
            ValuePart::Hole(2),
            ValuePart::Literal("!".to_string()),
        ]
    );
}

#[test]
fn two_adjacent_holes_are_mixed() {
    let props = single_element_props(&["<a x=\"", "", "\"/>"]);
    assert!(
        matches!(&props[0], Property::Mixed { parts, .. } if parts == &vec![ValuePart::Hole(0), ValuePart::Hole(1)]),
        "{props:?}"
    );
}

#[test]
fn static_and_empty_static_props() {
    let props = single_element_props(&["<a href=\"/x\" alt='' />"]);
    assert_eq!(
        props,
        vec![
            Property::Static {
                name: "href".to_string(),
                name_span: Span::new(3, 7),
                value: "/x".to_string(),
                quote: Quote::Double,
                span: Span::new(3, 12),
            },
            Property::Static {
                name: "alt".to_string(),
                name_span: Span::new(13, 16),
                value: String::new(),
                quote: Quote::Single,
                span: Span::new(13, 19),
            },
        ]
    );
}

#[test]
fn spread_prop() {
    let props = single_element_props(&["<Comp a ...", " b/>"]);
    assert_eq!(
        props,
        vec![
            Property::Boolean {
                name: "a".to_string(),
                name_span: Span::new(6, 7)
            },
            Property::Spread {
                hole: 0,
                span: Span::new(8, 11)
            },
            Property::Boolean {
                name: "b".to_string(),
                name_span: Span::new(12, 13)
            },
        ]
    );
}

#[test]
fn spread_without_expression_is_fatal() {
    let err = build(&["<div ...>"]).expect_err("spread needs a hole");
    assert_eq!(err, TreeBuilderError::SpreadWithoutExpression { offset: 5 });
}

#[test]
fn uppercase_names_are_components() {
    let root = build(&["<Foo><bar/></Foo>"]).expect("builds");
    let foo = root.children[0].as_element().expect("element");
    assert_eq!(foo.kind, ElementKind::Component);
    assert!(foo.is_component());
    let bar = foo.children[0].as_element().expect("element");
    assert_eq!(bar.kind, ElementKind::Element);
    assert!(bar.is_self_closing());
}

#[test]
fn mismatched_closing_tag() {
    let err = build(&["<div></span>"]).expect_err("names differ");
    assert_eq!(
        err,
        TreeBuilderError::MismatchedClosingTag {
            expected: Some("div".to_string()),
            found: Some("span".to_string()),
            offset: 5,
        }
    );
    assert!(err.to_string().contains("mismatched closing tag"));
}

#[test]
fn closing_tag_at_root_is_mismatched() {
    let err = build(&["</div>"]).expect_err("nothing is open");
    assert!(matches!(
        err,
        TreeBuilderError::MismatchedClosingTag { expected: None, .. }
    ));
}

#[test]
fn closing_tag_without_name_is_mismatched() {
    let err = build(&["<a></>"]).expect_err("no name");
    assert!(matches!(
        err,
        TreeBuilderError::MismatchedClosingTag { found: None, .. }
    ));
}

#[test]
fn closing_tag_must_end_with_close_angle() {
    let err = build(&["<a></a b>"]).expect_err("extra identifier");
    assert_eq!(
        err,
        TreeBuilderError::UnexpectedToken {
            found: "identifier",
            offset: 7
        }
    );
}

#[test]
fn expected_identifier_after_open_angle() {
    let err = build(&["<", ">"]).expect_err("hole is not a tag name");
    assert!(matches!(err, TreeBuilderError::ExpectedIdentifier { offset: 1, .. }));
    assert!(err.to_string().contains("expected identifier"));
}

#[test]
fn invalid_attribute_token() {
    let err = build(&["<a ", ">"]).expect_err("bare hole in attribute list");
    assert!(matches!(err, TreeBuilderError::InvalidAttribute { offset: 3, .. }));
    assert!(err.to_string().contains("invalid attribute"));
}

#[test]
fn unquoted_literal_value_is_invalid() {
    let err = build(&["<a b=c>"]).expect_err("unquoted literal");
    assert_eq!(
        err,
        TreeBuilderError::InvalidAttribute {
            found: "identifier",
            offset: 5
        }
    );
}

#[test]
fn slash_must_be_followed_by_close_angle() {
    let err = build(&["<a / b>"]).expect_err("slash then identifier");
    assert!(matches!(err, TreeBuilderError::UnexpectedToken { offset: 5, .. }));
}

#[test]
fn unclosed_tag_at_end_of_stream() {
    let err = build(&["<div><p>"]).expect_err("both still open");
    assert_eq!(
        err,
        TreeBuilderError::UnclosedTag {
            name: "p".to_string(),
            offset: 5
        }
    );
    assert!(err.to_string().contains("unclosed tag"));
}

#[test]
fn truncated_tags_are_end_of_input() {
    for chunks in [&["<div"][..], &["<"][..], &["<a b=\"x"][..], &["<a b="][..], &["<a></a"][..]] {
        let err = build(chunks).expect_err("input ends inside a tag");
        assert!(
            matches!(err, TreeBuilderError::UnexpectedEndOfInput { .. }),
            "{chunks:?}: {err:?}"
        );
    }
}

#[test]
fn stray_token_in_content() {
    let tokens = vec![Token::new(TokenKind::Equals, Span::new(0, 1))];
    let err = parse(&tokens, &TagSet::void_elements()).expect_err("'=' in content");
    assert_eq!(err, TreeBuilderError::UnexpectedToken { found: "'='", offset: 0 });
}

#[test]
fn whitespace_between_tags_is_dropped() {
    assert_eq!(
        tree(&["<ul>\n  <li>a</li>\n</ul>"]),
        vec![
            "#root",
            "  ELEMENT ul @0..23",
            "    ELEMENT li @7..17",
            "      TEXT \"a\" @11..12",
        ]
    );
}

#[test]
fn whitespace_between_holes_is_kept() {
    let root = build(&["<p>", " ", "</p>"]).expect("builds");
    let p = root.children[0].as_element().expect("element");
    let kinds: Vec<String> = p
        .children
        .iter()
        .map(|node| match node {
            Node::Text(text) => format!("text:{:?}", text.value),
            Node::Expression(expr) => format!("expr:{}", expr.hole),
            Node::Element(_) => "element".to_string(),
        })
        .collect();
    assert_eq!(kinds, vec!["expr:0", "text:\" \"", "expr:1"]);
}

#[test]
fn whitespace_beside_tags_is_dropped_around_hole() {
    // Leading whitespace follows '>' and is dropped; trailing whitespace
    // precedes '<' and is dropped.
    let root = build(&["<p> ", " </p>"]).expect("builds");
    let p = root.children[0].as_element().expect("element");
    assert_eq!(p.children.len(), 1);
    assert!(matches!(p.children[0], Node::Expression(_)));
}

#[test]
fn nested_whitespace_rule_applies_at_any_depth() {
    let root = build(&["<a><b><c> </c></b></a>"]).expect("builds");
    let c = &root.children[0].children()[0].children()[0];
    assert!(c.children().is_empty());
}

#[test]
fn void_elements_discard_children() {
    let root = build(&["<br>text<b>x</b></br>"]).expect("builds");
    let br = root.children[0].as_element().expect("element");
    assert_eq!(br.name, "br");
    assert!(br.children.is_empty());
    assert_eq!(br.end_tag, Some(Span::new(16, 21)));
}

#[test]
fn custom_void_set() {
    let stream = tokenize(&["<x>y</x>"], &TagSet::raw_text_elements()).expect("tokenizes");
    let builder = TreeBuilder::new(TreeBuilderConfig {
        void_elements: ["x"].into_iter().collect(),
    });
    let root = builder.build(stream.tokens()).expect("builds");
    assert!(root.children[0].children().is_empty());
}

#[test]
fn raw_text_body_is_single_text_child() {
    let root = build(&["<script>a < b && c > d</script>"]).expect("builds");
    let script = root.children[0].as_element().expect("element");
    assert_eq!(script.children.len(), 1);
    assert_eq!(
        script.children[0].as_text().map(|t| t.value.as_str()),
        Some("a < b && c > d")
    );
}

#[test]
fn textarea_with_only_a_hole() {
    let root = build(&["<textarea>", "</textarea>"]).expect("builds");
    let textarea = root.children[0].as_element().expect("element");
    assert_eq!(textarea.name, "textarea");
    assert_eq!(textarea.children.len(), 1);
    assert_eq!(
        textarea.children[0].as_expression().map(|e| e.hole),
        Some(0)
    );
}

#[test]
fn top_level_holes_and_text() {
    assert_eq!(
        tree(&["a", "b"]),
        vec!["#root", "  TEXT \"a\" @0..1", "  EXPR #0 @1..1", "  TEXT \"b\" @1..2"]
    );
}

#[test]
fn element_spans_cover_tags() {
    let root = build(&["<a x=\"1\">hi</a>"]).expect("builds");
    let a = root.children[0].as_element().expect("element");
    assert_eq!(a.open, Span::new(0, 1));
    assert_eq!(a.name_span, Span::new(1, 2));
    assert_eq!(a.close, Span::new(8, 9));
    assert_eq!(a.end_tag, Some(Span::new(11, 15)));
    assert_eq!(a.span(), Span::new(0, 15));
    assert_eq!(a.prop("x").map(Property::span), Some(Span::new(3, 8)));
    assert_eq!(a.prop("y"), None);
}

#[test]
fn formatted_props() {
    assert_eq!(
        tree(&["<Card ...", " on:click=", " title=\"a", "b\" open />"]),
        vec![
            "#root",
            "  COMPONENT Card @0..38 self_closing",
            "    PROP spread #0 @6..9",
            "    PROP expression on:click=#1 @10..19",
            "    PROP mixed title=\"[\"a\", #2, \"b\"]\" @20..30",
            "    PROP boolean open @31..35",
        ]
    );
}
