use hiccup_html::{
    attrs, comment, node, raw, render, render_pretty, RenderError, TagSpecErrorKind, Value,
};
use pretty_assertions::assert_eq;

#[test]
fn escapes_text_children() {
    assert_eq!(render(&node!["p", "<b>"]).unwrap(), "<p>&lt;b&gt;</p>");
}

#[test]
fn raw_bypasses_escaping() {
    assert_eq!(render(&node!["div", raw("<b>")]).unwrap(), "<div><b></div>");
}

#[test]
fn plain_text_renders_unchanged_and_repeatably() {
    let tree = node!["span", "plain words"];
    let first = render(&tree).unwrap();
    let second = render(&tree).unwrap();
    assert_eq!(first, "<span>plain words</span>");
    assert_eq!(first, second);
}

#[test]
fn numbers_render_as_text() {
    assert_eq!(
        render(&node!["td", 42, " / ", 0.5]).unwrap(),
        "<td>42 / 0.5</td>"
    );
}

#[test]
fn boolean_attributes() {
    let tree = node!["input", attrs! { "checked" => true, "disabled" => false }];
    assert_eq!(render(&tree).unwrap(), r#"<input checked="checked">"#);
}

#[test]
fn class_merge_keeps_shorthand_first() {
    let tree = node![
        "div.base",
        attrs! { "class" => node!["added", "another"] },
        "content"
    ];
    assert_eq!(
        render(&tree).unwrap(),
        r#"<div class="base added another">content</div>"#
    );
}

#[test]
fn class_and_id_precede_sorted_attributes() {
    let tree = node![
        "a#home.nav",
        attrs! { "title" => "Home", "href" => "/", "aria-current" => "page" },
        "Home"
    ];
    assert_eq!(
        render(&tree).unwrap(),
        r#"<a class="nav" id="home" aria-current="page" href="/" title="Home">Home</a>"#
    );
}

#[test]
fn shorthand_id_overrides_attribute_id() {
    let tree = node!["div#shorthand", attrs! { "id" => "attribute" }];
    assert_eq!(render(&tree).unwrap(), r#"<div id="shorthand"></div>"#);
}

#[test]
fn attribute_id_applies_without_shorthand_id() {
    let tree = node!["div.box", attrs! { "id" => "attribute" }];
    assert_eq!(
        render(&tree).unwrap(),
        r#"<div class="box" id="attribute"></div>"#
    );
}

#[test]
fn duplicate_classes_are_collapsed() {
    let tree = node!["p.a.b", attrs! { "class" => "b c a" }];
    assert_eq!(render(&tree).unwrap(), r#"<p class="a b c"></p>"#);
}

#[test]
fn flattens_list_children() {
    let tree = node!["ul", node![node!["li", "One"], node!["li", "Two"]]];
    assert_eq!(
        render(&tree).unwrap(),
        "<ul><li>One</li><li>Two</li></ul>"
    );
}

#[test]
fn flattens_only_one_level() {
    let tree = node![
        "ul",
        node![node![node!["li", "One"], node!["li", "Two"]]]
    ];
    assert_eq!(
        render(&tree).unwrap(),
        r#"<ul>[["li", "One"], ["li", "Two"]]</ul>"#
    );
}

#[test]
fn mapped_children_compose() {
    let items = ["apple", "pear"];
    let tree = node![
        "ol",
        items.iter().map(|item| node!["li", *item]).collect::<Value>()
    ];
    assert_eq!(
        render(&tree).unwrap(),
        "<ol><li>apple</li><li>pear</li></ol>"
    );
}

#[test]
fn void_elements_ignore_children() {
    let tree = node!["img", attrs! { "src" => "a.jpg" }, node!["span", "ignored"]];
    assert_eq!(render(&tree).unwrap(), r#"<img src="a.jpg">"#);
}

#[test]
fn empty_values_render_nothing() {
    let tree = node!["p", Value::Null, false, "kept", Option::<&str>::None];
    assert_eq!(render(&tree).unwrap(), "<p>kept</p>");
    assert_eq!(render(&Value::Null).unwrap(), "");
}

#[test]
fn bare_mapping_in_child_position_is_ignored() {
    let tree = node!["p", "a", attrs! { "id" => "late" }, "b"];
    assert_eq!(render(&tree).unwrap(), "<p>ab</p>");
    assert_eq!(render(&attrs! { "id" => "root" }).unwrap(), "");
}

#[test]
fn comments_are_not_escaped() {
    assert_eq!(
        render(&node!["div", comment("a < b")]).unwrap(),
        "<div><!-- a < b --></div>"
    );
}

#[test]
fn root_list_renders_siblings() {
    let tree = node![node!["h1", "Title"], node!["p", "Body"]];
    assert_eq!(render(&tree).unwrap(), "<h1>Title</h1><p>Body</p>");
}

#[test]
fn pretty_keeps_text_only_elements_inline() {
    assert_eq!(
        render_pretty(&node!["p", "Hello ", raw("<em>you</em>")]).unwrap(),
        "<p>Hello <em>you</em></p>"
    );
}

#[test]
fn pretty_indents_nested_elements() {
    let tree = node![
        "html",
        node!["head", node!["title", "Page"]],
        node![
            "body",
            node!["div.content", node!["p", "Hello"], node!["br"], "tail"]
        ]
    ];
    assert_eq!(
        render_pretty(&tree).unwrap(),
        concat!(
            "<html>\n",
            "  <head>\n",
            "    <title>Page</title>\n",
            "  </head>\n",
            "  <body>\n",
            "    <div class=\"content\">\n",
            "      <p>Hello</p>\n",
            "      <br>\n",
            "      tail\n",
            "    </div>\n",
            "  </body>\n",
            "</html>"
        )
    );
}

#[test]
fn invalid_head_is_an_error() {
    let result = render(&node!["div", node![1, "x"]]);
    match result {
        Err(RenderError::InvalidNode { found }) => assert_eq!(found, "1"),
        other => panic!("Expected InvalidNode error, got {other:?}"),
    }
}

#[test]
fn malformed_tag_spec_is_an_error() {
    let result = render(&node!["section", node!["div#a#b"]]);
    assert!(matches!(
        result,
        Err(RenderError::InvalidTagSpec {
            reason: TagSpecErrorKind::DuplicateId,
            ..
        })
    ));
}

#[test]
fn unsupported_attribute_value_is_an_error() {
    let result = render(&node!["div", attrs! { "data" => attrs! { "x" => 1 } }]);
    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        r#"Unsupported value for attribute "data": {"x": 1}"#
    );
}

#[test]
fn attribute_names_cannot_break_out_of_the_tag() {
    let result = render(&node!["a", attrs! { "x\" onclick=\"evil()" => "y" }]);
    match result {
        Err(RenderError::InvalidAttributeName { name }) => {
            assert_eq!(name, "x\" onclick=\"evil()");
        }
        other => panic!("Expected InvalidAttributeName error, got {other:?}"),
    }
}

#[test]
fn markup_in_tag_name_is_an_error() {
    let result = render(&node!["p><script>x</script><p", "t"]);
    match result {
        Err(RenderError::InvalidTagSpec {
            position, reason, ..
        }) => {
            assert_eq!(position, 1);
            assert_eq!(reason, TagSpecErrorKind::InvalidCharacter);
        }
        other => panic!("Expected InvalidTagSpec error, got {other:?}"),
    }
}

#[test]
fn integers_above_i64_render_exactly() {
    assert_eq!(
        render(&node!["p", u64::MAX]).unwrap(),
        "<p>18446744073709551615</p>"
    );
}
