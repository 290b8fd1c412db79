#![cfg(feature = "serde")]

use hiccup_html::{render, render_with, RenderOptions, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn renders_json_trees() {
    let tree = Value::from(json!([
        "form#login",
        {"method": "post", "action": "/login"},
        ["input", {"name": "user", "required": true, "autofocus": null}],
        ["button.primary", {"type": "submit"}, "Sign in"]
    ]));
    assert_eq!(
        render(&tree).unwrap(),
        concat!(
            r#"<form id="login" action="/login" method="post">"#,
            r#"<input name="user" required="required">"#,
            r#"<button class="primary" type="submit">Sign in</button>"#,
            "</form>"
        )
    );
}

#[test]
fn deserializes_value_directly() {
    let tree: Value = serde_json::from_str(r#"["ul", [["li", 1], ["li", 2.5]]]"#).unwrap();
    assert_eq!(render(&tree).unwrap(), "<ul><li>1</li><li>2.5</li></ul>");
}

#[test]
fn options_from_config() {
    let options: RenderOptions = serde_json::from_value(json!({"style": "pretty", "indent": 1}))
        .unwrap();
    let tree = Value::from(json!(["div", ["p", "x"]]));
    assert_eq!(
        render_with(&tree, &options).unwrap(),
        "<div>\n <p>x</p>\n</div>"
    );
}

#[test]
fn large_json_integers_render_exactly() {
    let tree = Value::from(json!(["p", 18446744073709551615u64]));
    assert_eq!(render(&tree).unwrap(), "<p>18446744073709551615</p>");
}
