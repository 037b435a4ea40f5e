//! String, number and other scalar payloads.

use serde_json::{Value, json};
use view_inference::{ViewType, infer_view, infer_views};

#[test]
fn test_plain_prose_defaults_to_markdown() {
    let best = infer_view(&json!("just some plain prose"));

    assert_eq!(best.view(), ViewType::Markdown);
    assert_eq!(best.confidence(), 0.50);
}

#[test]
fn test_markdown_text() {
    assert_best_view!(
        &json!("# Hello\n\nSome **markdown** content"),
        ViewType::Markdown,
        0.60
    );
}

#[test]
fn test_code_text() {
    assert_best_view!(&json!("def hello():\n    print('hi')"), ViewType::Code, 0.60);
    assert_best_view!(&json!("def f(): pass"), ViewType::Code, 0.60);
}

#[test]
fn test_fenced_code_in_prose_keeps_both() {
    let payload = json!("Usage:\n```\nlet x = 1;\n```");
    let views: Vec<ViewType> = infer_views(&payload, 3).iter().map(|s| s.view()).collect();

    assert_eq!(views, vec![ViewType::Code, ViewType::Markdown]);
}

#[test]
fn test_numbers() {
    assert_best_view!(&json!(42), ViewType::Counter, 0.60);
    assert_best_view!(&json!(-0.5), ViewType::Counter, 0.60);
}

#[test]
fn test_other_scalars() {
    for payload in [json!(true), json!(false), Value::Null] {
        let suggestions = infer_views(&payload, 3);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].view(), ViewType::Json);
        assert_eq!(suggestions[0].confidence(), 0.50);
    }
}

#[test]
fn test_zero_limit() {
    assert!(infer_views(&json!("text"), 0).is_empty());
    assert!(infer_views(&json!(1), 0).is_empty());
}
