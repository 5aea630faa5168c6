//! # Response Decoding Tests

use serde_json::{json, Value};
use socialyze::suggestions::{decode_response, decode_value, strip_code_fences};
use socialyze::DecodedResponse;

fn sample() -> Value {
    json!({
        "suggestions": ["Lead with the offer", "Add a deadline"],
        "instagram": "Big news 🎉",
        "linkedin": "We are launching today.",
        "scores": { "engagement": 70, "readability": 60, "cta": 80 }
    })
}

fn expect_object(decoded: DecodedResponse) -> Value {
    match decoded {
        DecodedResponse::Structured(object) => Value::Object(object),
        DecodedResponse::FreeText(text) => panic!("expected an object, got free text: {text}"),
    }
}

#[test]
fn test_plain_json_object_decodes() {
    let decoded = decode_response(&sample().to_string());
    assert_eq!(expect_object(decoded), sample());
}

#[test]
fn test_fenced_block_decodes_like_unwrapped() {
    let unwrapped = decode_response(&sample().to_string());
    let fenced = decode_response(&format!("```json\n{}\n```\n", sample()));
    let bare_fence = decode_response(&format!("  ```\n{}\n```", sample()));

    assert_eq!(fenced, unwrapped);
    assert_eq!(bare_fence, unwrapped);
}

#[test]
fn test_double_encoded_json_yields_inner_object() {
    let double_encoded = serde_json::to_string(&sample().to_string()).unwrap();
    assert!(double_encoded.starts_with('"'));

    let decoded = decode_response(&double_encoded);
    assert_eq!(expect_object(decoded), sample());
}

#[test]
fn test_triple_encoded_json_stops_as_free_text() {
    let once = sample().to_string();
    let twice = serde_json::to_string(&once).unwrap();
    let thrice = serde_json::to_string(&twice).unwrap();

    assert_eq!(
        decode_response(&thrice),
        DecodedResponse::FreeText(thrice.clone())
    );
}

#[test]
fn test_plain_text_passes_through_unchanged() {
    let raw = "Here are some ideas:\n- Add a hook\n- Use hashtags";
    assert_eq!(
        decode_response(raw),
        DecodedResponse::FreeText(raw.to_string())
    );
}

#[test]
fn test_non_object_json_is_free_text() {
    let raw = "```json\n[\"tip one\", \"tip two\"]\n```";
    assert_eq!(
        decode_response(raw),
        DecodedResponse::FreeText(raw.to_string())
    );
}

#[test]
fn test_structured_value_is_used_directly() {
    assert_eq!(expect_object(decode_value(sample())), sample());
}

#[test]
fn test_strip_code_fences() {
    assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
    assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    assert_eq!(strip_code_fences(""), "");
}
