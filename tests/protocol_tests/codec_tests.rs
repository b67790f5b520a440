//! Codec Tests
//!
//! Tests for batch body encoding and fetch result decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tiercache::protocol::{
    decode_results, encode_entries, encode_identifiers, CacheEntry, CacheEntryResult,
    CacheIdentifier, Endpoint,
};
use tiercache::CacheError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
}

fn alice() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
    }
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_identifiers_uses_short_field_names() {
    let ids = vec![
        CacheIdentifier::new("users", "1"),
        CacheIdentifier::new("users", "2"),
    ];
    let encoded = encode_identifiers(&ids).unwrap();

    assert_eq!(
        String::from_utf8(encoded).unwrap(),
        r#"[{"c":"users","k":"1"},{"c":"users","k":"2"}]"#
    );
}

#[test]
fn test_encode_entries_includes_value() {
    let entries = vec![CacheEntry::new("users", "1", alice())];
    let encoded = encode_entries(&entries).unwrap();

    assert_eq!(
        String::from_utf8(encoded).unwrap(),
        r#"[{"c":"users","k":"1","v":{"id":1,"name":"Alice"}}]"#
    );
}

#[test]
fn test_encode_empty_batches() {
    let ids: Vec<CacheIdentifier> = Vec::new();
    assert_eq!(encode_identifiers(&ids).unwrap(), b"[]");

    let entries: Vec<CacheEntry<User>> = Vec::new();
    assert_eq!(encode_entries(&entries).unwrap(), b"[]");
}

#[test]
fn test_encode_escapes_opaque_names() {
    let ids = vec![CacheIdentifier::new("a\"b/c", "k\u{e9}y\n")];
    let encoded = encode_identifiers(&ids).unwrap();

    let back: Vec<CacheIdentifier> = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(back, ids);
}

#[test]
fn test_encode_heterogeneous_values_as_json() {
    let entries = vec![
        CacheEntry::new("users", "1", serde_json::json!({"id": 1})),
        CacheEntry::new("counters", "hits", serde_json::json!(42)),
    ];
    let encoded = encode_entries(&entries).unwrap();

    assert_eq!(
        String::from_utf8(encoded).unwrap(),
        r#"[{"c":"users","k":"1","v":{"id":1}},{"c":"counters","k":"hits","v":42}]"#
    );
}

#[test]
fn test_encode_unrepresentable_value_fails() {
    // JSON object keys must be strings
    let mut value = BTreeMap::new();
    value.insert(vec![1u8, 2], "x");
    let entries = vec![CacheEntry::new("c", "k", value)];

    let result = encode_entries(&entries);
    assert!(matches!(result, Err(CacheError::Serialization(_))));
}

// =============================================================================
// Response Decoding Tests
// =============================================================================

#[test]
fn test_decode_found_and_missing() {
    let body = br#"[{"c":"users","k":"1","v":{"id":1,"name":"Alice"},"f":true},{"c":"users","k":"2","v":{},"f":false}]"#;
    let results: Vec<CacheEntryResult<User>> = decode_results(body).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].cache_name, "users");
    assert_eq!(results[0].key, "1");
    assert!(results[0].is_found());
    assert_eq!(results[0].value, Some(alice()));

    assert_eq!(results[1].key, "2");
    assert!(!results[1].is_found());
    assert_eq!(results[1].value, None);
}

#[test]
fn test_decode_missing_without_value_field() {
    let body = br#"[{"c":"users","k":"9","f":false}]"#;
    let results: Vec<CacheEntryResult<User>> = decode_results(body).unwrap();

    assert_eq!(results.len(), 1);
    assert!(!results[0].is_found());
    assert_eq!(results[0].clone().value_or_default(), User::default());
}

#[test]
fn test_decode_missing_with_null_value() {
    let body = br#"[{"c":"users","k":"9","v":null,"f":false}]"#;
    let results: Vec<CacheEntryResult<u64>> = decode_results(body).unwrap();
    assert_eq!(results[0].value, None);
}

#[test]
fn test_decode_empty_array() {
    let results: Vec<CacheEntryResult<User>> = decode_results(b"[]").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_decode_keeps_service_order() {
    let body = br#"[{"c":"a","k":"2","v":2,"f":true},{"c":"a","k":"1","v":1,"f":true}]"#;
    let results: Vec<CacheEntryResult<i32>> = decode_results(body).unwrap();

    let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["2", "1"]);
}

#[test]
fn test_decode_round_trip_various_types() {
    let ids = vec![
        CacheIdentifier::new("strings", "s"),
        CacheIdentifier::new("lists", "l"),
    ];
    let encoded = encode_identifiers(&ids).unwrap();
    let sent: Vec<serde_json::Value> = serde_json::from_slice(&encoded).unwrap();

    // Build the service response from what was sent
    let values = [serde_json::json!("hello"), serde_json::json!([1, 2, 3])];
    let response: Vec<serde_json::Value> = sent
        .iter()
        .zip(values.iter())
        .map(|(id, v)| serde_json::json!({"c": id["c"], "k": id["k"], "v": v, "f": true}))
        .collect();
    let body = serde_json::to_vec(&response).unwrap();

    let results: Vec<CacheEntryResult<serde_json::Value>> = decode_results(&body).unwrap();
    assert_eq!(results.len(), 2);
    for (result, (id, value)) in results.iter().zip(ids.iter().zip(values.iter())) {
        assert_eq!(&result.id(), id);
        assert_eq!(result.value.as_ref(), Some(value));
    }
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_decode_malformed_json() {
    let result: Result<Vec<CacheEntryResult<User>>, _> = decode_results(b"[{\"c\":");
    assert!(matches!(result, Err(CacheError::Serialization(_))));
}

#[test]
fn test_decode_empty_body() {
    let result: Result<Vec<CacheEntryResult<User>>, _> = decode_results(b"");
    assert!(matches!(result, Err(CacheError::Serialization(_))));
}

#[test]
fn test_decode_missing_found_flag() {
    let body = br#"[{"c":"users","k":"1","v":{"id":1,"name":"Alice"}}]"#;
    let result: Result<Vec<CacheEntryResult<User>>, _> = decode_results(body);
    assert!(matches!(result, Err(CacheError::Serialization(_))));
}

#[test]
fn test_decode_not_an_array() {
    let body = br#"{"c":"users","k":"1","v":1,"f":true}"#;
    let result: Result<Vec<CacheEntryResult<i32>>, _> = decode_results(body);
    assert!(matches!(result, Err(CacheError::Serialization(_))));
}

#[test]
fn test_decode_type_mismatch_on_found_entry() {
    let body = br#"[{"c":"users","k":"1","v":"not a user","f":true}]"#;
    let result: Result<Vec<CacheEntryResult<User>>, _> = decode_results(body);

    let err = result.unwrap_err();
    assert!(matches!(err, CacheError::Serialization(_)));
    assert!(err.to_string().contains("Serialization error"));
}

#[test]
fn test_decode_ignores_mismatched_placeholder_on_miss() {
    let body = br#"[{"c":"users","k":"1","v":"placeholder","f":false}]"#;
    let results: Vec<CacheEntryResult<User>> = decode_results(body).unwrap();
    assert!(!results[0].is_found());
}

// =============================================================================
// Endpoint Tests
// =============================================================================

#[test]
fn test_endpoint_paths() {
    assert_eq!(Endpoint::Fetch.path(), "/api/v1/cache/get_all");
    assert_eq!(Endpoint::Store.path(), "/api/v1/cache/put_all");
    assert_eq!(Endpoint::Evict.path(), "/api/v1/cache/evict_all");
}

#[test]
fn test_identifier_equality() {
    assert_eq!(CacheIdentifier::new("a", "1"), CacheIdentifier::new("a", "1"));
    assert_ne!(CacheIdentifier::new("a", "1"), CacheIdentifier::new("b", "1"));
    assert_ne!(CacheIdentifier::new("a", "1"), CacheIdentifier::new("a", "2"));
}
