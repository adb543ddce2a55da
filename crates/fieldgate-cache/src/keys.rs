//! Deterministic cache key and tag derivation.
//!
//! `key = prefix:resource:method:sha256(resource::method::args)`. The digest
//! is content-stable, so the same operation with the same serialized
//! arguments produces the same key in every process at any time. The tenant
//! context is part of the serialized arguments, so two tenants can never
//! share an entry.

use sha2::{Digest, Sha256};

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "fieldgate:cache";

/// Derives the cache key for one repository operation invocation.
#[must_use]
pub fn operation_key(resource: &str, method: &str, args_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(resource.as_bytes());
    hasher.update(b"::");
    hasher.update(method.as_bytes());
    hasher.update(b"::");
    hasher.update(args_json.as_bytes());
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }

    format!("{}:{}:{}:{}", CACHE_PREFIX, resource, method, hex)
}

/// Derives the shared tag for every cached result of one repository method.
///
/// Invalidating the tag evicts every argument variant of that method.
#[must_use]
pub fn method_tag(resource: &str, method: &str) -> String {
    format!("{}:{}:{}:tag", CACHE_PREFIX, resource, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_operation_and_args_produce_same_key() {
        let a = operation_key("appointment", "search", r#"[{"office_id":7},{"ids":[1]}]"#);
        let b = operation_key("appointment", "search", r#"[{"office_id":7},{"ids":[1]}]"#);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_args_produce_different_keys() {
        let a = operation_key("appointment", "search", r#"[{"office_id":7},{"ids":[1]}]"#);
        let b = operation_key("appointment", "search", r#"[{"office_id":8},{"ids":[1]}]"#);
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_methods_produce_different_keys() {
        let a = operation_key("appointment", "find", "[7,1]");
        let b = operation_key("appointment", "find_many", "[7,1]");
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_shape() {
        let key = operation_key("customer", "find", "[7,5]");
        assert!(key.starts_with("fieldgate:cache:customer:find:"));
        // sha256 hex digest
        assert_eq!(key.rsplit(':').next().unwrap().len(), 64);
    }

    #[test]
    fn test_method_tag_is_stable_and_distinct() {
        assert_eq!(
            method_tag("appointment", "search"),
            "fieldgate:cache:appointment:search:tag"
        );
        assert_ne!(
            method_tag("appointment", "search"),
            method_tag("appointment", "find")
        );
    }
}
