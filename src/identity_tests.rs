use super::*;

#[test]
fn test_equality_is_exact() {
    let alice = Identity::new("Alice", "alice@x.com");
    assert_eq!(alice, Identity::new("Alice", "alice@x.com"));
    assert_ne!(alice, Identity::new("alice", "alice@x.com"));
    assert_ne!(alice, Identity::new("Alice", "Alice@x.com"));
    assert_ne!(alice, Identity::new("Alice ", "alice@x.com"));
}

#[test]
fn test_same_email_different_name_is_distinct() {
    let a = Identity::new("Alice", "shared@x.com");
    let b = Identity::new("Alicia", "shared@x.com");
    assert_ne!(a, b);
}

#[test]
fn test_empty_identity() {
    let empty = Identity::empty();
    assert!(empty.is_empty());
    assert_eq!(empty, Identity::new("", ""));
    assert!(!Identity::new("Alice", "").is_empty());
}

#[test]
fn test_display_label() {
    assert_eq!(
        Identity::new("Alice", "alice@x.com").display_label(),
        "Alice <alice@x.com>"
    );
    assert_eq!(Identity::new("Alice", "").display_label(), "Alice");
    assert_eq!(Identity::empty().display_label(), UNSET_LABEL);
    assert_eq!(Identity::empty().to_string(), UNSET_LABEL);
}

#[test]
fn test_scope_semantics() {
    assert!(Scope::Local.requires_repository());
    assert!(!Scope::Global.requires_repository());
    assert_eq!(Scope::Local.config_flag(), None);
    assert_eq!(Scope::Global.config_flag(), Some("--global"));
    assert_eq!(Scope::default(), Scope::Local);
}

#[test]
fn test_identity_serializes_as_name_email_object() {
    let json = serde_json::to_string(&Identity::new("Bob", "bob@x.com")).expect("serialize");
    assert_eq!(json, r#"{"name":"Bob","email":"bob@x.com"}"#);
    let scope = serde_json::to_string(&Scope::Global).expect("serialize");
    assert_eq!(scope, r#""global""#);
}
