use super::*;
use std::path::Path;

#[test]
fn test_home_override_wins() {
    let resolved = resolve_persona_home(
        Some(OsString::from("/tmp/persona")),
        Some(PathBuf::from("/home/user")),
    );
    assert_eq!(resolved.as_deref(), Some(Path::new("/tmp/persona")));
}

#[test]
fn test_empty_override_is_ignored() {
    let resolved = resolve_persona_home(Some(OsString::new()), Some(PathBuf::from("/home/user")));
    assert_eq!(
        resolved.as_deref(),
        Some(Path::new("/home/user/.git-persona"))
    );
}

#[test]
fn test_falls_back_to_home_dir() {
    let resolved = resolve_persona_home(None, Some(PathBuf::from("/home/user")));
    assert_eq!(
        resolved.as_deref(),
        Some(Path::new("/home/user/.git-persona"))
    );
}

#[test]
fn test_no_home_available() {
    assert!(resolve_persona_home(None, None).is_none());
}

#[test]
fn test_now_iso_is_rfc3339() {
    let ts = now_iso();
    assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
}
