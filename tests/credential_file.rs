use std::fs;

use serial_test::serial;
use ytq::credentials::{self, CredentialSource};
use ytq::error::Error;

#[test]
fn write_then_parse_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    credentials::write_config(&path, "abc123").unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "YT_API_KEY=\"abc123\"\n");
    assert_eq!(credentials::parse_config(&contents), Some("abc123".into()));
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ytq").join("config");
    credentials::write_config(&path, "k").unwrap();
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn config_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    credentials::write_config(&path, "abc123").unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
#[serial]
fn environment_beats_other_sources() {
    std::env::set_var(credentials::KEY_VAR, "from-env");
    let key =
        credentials::resolve(&[CredentialSource::Env, CredentialSource::File]).unwrap();
    assert_eq!(key, "from-env");
    std::env::remove_var(credentials::KEY_VAR);
}

#[test]
#[serial]
fn empty_environment_value_is_skipped() {
    std::env::set_var(credentials::KEY_VAR, "");
    let err = credentials::resolve(&[CredentialSource::Env]).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Config(_))));
    std::env::remove_var(credentials::KEY_VAR);
}

#[test]
#[serial]
fn exhausted_sources_is_a_config_error() {
    std::env::remove_var(credentials::KEY_VAR);
    let err = credentials::resolve(&[CredentialSource::Env]).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Config(_))));
}
