#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use portfolio_api::config;
use portfolio_api::error::ApiError;

#[test]
fn deny_unknown_fields() {
    let bad = r#"
version: 1
server:
  lisden: "0.0.0.0:8000" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}

#[test]
fn ok_custom_listen() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9090"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(
        cfg.server.listen_addr().expect("must parse addr").port(),
        9090
    );
}

#[test]
fn bad_listen_fails_validation() {
    let bad = r#"
version: 1
server:
  listen: "not-an-address"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn unsupported_version_fails_validation() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely-missing.yaml").expect("must default");
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}
