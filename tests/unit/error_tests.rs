//! Display-contract tests for `BridgeError`.

use macbridge::BridgeError;

#[test]
fn invalid_port_display_includes_name() {
    let err = BridgeError::InvalidPort("com.example.testport".into());
    assert_eq!(err.to_string(), "invalid port: com.example.testport");
}

#[test]
fn closed_display_is_fixed() {
    assert_eq!(BridgeError::Closed.to_string(), "port closed");
}

#[test]
fn send_display_starts_with_send_failed_prefix() {
    let err = BridgeError::Send("receive timed out".into());
    assert!(err.to_string().starts_with("send failed:"));
    assert_eq!(err.to_string(), "send failed: receive timed out");
}

#[test]
fn messages_carry_no_trailing_period() {
    let errors = [
        BridgeError::InvalidPort("com.example.a".into()),
        BridgeError::Closed,
        BridgeError::Send("transport error".into()),
        BridgeError::Encode("key must be a string".into()),
        BridgeError::Decode("expected value".into()),
        BridgeError::Open("empty path".into()),
    ];
    for err in errors {
        let s = err.to_string();
        assert!(
            !s.ends_with('.'),
            "error message must not end with a period: {s}"
        );
    }
}

#[test]
fn failure_classes_are_distinct() {
    let send = BridgeError::Send("boom".into());
    let encode = BridgeError::Encode("boom".into());
    let decode = BridgeError::Decode("boom".into());
    assert_ne!(send.to_string(), encode.to_string());
    assert_ne!(send.to_string(), decode.to_string());
    assert_ne!(encode.to_string(), decode.to_string());
}

#[test]
fn implements_std_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(BridgeError::Closed);
    assert!(!err.to_string().is_empty());
}

#[test]
fn debug_representation_names_the_variant() {
    let err = BridgeError::Decode("truncated reply".into());
    let debug = format!("{err:?}");
    assert!(debug.contains("Decode"));
    assert!(debug.contains("truncated reply"));
}
