use isr_revalidate::RevalidateError;

#[test]
fn error_display_config() {
    let err = RevalidateError::Config("bad contract".into());
    let msg = format!("{err}");
    assert!(msg.contains("invalid configuration"));
    assert!(msg.contains("bad contract"));
}

#[test]
fn error_display_status_includes_code_and_body() {
    let err = RevalidateError::Status {
        status: 500,
        body: "boom".into(),
    };
    assert_eq!(format!("{err}"), "request rejected: 500 - boom");
}

#[test]
fn error_display_locale() {
    let err = RevalidateError::Locale("plugin missing".into());
    assert!(format!("{err}").contains("locale lookup failed"));
}

#[test]
fn status_accessor() {
    let err = RevalidateError::Status {
        status: 404,
        body: String::new(),
    };
    assert_eq!(err.status(), Some(404));
    assert_eq!(RevalidateError::Config("x".into()).status(), None);
}

#[test]
fn serialization_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: RevalidateError = json_err.into();
    assert!(matches!(err, RevalidateError::Serialization(_)));
}
