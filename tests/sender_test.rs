use recap_render::*;

#[test]
fn test_sender_from_json_ignores_unknown_keys() {
    let sender =
        SenderDetails::from_json(r#"{"name": "Ada", "team": "core", "phone": null}"#).unwrap();

    assert_eq!(sender.name.as_deref(), Some("Ada"));
    assert!(sender.phone.is_none());
    assert!(sender.company.is_none());
}

#[test]
fn test_sender_from_value() {
    let value = serde_json::json!({ "company": "Acme", "website": "https://acme.io" });
    let sender = SenderDetails::from_value(value).unwrap();

    assert_eq!(sender.company.as_deref(), Some("Acme"));
    assert_eq!(sender.website.as_deref(), Some("https://acme.io"));
}

#[test]
fn test_sender_from_json_rejects_non_string_field() {
    let err = SenderDetails::from_json(r#"{"phone": 5550100}"#).unwrap_err();
    assert!(matches!(err, ComposeError::SenderDetails(_)));
}

#[test]
fn test_sender_from_json_rejects_non_object() {
    assert!(SenderDetails::from_json("\"Ada\"").is_err());
}

#[test]
fn test_sender_is_empty() {
    assert!(SenderDetails::default().is_empty());
    assert!(
        SenderDetails {
            website: Some("  ".into()),
            ..SenderDetails::default()
        }
        .is_empty()
    );
    assert!(
        !SenderDetails {
            phone: Some("555".into()),
            ..SenderDetails::default()
        }
        .is_empty()
    );
}

#[test]
fn test_sender_role() {
    let both = SenderDetails {
        position: Some("Eng".into()),
        company: Some("Acme".into()),
        ..SenderDetails::default()
    };
    assert_eq!(both.role().as_deref(), Some("Eng at Acme"));

    let blank_company = SenderDetails {
        position: Some("Eng".into()),
        company: Some(" ".into()),
        ..SenderDetails::default()
    };
    assert_eq!(blank_company.role().as_deref(), Some("Eng"));

    assert!(SenderDetails::default().role().is_none());
}

#[test]
fn test_sender_html_lines_order() {
    let sender = SenderDetails {
        website: Some("http://acme.io".into()),
        phone: Some("555".into()),
        name: Some("Ada".into()),
        ..SenderDetails::default()
    };

    assert_eq!(
        sender.html_lines(),
        vec![
            "<p><strong>Ada</strong></p>".to_string(),
            "<p>Phone: 555</p>".to_string(),
            "<p>Website: <a href=\"http://acme.io\">http://acme.io</a></p>".to_string(),
        ]
    );
}

#[test]
fn test_sender_values_trimmed() {
    let sender = SenderDetails {
        name: Some("  Ada  ".into()),
        ..SenderDetails::default()
    };
    assert_eq!(sender.html_lines(), vec!["<p><strong>Ada</strong></p>".to_string()]);
}

#[test]
fn test_sender_signature() {
    let sender = SenderDetails {
        name: Some("Ada".into()),
        company: Some("Acme".into()),
        email: Some("ada@acme.io".into()),
        ..SenderDetails::default()
    };

    assert_eq!(sender.signature(), "Ada\nAcme\nEmail: ada@acme.io");
}
