use recap_render::*;

fn request(recipients: &[&str]) -> EmailRequest {
    EmailRequest {
        recipients: recipients.iter().map(ToString::to_string).collect(),
        summary: "## Actions\n- **Bob**: send notes".into(),
        ..EmailRequest::default()
    }
}

#[test]
fn test_request_from_json_defaults() {
    let request =
        EmailRequest::from_json(r#"{"recipients": ["a@b.co"], "summary": "Hi"}"#).unwrap();

    assert_eq!(request.subject(), DEFAULT_SUBJECT);
    assert!(!request.include_transcript);
    assert!(request.transcript().is_none());
    assert!(request.sender_details.is_none());
}

#[test]
fn test_request_from_json_nested_sender() {
    let json = r#"{
        "recipients": ["a@b.co"],
        "summary": "Hi",
        "subject": "Weekly sync",
        "include_transcript": true,
        "original_transcript": "Bob: hello",
        "sender_details": {"name": "Ada", "favourite_colour": "green"}
    }"#;
    let request = EmailRequest::from_json(json).unwrap();

    assert_eq!(request.subject(), "Weekly sync");
    assert_eq!(request.transcript(), Some("Bob: hello"));
    assert_eq!(
        request.sender_details.as_ref().and_then(|s| s.name.as_deref()),
        Some("Ada")
    );
}

#[test]
fn test_request_from_json_invalid() {
    let err = EmailRequest::from_json("{").unwrap_err();
    assert!(matches!(err, ComposeError::Request(_)));
}

#[test]
fn test_request_blank_subject_uses_default() {
    let mut request = request(&["a@b.co"]);
    request.subject = Some("   ".into());
    assert_eq!(request.subject(), DEFAULT_SUBJECT);
}

#[test]
fn test_request_transcript_requires_flag() {
    let mut request = request(&["a@b.co"]);
    request.original_transcript = Some("raw".into());
    assert!(request.transcript().is_none());

    request.include_transcript = true;
    assert_eq!(request.transcript(), Some("raw"));

    request.original_transcript = Some("  ".into());
    assert!(request.transcript().is_none());
}

#[test]
fn test_request_build() {
    let mut request = request(&[" a@b.co ", "", "c.d@example.org"]);
    request.include_transcript = true;
    request.original_transcript = Some("**raw**".into());

    let email = request.build(&DocumentComposer::default()).unwrap();

    assert_eq!(email.recipients, vec!["a@b.co", "c.d@example.org"]);
    assert_eq!(email.subject, DEFAULT_SUBJECT);
    assert!(email.html.starts_with("<!DOCTYPE html>"));
    assert!(email.html.contains("<h2>Actions</h2>"));
    assert!(email.html.contains("<li><strong>Bob</strong>: send notes</li>"));
    assert!(email.html.contains("<small>**raw**</small>"));
    assert!(email.text.contains("--- SUMMARY ---\nActions\nBob: send notes\n"));
    assert!(email.text.contains("--- ORIGINAL TRANSCRIPT ---\n**raw**"));
}

#[test]
fn test_request_build_without_transcript_flag() {
    let mut request = request(&["a@b.co"]);
    request.original_transcript = Some("hidden".into());

    let email = request.build(&DocumentComposer::default()).unwrap();

    assert!(!email.html.contains("hidden"));
    assert!(!email.text.contains("hidden"));
}

#[test]
fn test_request_no_recipients() {
    let err = request(&["", "  "])
        .build(&DocumentComposer::default())
        .unwrap_err();
    assert!(matches!(err, ComposeError::NoRecipients));
}

#[test]
fn test_request_invalid_recipient() {
    let err = request(&["a@b.co", "not-an-email"]).recipients().unwrap_err();

    match err {
        ComposeError::InvalidRecipient(addr) => assert_eq!(addr, "not-an-email"),
        other => panic!("unexpected error: {other}"),
    }
}
