//! Integration tests for the REST client against a local HTTP responder.
//!
//! Tests cover:
//! - Request methods, paths and JSON bodies for each operation
//! - Error messages from the `{error}` envelope and per-operation fallbacks
//! - Parsing meeting lists and project details
//! - Unreachable backends

mod common;

use anyhow::Result;
use meetscribe::models::NewMeeting;
use meetscribe::{HttpApi, MeetingApi, MeetingId};
use tokio::net::TcpListener;
use url::Url;

use common::serve;

#[tokio::test]
async fn test_get_meeting_hits_project_scoped_path() -> Result<()> {
    let body = r#"{"id": 3, "project_id": "P1", "meeting_url": "https://meet.google.com/abc", "transcription": "Alice: hi"}"#;
    let (base, requests) = serve(vec![(200, body.to_string())]).await;

    let meeting = HttpApi::new(base).get_meeting("P1", "3").await?;
    assert_eq!(meeting.id, MeetingId::new("3"));
    assert!(meeting.has_transcript());

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/projects/P1/meetings/3");
    Ok(())
}

#[tokio::test]
async fn test_create_meeting_posts_url_and_optional_title() -> Result<()> {
    let body = r#"{"status": "ok", "id": 11, "project_id": "P1", "meeting_url": "https://meet.google.com/abc-defg-hij"}"#;
    let (base, requests) = serve(vec![(201, body.to_string()), (201, body.to_string())]).await;
    let api = HttpApi::new(base);

    let created = api
        .create_meeting(
            "P1",
            &NewMeeting {
                google_meet_url: "https://meet.google.com/abc-defg-hij".into(),
                title: None,
            },
        )
        .await?;
    assert_eq!(created.id, MeetingId::new("11"));

    api.create_meeting(
        "P1",
        &NewMeeting {
            google_meet_url: "https://meet.google.com/abc-defg-hij".into(),
            title: Some("Weekly sync".into()),
        },
    )
    .await?;

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/projects/P1/meetings");
    let untitled: serde_json::Value = serde_json::from_str(&requests[0].body)?;
    assert_eq!(
        untitled,
        serde_json::json!({"google_meet_url": "https://meet.google.com/abc-defg-hij"})
    );
    let titled: serde_json::Value = serde_json::from_str(&requests[1].body)?;
    assert_eq!(titled["title"], "Weekly sync");
    Ok(())
}

#[tokio::test]
async fn test_error_envelope_becomes_message() -> Result<()> {
    let (base, _) = serve(vec![(400, r#"{"error": "Invalid Google Meet URL"}"#.to_string())]).await;

    let err = HttpApi::new(base)
        .create_meeting(
            "P1",
            &NewMeeting {
                google_meet_url: "https://meet.google.com/x".into(),
                title: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.to_string(), "Invalid Google Meet URL");
    Ok(())
}

#[tokio::test]
async fn test_error_without_envelope_uses_fallback() -> Result<()> {
    let (base, _) = serve(vec![(500, "<html>oops</html>".to_string())]).await;

    let err = HttpApi::new(base).list_meetings("P1").await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Failed to retrieve meetings for project");
    Ok(())
}

#[tokio::test]
async fn test_list_and_project_parse() -> Result<()> {
    let meetings = r#"[
        {"id": 1, "project_id": "P1", "meeting_url": "https://meet.google.com/a", "transcription": ""},
        {"id": "2", "project_id": "P1", "meeting_url": "https://meet.google.com/b", "transcription": "Bob: hi"}
    ]"#;
    let project = r##"{"id": "P1", "requirements": "# Goals", "questions": null}"##;
    let (base, requests) = serve(vec![(200, meetings.to_string()), (200, project.to_string())]).await;
    let api = HttpApi::new(base);

    let listed = api.list_meetings("P1").await?;
    assert_eq!(listed.len(), 2);
    assert!(!listed[0].has_transcript());
    assert!(listed[1].has_transcript());

    let project = api.get_project("P1").await?;
    assert_eq!(project.requirements.as_deref(), Some("# Goals"));
    assert!(project.questions.is_none());

    let paths: Vec<String> = requests.lock().unwrap().iter().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec!["/projects/P1/meetings", "/projects/P1"]);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_reports_fallback() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = HttpApi::new(Url::parse(&format!("http://{addr}"))?);
    let err = api.get_project("P1").await.unwrap_err();
    assert_eq!(err.status, None);
    assert!(err.message.starts_with("Failed to retrieve project details"));
    Ok(())
}
