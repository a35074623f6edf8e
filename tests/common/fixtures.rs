use meetscribe::{Meeting, MeetingId, Project};

pub const PROJECT: &str = "P1";

/// A meeting of `PROJECT`; an empty `transcription` means still pending.
pub fn meeting(id: &str, transcription: &str) -> Meeting {
    Meeting {
        id: MeetingId::new(id),
        project_id: PROJECT.to_string(),
        meeting_url: format!("https://meet.google.com/{id}-code"),
        meeting_datetime: Some("2024-03-05T14:07:09.123456".to_string()),
        transcription: Some(transcription.to_string()),
        meeting_id: None,
    }
}

pub fn project() -> Project {
    Project {
        id: PROJECT.to_string(),
        requirements: Some("# Scope\n\n- capture decisions\n- list owners".to_string()),
        questions: None,
    }
}
