use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix every submitted meeting URL must carry.
pub const MEET_URL_PREFIX: &str = "https://meet.google.com/";

/// Backend identifier. The API hands these out as JSON numbers but the
/// launch parameters carry them as strings, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct MeetingId(String);

impl MeetingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for MeetingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| MeetingId(raw.into()))
    }
}

fn flexible_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

/// A meeting record as served by the backend. The client only ever holds a
/// read-through copy; the one change it observes is the transcript arriving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    #[serde(default, deserialize_with = "flexible_id")]
    pub project_id: String,
    #[serde(default)]
    pub meeting_url: String,
    #[serde(default)]
    pub meeting_datetime: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
    /// External transcript id assigned once the recording bot has finished.
    #[serde(default)]
    pub meeting_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStatus {
    Pending,
    Completed,
}

impl MeetingStatus {
    pub fn label(self) -> &'static str {
        match self {
            MeetingStatus::Pending => "Pending",
            MeetingStatus::Completed => "Completed",
        }
    }
}

impl Meeting {
    pub fn has_transcript(&self) -> bool {
        self.transcription.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn status(&self) -> MeetingStatus {
        if self.has_transcript() {
            MeetingStatus::Completed
        } else {
            MeetingStatus::Pending
        }
    }

    /// Human title built from the last path segment of the meeting URL,
    /// e.g. `Meeting abc-defg-hij`.
    pub fn title(&self) -> String {
        if self.meeting_url.is_empty() {
            return "Meeting".to_string();
        }
        let code = self.meeting_url.rsplit('/').next().unwrap_or_default();
        format!("Meeting {code}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub questions: Option<String>,
}

/// Body of the create-meeting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMeeting {
    pub google_meet_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Which meetings the list screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    pub fn matches(self, meeting: &Meeting) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => meeting.has_transcript(),
            Filter::Pending => !meeting.has_transcript(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        })
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            other => Err(format!("unknown filter {other:?} (expected all, completed or pending)")),
        }
    }
}

/// The five screens of the client. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Loading,
    InputForm,
    Waiting,
    Transcript,
    MeetingList,
}
