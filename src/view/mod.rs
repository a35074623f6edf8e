//! Pure derivations from `ViewState` to what each screen shows. The GUI and
//! the headless driver only lay these out.

pub mod date;
pub mod meetings;
pub mod project;
pub mod transcript;

use crate::core::state::ViewState;

pub use date::format_date;
pub use meetings::{MeetingCard, MeetingListView, StatusSummary, filter_meetings};
pub use project::{Block, ProjectDetailsView, Section, SectionView};
pub use transcript::{TranscriptBody, TranscriptLine, parse_transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingView {
    pub meeting_url: String,
    pub project_id: String,
}

impl WaitingView {
    pub fn from_state(state: &ViewState) -> Self {
        let meeting = state.meeting.as_ref();
        Self {
            meeting_url: meeting.map(|m| m.meeting_url.clone()).unwrap_or_default(),
            project_id: meeting
                .map(|m| m.project_id.clone())
                .filter(|p| !p.is_empty())
                .or_else(|| state.project_id.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptView {
    pub meeting_url: String,
    pub project_id: String,
    pub date: String,
    pub body: TranscriptBody,
}

impl TranscriptView {
    pub fn from_state(state: &ViewState) -> Self {
        let waiting = WaitingView::from_state(state);
        let meeting = state.meeting.as_ref();
        Self {
            meeting_url: waiting.meeting_url,
            project_id: waiting.project_id,
            date: format_date(meeting.and_then(|m| m.meeting_datetime.as_deref())),
            body: parse_transcript(meeting.and_then(|m| m.transcription.as_deref())),
        }
    }
}
