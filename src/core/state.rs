use crate::core::poll::Poller;
use crate::models::{Filter, Meeting, MeetingId, Project, Screen};

/// A transient message shown to the user until dismissed or expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Everything the client knows for the lifetime of the process.
///
/// The meeting list and the single-meeting cache are updated independently;
/// a list entry may lag behind `meeting` until the next refresh.
#[derive(Debug, Default)]
pub struct ViewState {
    pub project_id: Option<String>,
    pub current_meeting_id: Option<MeetingId>,
    pub meeting: Option<Meeting>,
    pub project: Option<Project>,
    pub meetings: Vec<Meeting>,
    pub filter: Filter,
    pub error: Option<Notice>,
    pub notification: Option<Notice>,
    pub(crate) poller: Poller,
    screen: Screen,
}

impl ViewState {
    pub fn new(project_id: Option<String>) -> Self {
        Self {
            project_id,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Replace the active screen.
    pub fn show(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!(from = ?self.screen, to = ?screen, "screen change");
        }
        self.screen = screen;
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    /// Make `meeting` the one being viewed.
    pub fn select_meeting(&mut self, meeting: Meeting) {
        self.current_meeting_id = Some(meeting.id.clone());
        self.meeting = Some(meeting);
    }

    pub fn clear_meeting(&mut self) {
        self.current_meeting_id = None;
        self.meeting = None;
    }

    /// Overwrite the list entry with the same id, if the list has one.
    pub fn update_listed(&mut self, meeting: &Meeting) -> bool {
        match self.meetings.iter_mut().find(|m| m.id == meeting.id) {
            Some(entry) => {
                *entry = meeting.clone();
                true
            }
            None => false,
        }
    }

    pub fn find_listed(&self, id: &MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|m| &m.id == id)
    }
}
