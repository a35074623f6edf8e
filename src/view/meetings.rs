use crate::core::state::ViewState;
use crate::models::{Filter, Meeting, MeetingId, MeetingStatus};
use crate::view::date::format_date;

pub const NO_MATCHES: &str = "No meetings found matching the selected filter.";

/// The subset of `meetings` the filter lets through, in list order.
pub fn filter_meetings(meetings: &[Meeting], filter: Filter) -> Vec<&Meeting> {
    meetings.iter().filter(|m| filter.matches(m)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl StatusSummary {
    pub fn of(meetings: &[Meeting]) -> Self {
        let completed = meetings.iter().filter(|m| m.has_transcript()).count();
        Self {
            total: meetings.len(),
            completed,
            pending: meetings.len() - completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingCard {
    pub id: MeetingId,
    pub title: String,
    pub status: MeetingStatus,
    pub date: String,
    pub url: String,
}

impl From<&Meeting> for MeetingCard {
    fn from(meeting: &Meeting) -> Self {
        Self {
            id: meeting.id.clone(),
            title: meeting.title(),
            status: meeting.status(),
            date: format_date(meeting.meeting_datetime.as_deref()),
            url: meeting.meeting_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingListView {
    pub project_id: String,
    /// Counts over the whole cached list, not just the visible cards.
    pub summary: StatusSummary,
    pub filter: Filter,
    pub cards: Vec<MeetingCard>,
}

impl MeetingListView {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            project_id: state.project_id.clone().unwrap_or_default(),
            summary: StatusSummary::of(&state.meetings),
            filter: state.filter,
            cards: filter_meetings(&state.meetings, state.filter)
                .into_iter()
                .map(MeetingCard::from)
                .collect(),
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(NO_MATCHES)
    }
}
