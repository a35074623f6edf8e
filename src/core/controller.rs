//! The client's state machine.
//!
//! `Controller::handle` consumes one `Event` at a time and returns the
//! `Effect`s the host must carry out: backend calls (run through `execute`,
//! whose result comes back as another event) and banner expiry timers.
//! Nothing here touches the network or a clock, so every transition can be
//! driven directly from tests.

use std::time::Duration;

use crate::config::{LaunchParams, Timings};
use crate::core::api::{MeetingApi, RequestError};
use crate::core::poll::PollTicket;
use crate::core::state::{Notice, ViewState};
use crate::models::{Filter, MEET_URL_PREFIX, Meeting, MeetingId, NewMeeting, Project, Screen};

pub const INVALID_URL_MESSAGE: &str =
    "Please enter a valid Google Meet URL (starting with https://meet.google.com/)";
pub const MISSING_PROJECT_MESSAGE: &str =
    "Please provide a project ID in the URL (e.g., ?project_id=your_project_id)";
pub const NO_ACTIVE_MEETING_MESSAGE: &str = "No active meeting to check";
pub const STARTED_NOTIFICATION: &str = "Meeting transcription started";
pub const NOT_READY_NOTIFICATION: &str = "Transcript not ready yet. Still waiting...";

/// Why the meeting list is being re-fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// Background refresh after a meeting was created.
    AfterCreate,
    /// The user asked to go back to the list.
    Navigate,
    /// Periodic refresh while the list is on screen.
    Auto,
}

#[derive(Debug, Clone)]
pub enum Event {
    Boot(LaunchParams),
    ProjectLoaded(Result<Project, RequestError>),
    BootMeetingLoaded(Result<Meeting, RequestError>),
    BootMeetingsLoaded(Result<Vec<Meeting>, RequestError>),

    Submit { meeting_url: String, title: String },
    MeetingCreated {
        meeting_url: String,
        result: Result<Meeting, RequestError>,
    },
    OpenMeeting(MeetingId),
    CheckStatus,
    StatusChecked {
        meeting_id: MeetingId,
        result: Result<Meeting, RequestError>,
    },
    StartNew,
    BackToList,
    MeetingsRefreshed {
        reason: RefreshReason,
        result: Result<Vec<Meeting>, RequestError>,
    },
    SetFilter(Filter),

    PollTick,
    Polled {
        ticket: PollTicket,
        result: Result<Meeting, RequestError>,
    },
    RefreshTick,

    DismissError,
    ErrorExpired(u64),
    NotificationExpired(u64),
}

/// A backend call requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LoadProject {
        project_id: String,
    },
    BootMeeting {
        project_id: String,
        meeting_id: MeetingId,
    },
    BootMeetings {
        project_id: String,
    },
    CreateMeeting {
        project_id: String,
        meeting: NewMeeting,
    },
    CheckStatus {
        project_id: String,
        meeting_id: MeetingId,
    },
    Poll {
        project_id: String,
        meeting_id: MeetingId,
        ticket: PollTicket,
    },
    Refresh {
        project_id: String,
        reason: RefreshReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Call(Call),
    ExpireError { id: u64, after: Duration },
    ExpireNotification { id: u64, after: Duration },
}

/// Run a call against the backend and wrap the outcome as the event the
/// controller expects back.
pub async fn execute<A: MeetingApi>(api: &A, call: Call) -> Event {
    match call {
        Call::LoadProject { project_id } => Event::ProjectLoaded(api.get_project(&project_id).await),
        Call::BootMeeting {
            project_id,
            meeting_id,
        } => Event::BootMeetingLoaded(api.get_meeting(&project_id, meeting_id.as_str()).await),
        Call::BootMeetings { project_id } => {
            Event::BootMeetingsLoaded(api.list_meetings(&project_id).await)
        }
        Call::CreateMeeting {
            project_id,
            meeting,
        } => {
            let result = api.create_meeting(&project_id, &meeting).await;
            Event::MeetingCreated {
                meeting_url: meeting.google_meet_url,
                result,
            }
        }
        Call::CheckStatus {
            project_id,
            meeting_id,
        } => {
            let result = api.get_meeting(&project_id, meeting_id.as_str()).await;
            Event::StatusChecked { meeting_id, result }
        }
        Call::Poll {
            project_id,
            meeting_id,
            ticket,
        } => Event::Polled {
            ticket,
            result: api.get_meeting(&project_id, meeting_id.as_str()).await,
        },
        Call::Refresh { project_id, reason } => Event::MeetingsRefreshed {
            reason,
            result: api.list_meetings(&project_id).await,
        },
    }
}

#[derive(Debug)]
pub struct Controller {
    state: ViewState,
    timings: Timings,
    boot_meeting: Option<MeetingId>,
    notices: u64,
}

impl Controller {
    pub fn new(timings: Timings) -> Self {
        Self {
            state: ViewState::default(),
            timings,
            boot_meeting: None,
            notices: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Boot(params) => self.boot(params),
            Event::ProjectLoaded(result) => {
                match result {
                    Ok(project) => self.state.project = Some(project),
                    Err(err) => tracing::warn!("could not load project details: {err}"),
                }
                self.boot_lookup_meeting()
            }
            Event::BootMeetingLoaded(result) => match result {
                Ok(meeting) => self.open(meeting),
                Err(err) => {
                    tracing::warn!("could not find meeting {:?}: {err}", self.boot_meeting);
                    self.boot_lookup_meetings()
                }
            },
            Event::BootMeetingsLoaded(result) => {
                match result {
                    Ok(meetings) if !meetings.is_empty() => {
                        self.state.meetings = meetings;
                        self.state.show(Screen::MeetingList);
                    }
                    Ok(_) => self.state.show(Screen::InputForm),
                    Err(err) => {
                        tracing::warn!("could not list meetings for project: {err}");
                        self.state.show(Screen::InputForm);
                    }
                }
                Vec::new()
            }

            Event::Submit { meeting_url, title } => self.submit(&meeting_url, &title),
            Event::MeetingCreated {
                meeting_url,
                result,
            } => self.meeting_created(meeting_url, result),
            Event::OpenMeeting(id) => match self.state.find_listed(&id).cloned() {
                Some(meeting) => self.open(meeting),
                None => {
                    tracing::warn!(%id, "meeting not in the cached list");
                    Vec::new()
                }
            },
            Event::CheckStatus => self.check_status(),
            Event::StatusChecked { meeting_id, result } => {
                // Only the check the loading screen is waiting on may move it.
                if self.state.screen() != Screen::Loading
                    || self.state.current_meeting_id.as_ref() != Some(&meeting_id)
                {
                    tracing::debug!(%meeting_id, "dropping outdated status check");
                    return Vec::new();
                }
                match result {
                    Ok(meeting) if meeting.has_transcript() => {
                        self.transcribed(meeting);
                        Vec::new()
                    }
                    Ok(_) => {
                        self.state.show(Screen::Waiting);
                        vec![self.notify(NOT_READY_NOTIFICATION)]
                    }
                    Err(err) => {
                        self.state.show(Screen::Waiting);
                        vec![self.fail(err.message)]
                    }
                }
            }
            Event::StartNew => {
                self.state.poller.stop();
                self.state.clear_meeting();
                self.state.show(Screen::InputForm);
                Vec::new()
            }
            Event::BackToList => {
                self.state.poller.stop();
                match self.state.project_id.clone() {
                    Some(project_id) => {
                        self.state.show(Screen::Loading);
                        vec![Effect::Call(Call::Refresh {
                            project_id,
                            reason: RefreshReason::Navigate,
                        })]
                    }
                    None => {
                        self.state.show(Screen::MeetingList);
                        Vec::new()
                    }
                }
            }
            Event::MeetingsRefreshed { reason, result } => {
                match result {
                    Ok(meetings) => self.state.meetings = meetings,
                    Err(err) => tracing::warn!(?reason, "error refreshing meetings: {err}"),
                }
                if reason == RefreshReason::Navigate {
                    self.state.show(Screen::MeetingList);
                }
                Vec::new()
            }
            Event::SetFilter(filter) => {
                self.state.filter = filter;
                Vec::new()
            }

            Event::PollTick => match self.state.poller.active() {
                Some(active) => vec![Effect::Call(Call::Poll {
                    project_id: active.project_id.clone(),
                    meeting_id: active.meeting_id.clone(),
                    ticket: active.ticket,
                })],
                None => Vec::new(),
            },
            Event::Polled { ticket, result } => {
                if !self.state.poller.is_current(ticket) {
                    tracing::debug!(?ticket, "dropping result of a cancelled poll");
                    return Vec::new();
                }
                match result {
                    Ok(meeting) if meeting.has_transcript() => self.transcribed(meeting),
                    Ok(meeting) => tracing::debug!(id = %meeting.id, "transcript not ready"),
                    Err(err) => tracing::warn!("error checking meeting status: {err}"),
                }
                Vec::new()
            }
            Event::RefreshTick => {
                if self.state.screen() != Screen::MeetingList {
                    return Vec::new();
                }
                match self.state.project_id.clone() {
                    Some(project_id) => vec![Effect::Call(Call::Refresh {
                        project_id,
                        reason: RefreshReason::Auto,
                    })],
                    None => Vec::new(),
                }
            }

            Event::DismissError => {
                self.state.error = None;
                Vec::new()
            }
            Event::ErrorExpired(id) => {
                if self.state.error.as_ref().is_some_and(|n| n.id == id) {
                    self.state.error = None;
                }
                Vec::new()
            }
            Event::NotificationExpired(id) => {
                if self.state.notification.as_ref().is_some_and(|n| n.id == id) {
                    self.state.notification = None;
                }
                Vec::new()
            }
        }
    }

    fn boot(&mut self, params: LaunchParams) -> Vec<Effect> {
        self.state = ViewState::new(params.project_id.clone());
        self.boot_meeting = params.meeting_id;
        match params.project_id {
            Some(project_id) => vec![Effect::Call(Call::LoadProject { project_id })],
            None => {
                self.state.show(Screen::InputForm);
                Vec::new()
            }
        }
    }

    fn boot_lookup_meeting(&mut self) -> Vec<Effect> {
        match (self.state.project_id.clone(), self.boot_meeting.clone()) {
            (Some(project_id), Some(meeting_id)) => vec![Effect::Call(Call::BootMeeting {
                project_id,
                meeting_id,
            })],
            _ => self.boot_lookup_meetings(),
        }
    }

    fn boot_lookup_meetings(&mut self) -> Vec<Effect> {
        match self.state.project_id.clone() {
            Some(project_id) => vec![Effect::Call(Call::BootMeetings { project_id })],
            None => {
                self.state.show(Screen::InputForm);
                Vec::new()
            }
        }
    }

    /// Show a meeting: its transcript when there is one, otherwise the
    /// waiting screen with a fresh poll.
    fn open(&mut self, meeting: Meeting) -> Vec<Effect> {
        self.state.poller.stop();
        let project_id = if meeting.project_id.is_empty() {
            self.state.project_id.clone().unwrap_or_default()
        } else {
            meeting.project_id.clone()
        };
        let transcribed = meeting.has_transcript();
        let id = meeting.id.clone();
        self.state.select_meeting(meeting);
        if transcribed {
            self.state.show(Screen::Transcript);
        } else {
            self.state.show(Screen::Waiting);
            self.state.poller.start(project_id, id);
        }
        Vec::new()
    }

    fn transcribed(&mut self, meeting: Meeting) {
        self.state.poller.stop();
        self.state.update_listed(&meeting);
        self.state.select_meeting(meeting);
        self.state.show(Screen::Transcript);
    }

    fn submit(&mut self, meeting_url: &str, title: &str) -> Vec<Effect> {
        self.state.error = None;
        let meeting_url = meeting_url.trim();
        let title = title.trim();

        if !meeting_url.starts_with(MEET_URL_PREFIX) {
            return vec![self.fail(INVALID_URL_MESSAGE)];
        }
        let Some(project_id) = self.state.project_id.clone() else {
            return vec![self.fail(MISSING_PROJECT_MESSAGE)];
        };

        self.state.show(Screen::Loading);
        vec![Effect::Call(Call::CreateMeeting {
            project_id,
            meeting: NewMeeting {
                google_meet_url: meeting_url.to_string(),
                title: (!title.is_empty()).then(|| title.to_string()),
            },
        })]
    }

    fn meeting_created(
        &mut self,
        meeting_url: String,
        result: Result<Meeting, RequestError>,
    ) -> Vec<Effect> {
        let mut meeting = match result {
            Ok(meeting) => meeting,
            Err(err) => {
                self.state.show(Screen::InputForm);
                return vec![self.fail(err.message)];
            }
        };
        let project_id = self.state.project_id.clone().unwrap_or_default();
        if meeting.meeting_url.is_empty() {
            meeting.meeting_url = meeting_url;
        }
        if meeting.project_id.is_empty() {
            meeting.project_id = project_id.clone();
        }
        let id = meeting.id.clone();
        self.state.select_meeting(meeting);
        self.state.show(Screen::Waiting);
        self.state.poller.start(project_id.clone(), id);

        vec![
            self.notify(STARTED_NOTIFICATION),
            Effect::Call(Call::Refresh {
                project_id,
                reason: RefreshReason::AfterCreate,
            }),
        ]
    }

    fn check_status(&mut self) -> Vec<Effect> {
        let (Some(project_id), Some(meeting_id)) = (
            self.state.project_id.clone(),
            self.state.current_meeting_id.clone(),
        ) else {
            return vec![self.fail(NO_ACTIVE_MEETING_MESSAGE)];
        };
        self.state.show(Screen::Loading);
        vec![Effect::Call(Call::CheckStatus {
            project_id,
            meeting_id,
        })]
    }

    fn next_notice(&mut self, text: impl Into<String>) -> Notice {
        self.notices += 1;
        Notice {
            id: self.notices,
            text: text.into(),
        }
    }

    fn fail(&mut self, text: impl Into<String>) -> Effect {
        let notice = self.next_notice(text);
        let id = notice.id;
        self.state.error = Some(notice);
        Effect::ExpireError {
            id,
            after: self.timings.error,
        }
    }

    fn notify(&mut self, text: impl Into<String>) -> Effect {
        let notice = self.next_notice(text);
        let id = notice.id;
        self.state.notification = Some(notice);
        Effect::ExpireNotification {
            id,
            after: self.timings.notification,
        }
    }
}
