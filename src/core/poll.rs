//! Status polling for a single pending meeting.
//!
//! The poller owns no timer itself. The host drives it with a periodic tick
//! (an iced subscription or a tokio interval) and the poller decides whether
//! a tick turns into a request. Every `start` hands out a fresh ticket, and
//! results carrying a stale ticket are dropped, so at most one poll is ever
//! live even though in-flight requests cannot be interrupted.

use crate::models::MeetingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePoll {
    pub project_id: String,
    pub meeting_id: MeetingId,
    pub ticket: PollTicket,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PollState {
    #[default]
    Idle,
    Polling(ActivePoll),
    Stopped,
}

#[derive(Debug, Default)]
pub struct Poller {
    state: PollState,
    issued: u64,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever poll is running and arm a new one.
    pub fn start(&mut self, project_id: impl Into<String>, meeting_id: MeetingId) -> PollTicket {
        self.stop();
        self.issued += 1;
        let ticket = PollTicket(self.issued);
        tracing::debug!(%meeting_id, ticket = self.issued, "polling started");
        self.state = PollState::Polling(ActivePoll {
            project_id: project_id.into(),
            meeting_id,
            ticket,
        });
        ticket
    }

    /// Unconditional; a no-op when nothing is polling.
    pub fn stop(&mut self) {
        if let PollState::Polling(active) = &self.state {
            tracing::debug!(meeting_id = %active.meeting_id, "polling stopped");
            self.state = PollState::Stopped;
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActivePoll> {
        match &self.state {
            PollState::Polling(active) => Some(active),
            _ => None,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.active().is_some()
    }

    pub fn is_current(&self, ticket: PollTicket) -> bool {
        self.active().is_some_and(|active| active.ticket == ticket)
    }
}
